//! Deterministic consistency check over the operation registry.
//!
//! The registry is static, so a failing check means the table and the
//! catalog drifted apart at build time. The report carries a semantic
//! digest so two builds can be compared without diffing the full table.

use crate::operation::OperationId;
use crate::registry::{OPERATION_REGISTRY_KIND, OperationInfo, list_operations};
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::sync::OnceLock;

pub const REGISTRY_CHECK_KIND: &str = "formulary.registry_check.v1";
const REGISTRY_DIGEST_PREFIX: &str = "fr1_";

const FAILURE_REGISTRY_EMPTY_FIELD: &str = "registry_empty_field";
const FAILURE_REGISTRY_DUPLICATE_OPERATION: &str = "registry_duplicate_operation";
const FAILURE_REGISTRY_MISSING_OPERATION: &str = "registry_missing_operation";
const FAILURE_REGISTRY_ROW_MISALIGNED: &str = "registry_row_misaligned";
const FAILURE_REGISTRY_CATEGORY_MISMATCH: &str = "registry_category_mismatch";
const FAILURE_REGISTRY_INVALID_PARAMETER: &str = "registry_invalid_parameter_name";
const FAILURE_REGISTRY_DUPLICATE_PARAMETER: &str = "registry_duplicate_parameter";

fn parameter_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9_]*$").expect("parameter name regex must compile")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryCheckIssue {
    pub failure_class: String,
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryCheckReport {
    pub schema: u32,
    pub check_kind: String,
    pub registry_kind: String,
    pub result: String,
    pub failure_classes: Vec<String>,
    pub issues: Vec<RegistryCheckIssue>,
    pub operation_count: usize,
    pub semantic_digest: String,
}

impl RegistryCheckReport {
    pub fn accepted(&self) -> bool {
        self.result == "accepted"
    }
}

fn issue(failure_class: &str, path: String, message: String) -> RegistryCheckIssue {
    RegistryCheckIssue {
        failure_class: failure_class.to_string(),
        path,
        message,
    }
}

fn validate_rows(rows: &[OperationInfo]) -> Vec<RegistryCheckIssue> {
    let mut issues = Vec::new();
    let mut seen: BTreeSet<OperationId> = BTreeSet::new();

    for (position, row) in rows.iter().enumerate() {
        let path = format!("operations/{}", row.id);

        if OperationId::ALL.get(position) != Some(&row.id) {
            issues.push(issue(
                FAILURE_REGISTRY_ROW_MISALIGNED,
                path.clone(),
                format!("row {position} does not match its catalog position"),
            ));
        }
        if !seen.insert(row.id) {
            issues.push(issue(
                FAILURE_REGISTRY_DUPLICATE_OPERATION,
                path.clone(),
                "duplicate operation row".to_string(),
            ));
        }
        if row.category != row.id.category() {
            issues.push(issue(
                FAILURE_REGISTRY_CATEGORY_MISMATCH,
                format!("{path}/category"),
                format!(
                    "category mismatch (expected={}, got={})",
                    row.id.category(),
                    row.category
                ),
            ));
        }
        if row.display_name.trim().is_empty()
            || row.summary.trim().is_empty()
            || row.required_params.is_empty()
        {
            issues.push(issue(
                FAILURE_REGISTRY_EMPTY_FIELD,
                path.clone(),
                "operation row must provide a name, a summary, and parameters".to_string(),
            ));
        }

        let mut params: BTreeSet<&str> = BTreeSet::new();
        for name in &row.required_params {
            if !parameter_name_re().is_match(name) {
                issues.push(issue(
                    FAILURE_REGISTRY_INVALID_PARAMETER,
                    format!("{path}/requiredParams"),
                    format!("parameter name `{name}` is not snake_case"),
                ));
            }
            if !params.insert(name.as_str()) {
                issues.push(issue(
                    FAILURE_REGISTRY_DUPLICATE_PARAMETER,
                    format!("{path}/requiredParams"),
                    format!("parameter `{name}` declared twice"),
                ));
            }
        }
    }

    for id in OperationId::ALL {
        if !seen.contains(id) {
            issues.push(issue(
                FAILURE_REGISTRY_MISSING_OPERATION,
                "operations".to_string(),
                format!("missing operation row: {id}"),
            ));
        }
    }

    issues.sort_by(|a, b| {
        (&a.failure_class, &a.path, &a.message).cmp(&(&b.failure_class, &b.path, &b.message))
    });
    issues
}

fn registry_check_digest(result: &str, failure_classes: &[String], rows: &[OperationInfo]) -> String {
    let mut hasher = Sha256::new();
    for part in [REGISTRY_CHECK_KIND, OPERATION_REGISTRY_KIND, result] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    for class in failure_classes {
        hasher.update(class.as_bytes());
        hasher.update([0u8]);
    }
    for row in rows {
        hasher.update(row.id.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(row.category.as_str().as_bytes());
        hasher.update([0u8]);
        for name in &row.required_params {
            hasher.update(name.as_bytes());
            hasher.update([0u8]);
        }
        hasher.update([1u8]);
    }
    format!("{REGISTRY_DIGEST_PREFIX}{:x}", hasher.finalize())
}

/// Check an arbitrary set of registry rows.
pub fn check_registry_rows(rows: &[OperationInfo]) -> RegistryCheckReport {
    let issues = validate_rows(rows);
    let mut failure_classes: Vec<String> = issues
        .iter()
        .map(|issue| issue.failure_class.clone())
        .collect();
    failure_classes.sort();
    failure_classes.dedup();
    let result = if issues.is_empty() {
        "accepted".to_string()
    } else {
        "rejected".to_string()
    };
    let semantic_digest = registry_check_digest(&result, &failure_classes, rows);

    RegistryCheckReport {
        schema: 1,
        check_kind: REGISTRY_CHECK_KIND.to_string(),
        registry_kind: OPERATION_REGISTRY_KIND.to_string(),
        result,
        failure_classes,
        issues,
        operation_count: rows.len(),
        semantic_digest,
    }
}

/// Check the built-in registry.
pub fn registry_check() -> RegistryCheckReport {
    check_registry_rows(&list_operations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Category;

    #[test]
    fn built_in_registry_is_accepted() {
        let report = registry_check();
        assert!(report.accepted(), "issues: {:?}", report.issues);
        assert!(report.failure_classes.is_empty());
        assert_eq!(report.operation_count, OperationId::COUNT);
        assert!(report.semantic_digest.starts_with(REGISTRY_DIGEST_PREFIX));
        assert_eq!(report.semantic_digest, registry_check().semantic_digest);
    }

    #[test]
    fn tampered_rows_are_rejected_with_sorted_issues() {
        let mut rows = list_operations();
        rows[0].required_params = vec!["a".to_string(), "a".to_string()];
        rows[1].required_params.push("Bad-Name".to_string());
        rows[2].category = Category::Statistics;
        rows.pop();

        let report = check_registry_rows(&rows);
        assert!(!report.accepted());
        assert_eq!(
            report.failure_classes,
            vec![
                FAILURE_REGISTRY_CATEGORY_MISMATCH.to_string(),
                FAILURE_REGISTRY_DUPLICATE_PARAMETER.to_string(),
                FAILURE_REGISTRY_INVALID_PARAMETER.to_string(),
                FAILURE_REGISTRY_MISSING_OPERATION.to_string(),
            ]
        );
        assert!(
            report
                .issues
                .iter()
                .any(|issue| issue.message == "missing operation row: percentile")
        );
        let classes: Vec<&str> = report
            .issues
            .iter()
            .map(|issue| issue.failure_class.as_str())
            .collect();
        let mut sorted = classes.clone();
        sorted.sort();
        assert_eq!(classes, sorted);
        assert_ne!(report.semantic_digest, registry_check().semantic_digest);
    }

    #[test]
    fn swapped_rows_are_misaligned() {
        let mut rows = list_operations();
        rows.swap(0, 1);
        let report = check_registry_rows(&rows);
        assert_eq!(
            report.failure_classes,
            vec![FAILURE_REGISTRY_ROW_MISALIGNED.to_string()]
        );
        assert_eq!(report.issues.len(), 2);
    }

    #[test]
    fn duplicated_row_is_reported_once_per_extra_copy() {
        let mut rows = list_operations();
        let extra = rows[5].clone();
        rows.push(extra);
        let report = check_registry_rows(&rows);
        assert!(
            report
                .failure_classes
                .contains(&FAILURE_REGISTRY_DUPLICATE_OPERATION.to_string())
        );
        assert_eq!(
            report
                .issues
                .iter()
                .filter(|issue| issue.failure_class == FAILURE_REGISTRY_DUPLICATE_OPERATION)
                .count(),
            1
        );
    }
}
