//! Values produced by a successful dispatch.

use formulary_formulas::Mode;
use serde::Serialize;

/// Result of one operation.
///
/// Serializes untagged: a number, a `[x, y]` pair, an array, or a boolean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Scalar(f64),
    /// A 2-D point, e.g. a midpoint.
    Pair(f64, f64),
    /// Several tied values, e.g. a multi-modal sample.
    Values(Vec<f64>),
    Flag(bool),
}

impl Outcome {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            Self::Pair(x, y) => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Self::Values(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(value) => value.is_finite(),
            Self::Pair(x, y) => x.is_finite() && y.is_finite(),
            Self::Values(values) => values.iter().all(|value| value.is_finite()),
            Self::Flag(_) => true,
        }
    }
}

impl From<Mode> for Outcome {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single(value) => Self::Scalar(value),
            Mode::Tied(values) => Self::Values(values),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Pair(x, y) => write!(f, "({x}, {y})"),
            Self::Values(values) => {
                let rendered: Vec<String> = values.iter().map(f64::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_json_untagged() {
        assert_eq!(serde_json::json!(Outcome::Scalar(42.0)), serde_json::json!(42.0));
        assert_eq!(
            serde_json::json!(Outcome::Pair(2.0, -1.0)),
            serde_json::json!([2.0, -1.0])
        );
        assert_eq!(
            serde_json::json!(Outcome::Values(vec![1.0, 2.0])),
            serde_json::json!([1.0, 2.0])
        );
        assert_eq!(serde_json::json!(Outcome::Flag(true)), serde_json::json!(true));
    }

    #[test]
    fn display_is_human_readable() {
        insta::assert_snapshot!(Outcome::Scalar(42.0).to_string(), @"42");
        insta::assert_snapshot!(Outcome::Pair(2.0, 3.5).to_string(), @"(2, 3.5)");
        insta::assert_snapshot!(Outcome::Values(vec![1.0, 2.0]).to_string(), @"[1, 2]");
    }

    #[test]
    fn finiteness_covers_every_component() {
        assert!(Outcome::Scalar(1.0).is_finite());
        assert!(!Outcome::Scalar(f64::INFINITY).is_finite());
        assert!(!Outcome::Pair(1.0, f64::NAN).is_finite());
        assert!(!Outcome::Values(vec![1.0, f64::NEG_INFINITY]).is_finite());
        assert!(Outcome::Flag(false).is_finite());
    }
}
