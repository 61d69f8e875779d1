//! Named argument bundles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One named input: a scalar, or a sample for statistical operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    Scalar(f64),
    Series(Vec<f64>),
}

impl Argument {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "number",
            Self::Series(_) => "list of numbers",
        }
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for Argument {
    fn from(values: Vec<f64>) -> Self {
        Self::Series(values)
    }
}

impl From<&[f64]> for Argument {
    fn from(values: &[f64]) -> Self {
        Self::Series(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Argument {
    fn from(values: [f64; N]) -> Self {
        Self::Series(values.to_vec())
    }
}

/// Caller-owned mapping from parameter name to value for one call.
///
/// Names are case-sensitive and kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments {
    entries: BTreeMap<String, Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Argument>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces `name`, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Argument>,
    ) -> Option<Argument> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Argument> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Supplied names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<Argument>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Self::new();
        for (name, value) in iter {
            arguments.insert(name, value);
        }
        arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_names_sorted() {
        let args = Arguments::new()
            .with("y2", 4.0)
            .with("x1", 0)
            .with("values", vec![1.0, 2.0]);
        let names: Vec<&str> = args.names().collect();
        assert_eq!(names, ["values", "x1", "y2"]);
        assert_eq!(args.get("x1"), Some(&Argument::Scalar(0.0)));
        assert!(!args.contains("X1"));
    }

    #[test]
    fn json_numbers_and_arrays_map_to_scalars_and_series() {
        let args: Arguments =
            serde_json::from_str(r#"{"a": 15, "values": [1, 2.5]}"#).expect("bundle");
        assert_eq!(args.get("a"), Some(&Argument::Scalar(15.0)));
        assert_eq!(args.get("values"), Some(&Argument::Series(vec![1.0, 2.5])));
        assert!(serde_json::from_str::<Arguments>(r#"{"a": "text"}"#).is_err());
    }

    #[test]
    fn collects_from_pairs() {
        let args: Arguments = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert_eq!(args.len(), 2);
        assert!(args.contains("b"));
    }
}
