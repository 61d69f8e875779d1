//! Read-only view of a validated argument bundle, handed to handlers.

use crate::arguments::{Argument, Arguments};
use crate::error::HandlerFailure;

/// Arguments whose names are known to match the operation's parameter set
/// exactly.
///
/// Only the dispatcher constructs this, after contract validation.
pub(crate) struct BoundArguments<'a> {
    arguments: &'a Arguments,
}

impl<'a> BoundArguments<'a> {
    pub(crate) fn new(arguments: &'a Arguments) -> Self {
        Self { arguments }
    }

    fn lookup(&self, name: &'static str) -> Result<&'a Argument, HandlerFailure> {
        self.arguments
            .get(name)
            .ok_or(HandlerFailure::Unbound { name })
    }

    pub(crate) fn scalar(&self, name: &'static str) -> Result<f64, HandlerFailure> {
        match self.lookup(name)? {
            Argument::Scalar(value) => Ok(*value),
            other => Err(HandlerFailure::ArgumentShape {
                name,
                expected: "number",
                actual: other.kind(),
            }),
        }
    }

    pub(crate) fn series(&self, name: &'static str) -> Result<&'a [f64], HandlerFailure> {
        match self.lookup(name)? {
            Argument::Series(values) => Ok(values),
            other => Err(HandlerFailure::ArgumentShape {
                name,
                expected: "list of numbers",
                actual: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_is_a_handler_failure() {
        let args = Arguments::new().with("values", 3.0).with("x", vec![1.0]);
        let bound = BoundArguments::new(&args);
        assert!(bound.scalar("values").is_err());
        assert!(bound.series("x").is_ok());
        assert_eq!(
            bound.series("values").map_err(|e| e.to_string()),
            Err("argument `values` must be a list of numbers, got a number".to_string())
        );
        assert!(matches!(
            bound.scalar("missing"),
            Err(HandlerFailure::Unbound { name: "missing" })
        ));
    }
}
