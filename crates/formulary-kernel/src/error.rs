//! The dispatcher's error surface.

use formulary_formulas::FormulaError;
use serde::Serialize;

/// Every way a dispatch can fail.
///
/// Structural failures (`UnsupportedOperation`, `MissingArguments`,
/// `UnexpectedArguments`) are detected before any handler runs. Anything a
/// handler raises is reported as `CalculationFailed` with its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },

    /// Absent required names, in registry declaration order.
    #[error("missing required arguments: {}", .names.join(", "))]
    MissingArguments { names: Vec<String> },

    /// Supplied names outside the required set, sorted.
    #[error("unexpected arguments: {}", .names.join(", "))]
    UnexpectedArguments { names: Vec<String> },

    #[error("calculation error: {message}")]
    CalculationFailed { message: String },
}

/// Discriminant of [`DispatchError`], for structured rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchErrorKind {
    UnsupportedOperation,
    MissingArguments,
    UnexpectedArguments,
    CalculationFailed,
}

impl DispatchError {
    pub fn kind(&self) -> DispatchErrorKind {
        match self {
            Self::UnsupportedOperation { .. } => DispatchErrorKind::UnsupportedOperation,
            Self::MissingArguments { .. } => DispatchErrorKind::MissingArguments,
            Self::UnexpectedArguments { .. } => DispatchErrorKind::UnexpectedArguments,
            Self::CalculationFailed { .. } => DispatchErrorKind::CalculationFailed,
        }
    }

    /// Argument names carried by the missing/unexpected kinds.
    pub fn names(&self) -> &[String] {
        match self {
            Self::MissingArguments { names } | Self::UnexpectedArguments { names } => names,
            _ => &[],
        }
    }
}

/// Failure raised while a handler runs. Never escapes the dispatcher.
#[derive(Debug, thiserror::Error)]
pub(crate) enum HandlerFailure {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("argument `{name}` must be a {expected}, got a {actual}")]
    ArgumentShape {
        name: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("argument `{name}` was not bound")]
    Unbound { name: &'static str },

    #[error("result is not a finite number")]
    NonFinite,
}

impl From<HandlerFailure> for DispatchError {
    fn from(failure: HandlerFailure) -> Self {
        Self::CalculationFailed {
            message: failure.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_list_every_name() {
        let missing = DispatchError::MissingArguments {
            names: vec!["x1".to_string(), "y2".to_string()],
        };
        insta::assert_snapshot!(missing.to_string(), @"missing required arguments: x1, y2");

        let unexpected = DispatchError::UnexpectedArguments {
            names: vec!["c".to_string()],
        };
        insta::assert_snapshot!(unexpected.to_string(), @"unexpected arguments: c");
        assert_eq!(unexpected.names(), ["c".to_string()]);
    }

    #[test]
    fn handler_failures_become_calculation_failed() {
        let wrapped: DispatchError =
            HandlerFailure::from(FormulaError::DivisionByZero("division by zero is not allowed"))
                .into();
        assert_eq!(wrapped.kind(), DispatchErrorKind::CalculationFailed);
        insta::assert_snapshot!(
            wrapped.to_string(),
            @"calculation error: division by zero is not allowed"
        );
        assert!(wrapped.names().is_empty());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let rendered =
            serde_json::to_string(&DispatchErrorKind::UnexpectedArguments).expect("kind");
        assert_eq!(rendered, "\"unexpected_arguments\"");
    }
}
