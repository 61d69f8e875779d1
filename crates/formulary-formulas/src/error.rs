//! Error types for formula preconditions.

/// A domain precondition of a formula was violated.
///
/// The payload is the human-readable reason; callers that wrap this error
/// keep the text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormulaError {
    /// A divisor (or modulus) was zero.
    #[error("{0}")]
    DivisionByZero(&'static str),

    /// An input that must be non-negative (or positive) was not.
    #[error("{0}")]
    NegativeInput(&'static str),

    /// An input that must be a whole number had a fractional part.
    #[error("{0}")]
    NotInteger(&'static str),

    /// An input lies outside the function's mathematical domain.
    #[error("{0}")]
    OutOfDomain(&'static str),

    /// A sample was empty.
    #[error("{0}")]
    EmptySample(&'static str),

    /// A sample had fewer values than the statistic needs.
    #[error("{0}")]
    SampleTooSmall(&'static str),

    /// Paired samples had different lengths.
    #[error("{0}")]
    LengthMismatch(&'static str),

    /// The geometry or data is degenerate (vertical line, zero vector,
    /// zero variance).
    #[error("{0}")]
    Degenerate(&'static str),

    /// Every distinct value occurs equally often.
    #[error("{0}")]
    NoMode(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_reason() {
        insta::assert_snapshot!(
            FormulaError::DivisionByZero("division by zero is not allowed").to_string(),
            @"division by zero is not allowed"
        );
    }
}
