//! Shared domain guards for the shape formulas.

use crate::{FormulaError, FormulaResult};

pub(crate) fn non_negative(values: &[f64], reason: &'static str) -> FormulaResult<()> {
    if values.iter().any(|value| *value < 0.0) {
        return Err(FormulaError::NegativeInput(reason));
    }
    Ok(())
}

pub(crate) fn positive(values: &[f64], reason: &'static str) -> FormulaResult<()> {
    if values.iter().any(|value| *value <= 0.0) {
        return Err(FormulaError::NegativeInput(reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_passes_non_negative_but_not_positive() {
        assert_eq!(non_negative(&[0.0, 2.0], "negative"), Ok(()));
        assert_eq!(
            non_negative(&[1.0, -0.5], "negative"),
            Err(FormulaError::NegativeInput("negative"))
        );
        assert_eq!(positive(&[1.0, 2.0], "not positive"), Ok(()));
        assert_eq!(
            positive(&[1.0, 0.0], "not positive"),
            Err(FormulaError::NegativeInput("not positive"))
        );
    }
}
