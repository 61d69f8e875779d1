//! Logarithms, exponentials, and hyperbolic functions.

use crate::{FormulaError, FormulaResult};

fn positive_argument(x: f64) -> FormulaResult<f64> {
    if x <= 0.0 {
        return Err(FormulaError::OutOfDomain(
            "logarithm undefined for non-positive numbers",
        ));
    }
    Ok(x)
}

pub fn natural_log(x: f64) -> FormulaResult<f64> {
    Ok(positive_argument(x)?.ln())
}

pub fn log_base_10(x: f64) -> FormulaResult<f64> {
    Ok(positive_argument(x)?.log10())
}

pub fn log_base_2(x: f64) -> FormulaResult<f64> {
    Ok(positive_argument(x)?.log2())
}

pub fn log_custom_base(x: f64, base: f64) -> FormulaResult<f64> {
    let x = positive_argument(x)?;
    if base <= 0.0 || base == 1.0 {
        return Err(FormulaError::OutOfDomain(
            "base must be positive and not equal to 1",
        ));
    }
    Ok(x.ln() / base.ln())
}

pub fn exponential_e(x: f64) -> f64 {
    x.exp()
}

pub fn exponential_base_10(x: f64) -> f64 {
    10f64.powf(x)
}

pub fn exponential_base_2(x: f64) -> f64 {
    x.exp2()
}

pub fn exponential_custom_base(base: f64, exponent: f64) -> FormulaResult<f64> {
    if base == 0.0 && exponent <= 0.0 {
        return Err(FormulaError::OutOfDomain(
            "0 raised to non-positive power is undefined",
        ));
    }
    Ok(base.powf(exponent))
}

pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn asinh(x: f64) -> f64 {
    x.asinh()
}

pub fn acosh(x: f64) -> FormulaResult<f64> {
    if x < 1.0 {
        return Err(FormulaError::OutOfDomain(
            "inverse hyperbolic cosine undefined for x < 1",
        ));
    }
    Ok(x.acosh())
}

pub fn atanh(x: f64) -> FormulaResult<f64> {
    if x.abs() >= 1.0 {
        return Err(FormulaError::OutOfDomain(
            "inverse hyperbolic tangent undefined for |x| >= 1",
        ));
    }
    Ok(x.atanh())
}
