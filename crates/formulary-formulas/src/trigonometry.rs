//! Trigonometric functions in degrees and radians.

use crate::{FormulaError, FormulaResult};

/// Reciprocal functions are undefined when the denominator is this close to
/// zero.
pub const RECIPROCAL_EPSILON: f64 = 1e-10;

fn unit_interval(value: f64) -> FormulaResult<f64> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(FormulaError::OutOfDomain("value must be between -1 and 1"));
    }
    Ok(value)
}

pub fn sin_degrees(angle_degrees: f64) -> f64 {
    angle_degrees.to_radians().sin()
}

pub fn cos_degrees(angle_degrees: f64) -> f64 {
    angle_degrees.to_radians().cos()
}

pub fn tan_degrees(angle_degrees: f64) -> f64 {
    angle_degrees.to_radians().tan()
}

pub fn sin_radians(angle_radians: f64) -> f64 {
    angle_radians.sin()
}

pub fn cos_radians(angle_radians: f64) -> f64 {
    angle_radians.cos()
}

pub fn tan_radians(angle_radians: f64) -> f64 {
    angle_radians.tan()
}

pub fn asin_degrees(value: f64) -> FormulaResult<f64> {
    Ok(unit_interval(value)?.asin().to_degrees())
}

pub fn acos_degrees(value: f64) -> FormulaResult<f64> {
    Ok(unit_interval(value)?.acos().to_degrees())
}

pub fn atan_degrees(value: f64) -> f64 {
    value.atan().to_degrees()
}

pub fn asin_radians(value: f64) -> FormulaResult<f64> {
    Ok(unit_interval(value)?.asin())
}

pub fn acos_radians(value: f64) -> FormulaResult<f64> {
    Ok(unit_interval(value)?.acos())
}

pub fn atan_radians(value: f64) -> f64 {
    value.atan()
}

/// Quadrant-aware arctangent of `y / x`, in degrees.
pub fn atan2_degrees(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

pub fn atan2_radians(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

pub fn sec_degrees(angle_degrees: f64) -> FormulaResult<f64> {
    let cos = cos_degrees(angle_degrees);
    if cos.abs() < RECIPROCAL_EPSILON {
        return Err(FormulaError::OutOfDomain(
            "secant undefined (cosine is zero)",
        ));
    }
    Ok(1.0 / cos)
}

pub fn csc_degrees(angle_degrees: f64) -> FormulaResult<f64> {
    let sin = sin_degrees(angle_degrees);
    if sin.abs() < RECIPROCAL_EPSILON {
        return Err(FormulaError::OutOfDomain("cosecant undefined (sine is zero)"));
    }
    Ok(1.0 / sin)
}

pub fn cot_degrees(angle_degrees: f64) -> FormulaResult<f64> {
    let tan = tan_degrees(angle_degrees);
    if tan.abs() < RECIPROCAL_EPSILON {
        return Err(FormulaError::OutOfDomain(
            "cotangent undefined (tangent is zero)",
        ));
    }
    Ok(1.0 / tan)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn degree_functions() {
        assert!(close(sin_degrees(30.0), 0.5));
        assert!(close(cos_degrees(60.0), 0.5));
        assert!(close(tan_degrees(45.0), 1.0));
        assert!(close(atan_degrees(1.0), 45.0));
        assert!(close(atan2_degrees(1.0, -1.0), 135.0));
    }

    #[test]
    fn inverse_functions_check_the_unit_interval() {
        assert!(close(asin_degrees(1.0).expect("asin"), 90.0));
        assert!(close(acos_radians(-1.0).expect("acos"), PI));
        assert!(matches!(
            asin_radians(1.5),
            Err(FormulaError::OutOfDomain(_))
        ));
        assert!(acos_degrees(-1.01).is_err());
    }

    #[test]
    fn reciprocals_fail_near_zero_denominators() {
        assert!(close(sec_degrees(60.0).expect("sec"), 2.0));
        assert!(sec_degrees(90.0).is_err());
        assert!(close(csc_degrees(30.0).expect("csc"), 2.0));
        assert!(csc_degrees(180.0).is_err());
        assert!(close(cot_degrees(45.0).expect("cot"), 1.0));
        assert!(cot_degrees(0.0).is_err());
    }

    #[test]
    fn conversions() {
        assert!(close(degrees_to_radians(180.0), PI));
        assert!(close(radians_to_degrees(PI / 2.0), 90.0));
    }
}
