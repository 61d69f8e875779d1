//! Basic and advanced arithmetic.

use crate::{FormulaError, FormulaResult};

fn require_integer(value: f64, reason: &'static str) -> FormulaResult<f64> {
    if value.is_finite() && value.fract() == 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::NotInteger(reason))
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> FormulaResult<f64> {
    if b == 0.0 {
        return Err(FormulaError::DivisionByZero(
            "division by zero is not allowed",
        ));
    }
    Ok(a / b)
}

/// Remainder of `a / b`, carrying the sign of the divisor.
pub fn modulo(a: f64, b: f64) -> FormulaResult<f64> {
    if b == 0.0 {
        return Err(FormulaError::DivisionByZero("modulo by zero is not allowed"));
    }
    let remainder = a % b;
    if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}

/// Quotient rounded toward negative infinity.
pub fn floor_divide(a: f64, b: f64) -> FormulaResult<f64> {
    if b == 0.0 {
        return Err(FormulaError::DivisionByZero(
            "division by zero is not allowed",
        ));
    }
    Ok((a / b).floor())
}

pub fn power(num: f64, power: f64) -> f64 {
    num.powf(power)
}

pub fn square_root(num: f64) -> FormulaResult<f64> {
    if num < 0.0 {
        return Err(FormulaError::OutOfDomain(
            "square root of negative number is not supported",
        ));
    }
    Ok(num.sqrt())
}

/// Real cube root; negative inputs give negative roots.
pub fn cube_root(num: f64) -> f64 {
    num.cbrt()
}

/// Real `n`th root. Odd roots of negative numbers are negative.
pub fn nth_root(num: f64, n: f64) -> FormulaResult<f64> {
    if n == 0.0 {
        return Err(FormulaError::OutOfDomain("cannot calculate 0th root"));
    }
    if num < 0.0 && n % 2.0 == 0.0 {
        return Err(FormulaError::OutOfDomain(
            "even root of negative number is not supported",
        ));
    }
    if num >= 0.0 {
        Ok(num.powf(1.0 / n))
    } else {
        Ok(-(-num).powf(1.0 / n))
    }
}

pub fn square(num: f64) -> f64 {
    num * num
}

pub fn cube(num: f64) -> f64 {
    num * num * num
}

pub fn absolute_value(num: f64) -> f64 {
    num.abs()
}

/// `-1`, `0` or `1`.
pub fn sign(num: f64) -> f64 {
    if num > 0.0 {
        1.0
    } else if num < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn ceiling(num: f64) -> f64 {
    num.ceil()
}

pub fn floor(num: f64) -> f64 {
    num.floor()
}

/// Round to `decimals` places, ties to even.
pub fn round_to_decimals(num: f64, decimals: f64) -> FormulaResult<f64> {
    if decimals < 0.0 {
        return Err(FormulaError::NegativeInput(
            "number of decimal places cannot be negative",
        ));
    }
    let decimals = require_integer(decimals, "number of decimal places must be an integer")?;
    let scaled = num * 10f64.powf(decimals);
    if !scaled.is_finite() {
        // Already exact at this precision.
        return Ok(num);
    }
    Ok(scaled.round_ties_even() / 10f64.powf(decimals))
}

pub fn factorial(n: f64) -> FormulaResult<f64> {
    let n = require_integer(n, "factorial is only defined for integers")?;
    if n < 0.0 {
        return Err(FormulaError::NegativeInput(
            "factorial of negative number is undefined",
        ));
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(result)
}

fn combinatoric_inputs(n: f64, r: f64, reason: &'static str) -> FormulaResult<(f64, f64)> {
    let n = require_integer(n, reason)?;
    let r = require_integer(r, reason)?;
    if n < 0.0 || r < 0.0 {
        return Err(FormulaError::NegativeInput("n and r must be non-negative"));
    }
    if r > n {
        return Err(FormulaError::OutOfDomain("r cannot be greater than n"));
    }
    Ok((n, r))
}

/// `C(n, r)` via the symmetric incremental product, never forming full
/// factorials.
pub fn combination(n: f64, r: f64) -> FormulaResult<f64> {
    let (n, r) = combinatoric_inputs(n, r, "combination is only defined for integers")?;
    let r = r.min(n - r);
    let mut result = 1.0;
    let mut i = 0.0;
    while i < r {
        result = result * (n - i) / (i + 1.0);
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(result.round())
}

/// `P(n, r) = n! / (n - r)!`.
pub fn permutation(n: f64, r: f64) -> FormulaResult<f64> {
    let (n, r) = combinatoric_inputs(n, r, "permutation is only defined for integers")?;
    let mut result = 1.0;
    let mut i = n;
    while i > n - r {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i -= 1.0;
    }
    Ok(result)
}

fn truncated_magnitudes(a: f64, b: f64) -> FormulaResult<(f64, f64)> {
    if !a.is_finite() || !b.is_finite() {
        return Err(FormulaError::OutOfDomain(
            "gcd and lcm are only defined for finite numbers",
        ));
    }
    Ok((a.trunc().abs(), b.trunc().abs()))
}

fn euclid(mut a: f64, mut b: f64) -> f64 {
    while b != 0.0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Euclid over the absolute values of the truncated inputs.
pub fn greatest_common_divisor(a: f64, b: f64) -> FormulaResult<f64> {
    let (a, b) = truncated_magnitudes(a, b)?;
    Ok(euclid(a, b))
}

pub fn least_common_multiple(a: f64, b: f64) -> FormulaResult<f64> {
    let (a, b) = truncated_magnitudes(a, b)?;
    if a == 0.0 || b == 0.0 {
        return Ok(0.0);
    }
    Ok((a * b / euclid(a, b)).floor())
}

/// Trial division by odd candidates up to `sqrt(n)`.
pub fn is_prime(n: f64) -> FormulaResult<bool> {
    let n = require_integer(n, "prime check is only defined for integers")?;
    if n < 2.0 {
        return Ok(false);
    }
    if n == 2.0 {
        return Ok(true);
    }
    if n % 2.0 == 0.0 {
        return Ok(false);
    }
    let limit = n.sqrt().floor();
    let mut candidate = 3.0;
    while candidate <= limit {
        if n % candidate == 0.0 {
            return Ok(false);
        }
        candidate += 2.0;
    }
    Ok(true)
}

/// The `n`th Fibonacci number with `F(0) = 0`, `F(1) = 1`.
pub fn fibonacci(n: f64) -> FormulaResult<f64> {
    let n = require_integer(n, "fibonacci is only defined for integers")?;
    if n < 0.0 {
        return Err(FormulaError::NegativeInput(
            "fibonacci index must be non-negative",
        ));
    }
    if n <= 1.0 {
        return Ok(n);
    }
    let (mut previous, mut current) = (0.0_f64, 1.0_f64);
    let mut i = 2.0;
    while i <= n {
        (previous, current) = (current, previous + current);
        if current.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(current)
}

pub fn arithmetic_mean(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

pub fn geometric_mean(a: f64, b: f64) -> FormulaResult<f64> {
    if a < 0.0 || b < 0.0 {
        return Err(FormulaError::NegativeInput(
            "geometric mean requires non-negative numbers",
        ));
    }
    Ok((a * b).sqrt())
}

pub fn harmonic_mean(a: f64, b: f64) -> FormulaResult<f64> {
    if a == 0.0 || b == 0.0 {
        return Err(FormulaError::DivisionByZero(
            "harmonic mean undefined when either number is zero",
        ));
    }
    Ok(2.0 / (1.0 / a + 1.0 / b))
}

/// What percentage `part` is of `whole`.
pub fn percentage(part: f64, whole: f64) -> FormulaResult<f64> {
    if whole == 0.0 {
        return Err(FormulaError::DivisionByZero(
            "cannot calculate percentage of zero",
        ));
    }
    Ok(part / whole * 100.0)
}

pub fn percentage_change(old_value: f64, new_value: f64) -> FormulaResult<f64> {
    if old_value == 0.0 {
        return Err(FormulaError::DivisionByZero(
            "cannot calculate percentage change from zero",
        ));
    }
    Ok((new_value - old_value) / old_value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_rejects_zero_divisor() {
        assert_eq!(divide(10.0, 4.0), Ok(2.5));
        assert!(matches!(
            divide(10.0, 0.0),
            Err(FormulaError::DivisionByZero(_))
        ));
    }

    #[test]
    fn modulo_and_floor_divide_follow_the_divisor_sign() {
        assert_eq!(modulo(17.0, 5.0), Ok(2.0));
        assert_eq!(modulo(-7.0, 3.0), Ok(2.0));
        assert_eq!(modulo(7.0, -3.0), Ok(-2.0));
        assert_eq!(floor_divide(-7.0, 2.0), Ok(-4.0));
        assert!(modulo(1.0, 0.0).is_err());
        assert!(floor_divide(1.0, 0.0).is_err());
    }

    #[test]
    fn roots_handle_negative_inputs() {
        assert_eq!(square_root(81.0), Ok(9.0));
        assert!(square_root(-1.0).is_err());
        assert_eq!(cube_root(-27.0), -3.0);
        assert!((nth_root(-32.0, 5.0).expect("odd root") + 2.0).abs() < 1e-12);
        assert!(nth_root(-16.0, 4.0).is_err());
        assert!(nth_root(16.0, 0.0).is_err());
    }

    #[test]
    fn factorial_requires_non_negative_integers() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(6.0), Ok(720.0));
        assert!(matches!(factorial(2.5), Err(FormulaError::NotInteger(_))));
        assert!(matches!(factorial(-3.0), Err(FormulaError::NegativeInput(_))));
    }

    #[test]
    fn combinatorics_match_known_values() {
        assert_eq!(combination(10.0, 3.0), Ok(120.0));
        assert_eq!(combination(8.0, 3.0), Ok(56.0));
        assert_eq!(combination(5.0, 0.0), Ok(1.0));
        assert_eq!(combination(5.0, 5.0), Ok(1.0));
        assert_eq!(combination(52.0, 5.0), Ok(2_598_960.0));
        assert_eq!(permutation(5.0, 2.0), Ok(20.0));
        assert_eq!(permutation(5.0, 0.0), Ok(1.0));
        assert!(combination(3.0, 4.0).is_err());
        assert!(combination(-1.0, 0.0).is_err());
        assert!(permutation(4.5, 1.0).is_err());
    }

    #[test]
    fn combination_stops_once_the_product_overflows() {
        assert!(combination(2e16, 1e16).is_ok_and(f64::is_infinite));
        assert!(combination(1000.0, 500.0).is_ok_and(f64::is_finite));
    }

    #[test]
    fn gcd_lcm_truncate_and_take_absolute_values() {
        assert_eq!(greatest_common_divisor(48.0, 18.0), Ok(6.0));
        assert_eq!(greatest_common_divisor(-48.9, 18.2), Ok(6.0));
        assert_eq!(least_common_multiple(4.0, 6.0), Ok(12.0));
        assert_eq!(least_common_multiple(0.0, 6.0), Ok(0.0));
    }

    #[test]
    fn gcd_lcm_reject_non_finite_inputs() {
        assert!(matches!(
            greatest_common_divisor(f64::INFINITY, 5.0),
            Err(FormulaError::OutOfDomain(_))
        ));
        assert!(greatest_common_divisor(5.0, f64::NEG_INFINITY).is_err());
        assert!(matches!(
            least_common_multiple(f64::NAN, 5.0),
            Err(FormulaError::OutOfDomain(_))
        ));
    }

    #[test]
    fn primality_and_fibonacci() {
        assert_eq!(is_prime(2.0), Ok(true));
        assert_eq!(is_prime(97.0), Ok(true));
        assert_eq!(is_prime(91.0), Ok(false));
        assert_eq!(is_prime(1.0), Ok(false));
        assert!(is_prime(7.5).is_err());
        assert_eq!(fibonacci(0.0), Ok(0.0));
        assert_eq!(fibonacci(10.0), Ok(55.0));
        assert!(fibonacci(-1.0).is_err());
    }

    #[test]
    fn rounding_uses_ties_to_even() {
        assert_eq!(round_to_decimals(2.5, 0.0), Ok(2.0));
        assert_eq!(round_to_decimals(3.14159, 2.0), Ok(3.14));
        assert!(round_to_decimals(1.0, -1.0).is_err());
        assert!(round_to_decimals(1.0, 1.5).is_err());
    }

    #[test]
    fn rounding_past_representable_precision_keeps_the_value() {
        assert_eq!(round_to_decimals(1e10, 300.0), Ok(1e10));
        assert_eq!(round_to_decimals(0.5, 400.0), Ok(0.5));
    }

    #[test]
    fn means_and_percentages() {
        assert_eq!(arithmetic_mean(3.0, 5.0), 4.0);
        assert_eq!(geometric_mean(4.0, 9.0), Ok(6.0));
        assert!(geometric_mean(-4.0, 9.0).is_err());
        assert_eq!(harmonic_mean(2.0, 2.0), Ok(2.0));
        assert!(harmonic_mean(0.0, 2.0).is_err());
        assert_eq!(percentage(25.0, 200.0), Ok(12.5));
        assert_eq!(percentage_change(50.0, 75.0), Ok(50.0));
        assert!(percentage_change(0.0, 1.0).is_err());
    }
}
