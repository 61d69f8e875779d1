//! Descriptive statistics over samples.
//!
//! Order statistics (median, quartiles, percentiles) sort a copy of the
//! sample in ascending order and interpolate linearly between ranks.

use crate::{FormulaError, FormulaResult};
use std::collections::HashMap;

/// The most frequent value(s) of a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Single(f64),
    /// Several values share the highest frequency, in order of first
    /// appearance.
    Tied(Vec<f64>),
}

fn non_empty<'a>(values: &'a [f64], reason: &'static str) -> FormulaResult<&'a [f64]> {
    if values.is_empty() {
        return Err(FormulaError::EmptySample(reason));
    }
    Ok(values)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Resolves a possibly negative rank; negative ranks count back from the
/// end of the sample.
fn at_rank(sorted: &[f64], rank: isize) -> f64 {
    let index = if rank < 0 {
        sorted.len() as isize + rank
    } else {
        rank
    };
    sorted[index as usize]
}

fn sum_of_squares(values: &[f64], center: f64) -> f64 {
    values.iter().map(|value| (value - center).powi(2)).sum()
}

pub fn mean(values: &[f64]) -> FormulaResult<f64> {
    let values = non_empty(values, "cannot calculate mean of empty list")?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> FormulaResult<f64> {
    let sorted = sorted(non_empty(values, "cannot calculate median of empty list")?);
    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Most frequent value, or every tied value when more than one (but not
/// every distinct value) shares the top frequency.
///
/// Fails when all distinct values occur equally often, which includes a
/// sample of all-unique values.
pub fn mode(values: &[f64]) -> FormulaResult<Mode> {
    let values = non_empty(values, "cannot calculate mode of empty list")?;

    let mut order: Vec<f64> = Vec::new();
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    for value in values {
        // +0.0 and -0.0 compare equal and share a bucket.
        let value = if *value == 0.0 { 0.0 } else { *value };
        let count = frequency.entry(value.to_bits()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let max_frequency = frequency.values().copied().max().unwrap_or(0);
    let modes: Vec<f64> = order
        .iter()
        .copied()
        .filter(|value| frequency.get(&value.to_bits()) == Some(&max_frequency))
        .collect();

    if modes.len() == order.len() {
        return Err(FormulaError::NoMode(
            "no mode found - all values appear equally",
        ));
    }
    match modes.as_slice() {
        [single] => Ok(Mode::Single(*single)),
        _ => Ok(Mode::Tied(modes)),
    }
}

pub fn variance_population(values: &[f64]) -> FormulaResult<f64> {
    let values = non_empty(values, "cannot calculate variance of empty list")?;
    let center = mean(values)?;
    Ok(sum_of_squares(values, center) / values.len() as f64)
}

pub fn variance_sample(values: &[f64]) -> FormulaResult<f64> {
    if values.len() < 2 {
        return Err(FormulaError::SampleTooSmall(
            "sample variance requires at least 2 values",
        ));
    }
    let center = mean(values)?;
    Ok(sum_of_squares(values, center) / (values.len() - 1) as f64)
}

pub fn standard_deviation_population(values: &[f64]) -> FormulaResult<f64> {
    Ok(variance_population(values)?.sqrt())
}

pub fn standard_deviation_sample(values: &[f64]) -> FormulaResult<f64> {
    Ok(variance_sample(values)?.sqrt())
}

pub fn range_values(values: &[f64]) -> FormulaResult<f64> {
    let values = non_empty(values, "cannot calculate range of empty list")?;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    Ok(max - min)
}

/// First quartile at rank `(n + 1) / 4`.
pub fn quartile_1(values: &[f64]) -> FormulaResult<f64> {
    let sorted = sorted(non_empty(values, "cannot calculate quartile of empty list")?);
    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let position = (n + 1) as f64 / 4.0;
    let whole = position.trunc();
    if position == whole {
        return Ok(sorted[whole as usize - 1]);
    }
    let lower = at_rank(&sorted, whole as isize - 1);
    let upper = sorted[whole as usize];
    Ok(lower + (position - whole) * (upper - lower))
}

/// Third quartile at rank `3 (n + 1) / 4`.
pub fn quartile_3(values: &[f64]) -> FormulaResult<f64> {
    let sorted = sorted(non_empty(values, "cannot calculate quartile of empty list")?);
    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let position = 3.0 * (n + 1) as f64 / 4.0;
    let whole = position.trunc();
    if position == whole {
        return Ok(sorted[whole as usize - 1]);
    }
    let lower = sorted[whole as usize - 1];
    let upper = sorted[(whole as usize).min(n - 1)];
    Ok(lower + (position - whole) * (upper - lower))
}

pub fn interquartile_range(values: &[f64]) -> FormulaResult<f64> {
    Ok(quartile_3(values)? - quartile_1(values)?)
}

/// Pearson correlation of two equally long samples.
pub fn correlation_coefficient(x_values: &[f64], y_values: &[f64]) -> FormulaResult<f64> {
    if x_values.len() != y_values.len() {
        return Err(FormulaError::LengthMismatch(
            "x and y lists must have the same length",
        ));
    }
    if x_values.len() < 2 {
        return Err(FormulaError::SampleTooSmall(
            "need at least 2 data points for correlation",
        ));
    }

    let mean_x = mean(x_values)?;
    let mean_y = mean(y_values)?;
    let numerator: f64 = x_values
        .iter()
        .zip(y_values)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let denominator = (sum_of_squares(x_values, mean_x) * sum_of_squares(y_values, mean_y)).sqrt();
    if denominator == 0.0 {
        return Err(FormulaError::Degenerate(
            "correlation undefined - one variable has no variation",
        ));
    }
    Ok(numerator / denominator)
}

pub fn z_score(value: f64, population_mean: f64, population_std: f64) -> FormulaResult<f64> {
    if population_std <= 0.0 {
        return Err(FormulaError::OutOfDomain(
            "standard deviation must be positive",
        ));
    }
    Ok((value - population_mean) / population_std)
}

/// Value at `percentile_rank` (0..=100), interpolating at rank
/// `p / 100 * (n - 1)`.
pub fn percentile(values: &[f64], percentile_rank: f64) -> FormulaResult<f64> {
    let values = non_empty(values, "cannot calculate percentile of empty list")?;
    if !(0.0..=100.0).contains(&percentile_rank) {
        return Err(FormulaError::OutOfDomain(
            "percentile rank must be between 0 and 100",
        ));
    }

    let sorted = sorted(values);
    let n = sorted.len();
    if percentile_rank == 0.0 {
        return Ok(sorted[0]);
    }
    if percentile_rank == 100.0 {
        return Ok(sorted[n - 1]);
    }

    let position = percentile_rank / 100.0 * (n - 1) as f64;
    let lower = position.trunc() as usize;
    if position == position.trunc() {
        return Ok(sorted[lower]);
    }
    let fraction = position - position.trunc();
    Ok(sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower]))
}
