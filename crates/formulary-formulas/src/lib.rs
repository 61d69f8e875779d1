//! # formulary-formulas
//!
//! The formula library: independent pure functions grouped by category.
//!
//! Every function is deterministic, allocation-light, and free of shared
//! state. Domain preconditions (negative radius, zero divisor, empty
//! sample, ...) are checked locally and reported as [`FormulaError`].
//!
//! This crate knows nothing about operation identifiers or argument names.
//! Binding named arguments to these functions is the kernel's job.
//!
//! ```text
//! arithmetic     a + b, roots, factorial, combinatorics, means
//! geometry       areas, perimeters, distances, slopes
//! volumes        solid volumes and surface areas
//! trigonometry   degree/radian trig, inverses, reciprocals
//! logarithms     logs, exponentials, hyperbolics
//! statistics     central tendency, dispersion, order statistics
//! ```

pub mod arithmetic;
pub mod error;
pub mod geometry;
mod guard;
pub mod logarithms;
pub mod statistics;
pub mod trigonometry;
pub mod volumes;

pub use error::FormulaError;
pub use statistics::Mode;

/// Result alias used by every formula.
pub type FormulaResult<T> = Result<T, FormulaError>;
