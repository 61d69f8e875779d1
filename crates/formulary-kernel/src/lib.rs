//! # formulary-kernel
//!
//! A closed catalog of numeric operations behind one dispatch entry point.
//!
//! Callers name an operation and hand over a bundle of named arguments.
//! The bundle must match the operation's registered parameter set
//! exactly: nothing missing, nothing extra. Only then does the formula run.
//!
//! ## Architecture
//!
//! ```text
//! OperationId          ← Closed catalog token (add, area_circle, median, …)
//!     │
//! OperationSpec        ← Registry row: exact parameter names + handler
//!     │
//! validate_contract    ← Missing names first, then unexpected names
//!     │
//! BoundArguments       ← Validated view handed to the handler
//!     │
//! formulary_formulas   ← Pure formula; domain errors become CalculationFailed
//!     │
//! Outcome              ← Scalar | Pair | Values | Flag, always finite
//! ```
//!
//! The registry is built at compile time and never mutated; dispatch is
//! safe to call from any number of threads at once.

pub mod arguments;
mod binding;
pub mod dispatch;
pub mod error;
pub mod operation;
pub mod outcome;
pub mod registry;
pub mod registry_check;

pub use arguments::{Argument, Arguments};
pub use dispatch::{execute, execute_named, validate_contract};
pub use error::{DispatchError, DispatchErrorKind};
pub use operation::{Category, OperationId, UnknownOperation};
pub use outcome::Outcome;
pub use registry::{
    OPERATION_REGISTRY_KIND, OperationInfo, OperationSpec, list_operations, operation_info,
    operation_registry_json, operation_specs, operations_in, parameter_requirements,
    required_params, spec_for,
};
pub use registry_check::{
    REGISTRY_CHECK_KIND, RegistryCheckIssue, RegistryCheckReport, check_registry_rows,
    registry_check,
};
