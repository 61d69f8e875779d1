//! Strict-contract dispatch.
//!
//! Validation order is fixed: missing names, then unexpected names, then
//! the handler. A handler never observes an incomplete or over-complete
//! bundle.

use crate::arguments::Arguments;
use crate::binding::BoundArguments;
use crate::error::{DispatchError, HandlerFailure};
use crate::operation::OperationId;
use crate::outcome::Outcome;
use crate::registry::spec_for;

/// Check `arguments` against the exact parameter set of `id`.
///
/// Missing names are reported in declaration order; unexpected names in
/// sorted order. Missing takes precedence when both apply.
pub fn validate_contract(id: OperationId, arguments: &Arguments) -> Result<(), DispatchError> {
    let spec = spec_for(id);

    let missing: Vec<String> = spec
        .required_params()
        .iter()
        .filter(|name| !arguments.contains(name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DispatchError::MissingArguments { names: missing });
    }

    let unexpected: Vec<String> = arguments
        .names()
        .filter(|name| !spec.requires(name))
        .map(str::to_string)
        .collect();
    if !unexpected.is_empty() {
        return Err(DispatchError::UnexpectedArguments { names: unexpected });
    }

    Ok(())
}

/// Run one operation against a caller-owned argument bundle.
///
/// Pure over its inputs: the bundle is never modified and no state is
/// retained between calls.
pub fn execute(id: OperationId, arguments: &Arguments) -> Result<Outcome, DispatchError> {
    validate_contract(id, arguments)?;

    let handler = spec_for(id).handler();
    let outcome = handler(&BoundArguments::new(arguments))?;
    if !outcome.is_finite() {
        return Err(HandlerFailure::NonFinite.into());
    }
    Ok(outcome)
}

/// Like [`execute`], resolving the operation from its token first.
pub fn execute_named(operation: &str, arguments: &Arguments) -> Result<Outcome, DispatchError> {
    let id: OperationId = operation
        .parse()
        .map_err(|_| DispatchError::UnsupportedOperation {
            operation: operation.trim().to_string(),
        })?;
    execute(id, arguments)
}
