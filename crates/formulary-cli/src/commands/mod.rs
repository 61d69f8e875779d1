pub mod describe;
pub mod exec;
pub mod list;
pub mod registry;
pub mod registry_check;

use formulary_kernel::OperationId;

/// Resolve an operation token or exit as a failed lookup.
pub(crate) fn resolve_operation(token: &str) -> OperationId {
    token.parse().unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    })
}
