/// Dependency tree bounded context
///
/// Holds the resolved tree model and the pure services that render and
/// summarize it.
pub mod domain;
pub mod services;
