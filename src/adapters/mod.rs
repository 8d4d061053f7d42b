/// Adapters layer
///
/// Concrete implementations of the outbound ports: the package index on
/// disk, stdout/stderr, and the output formatters.
pub mod outbound;
