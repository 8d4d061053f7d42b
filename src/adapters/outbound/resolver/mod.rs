/// Resolver adapters implementing the DependencyResolver port
mod index_resolver;

pub use index_resolver::IndexResolver;
