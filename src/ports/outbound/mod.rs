/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (resolver, file system, console, etc.).
pub mod dependency_resolver;
pub mod formatter;
pub mod output_presenter;
pub mod package_index_reader;
pub mod progress_reporter;

pub use dependency_resolver::DependencyResolver;
pub use formatter::DependencyFormatter;
pub use output_presenter::OutputPresenter;
pub use package_index_reader::PackageIndexReader;
pub use progress_reporter::ProgressReporter;
