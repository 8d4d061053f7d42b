/// Filesystem adapters for reading the package index and writing output
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::StdoutPresenter;
