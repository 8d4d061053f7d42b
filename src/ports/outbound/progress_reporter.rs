/// ProgressReporter port for diagnostics that must stay off the main output
///
/// Implementations write somewhere other than the output presenter
/// (typically stderr) so tree and JSON output stay machine-readable.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a list of items
    ///
    /// # Arguments
    /// * `current` - 1-based position of the item being processed
    /// * `total` - Total number of items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
