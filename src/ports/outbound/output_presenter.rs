use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where formatted trees,
/// summaries and failure notices are written, in order.
pub trait OutputPresenter {
    /// Presents a chunk of output
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
