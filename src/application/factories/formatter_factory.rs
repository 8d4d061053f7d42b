use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DependencyFormatter;

/// Factory for creating dependency formatters
///
/// Selects the outbound formatter adapter matching an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depth::application::dto::OutputFormat;
    /// use depth::application::factories::FormatterFactory;
    /// use depth::dependency_tree::domain::DependencyNode;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree);
    /// let output = formatter.format(&DependencyNode::new("app")).unwrap();
    /// assert!(output.starts_with("app\n"));
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DependencyFormatter> {
        match format {
            OutputFormat::Tree => Box::new(TreeFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
