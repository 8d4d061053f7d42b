use super::OutputFormat;
use crate::dependency_tree::domain::ResolveOptions;

/// DepthRequest - Request DTO for the dependency analysis use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthRequest {
    /// Root packages to analyze, in the order they must be reported
    pub packages: Vec<String>,
    /// Options handed to the resolver for every root
    pub options: ResolveOptions,
    /// How each resolved tree is printed
    pub format: OutputFormat,
}

impl DepthRequest {
    pub fn new(packages: Vec<String>, options: ResolveOptions, format: OutputFormat) -> Self {
        Self {
            packages,
            options,
            format,
        }
    }
}
