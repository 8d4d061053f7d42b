/// DepthResponse - Result of a fully successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthResponse {
    /// Root packages that were resolved and printed, in order
    pub analyzed_packages: Vec<String>,
}

impl DepthResponse {
    pub fn new(analyzed_packages: Vec<String>) -> Self {
        Self { analyzed_packages }
    }
}
