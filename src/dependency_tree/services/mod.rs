/// Domain services - Stateless operations over dependency trees
mod summary_aggregator;
mod tree_renderer;

pub use summary_aggregator::SummaryAggregator;
pub use tree_renderer::TreeRenderer;
