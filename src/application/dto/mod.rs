/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod depth_request;
mod depth_response;
mod output_format;

pub use depth_request::DepthRequest;
pub use depth_response::DepthResponse;
pub use output_format::OutputFormat;
