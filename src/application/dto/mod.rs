/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod descriptor_request;
mod descriptor_response;
mod output_format;
mod publish_request;

pub use descriptor_request::DescriptorRequest;
pub use descriptor_response::DescriptorResponse;
pub use output_format::OutputFormat;
pub use publish_request::{PublishReport, PublishRequest};
