/// Formatter adapters for the supported descriptor document formats
mod descriptor_document;
mod json_formatter;
mod yaml_formatter;

pub(crate) use descriptor_document::ComponentsDocument;
pub use json_formatter::JsonFormatter;
pub use yaml_formatter::YamlFormatter;
