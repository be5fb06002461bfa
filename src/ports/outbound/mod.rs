/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod class_model_reader;
pub mod descriptor_formatter;
pub mod descriptor_reader;
pub mod descriptor_store;
pub mod progress_reporter;

pub use class_model_reader::ClassModelReader;
pub use descriptor_formatter::DescriptorFormatter;
pub use descriptor_reader::DescriptorReader;
pub use descriptor_store::DescriptorStore;
pub use progress_reporter::ProgressReporter;
