/// Mock implementations for testing
mod mock_class_model_reader;
mod mock_descriptor_reader;
mod mock_descriptor_store;
mod mock_progress_reporter;

pub use mock_class_model_reader::MockClassModelReader;
pub use mock_descriptor_reader::MockDescriptorReader;
pub use mock_descriptor_store::MockDescriptorStore;
pub use mock_progress_reporter::MockProgressReporter;
