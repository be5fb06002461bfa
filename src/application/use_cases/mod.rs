/// Use cases module containing application business logic orchestration
mod generate_descriptors;
mod publish_descriptors;

pub use generate_descriptors::GenerateDescriptorsUseCase;
pub use publish_descriptors::PublishDescriptorsUseCase;
