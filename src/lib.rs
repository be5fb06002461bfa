//! scr-descriptor - Build-time compiler for declarative service component descriptors
//!
//! This library merges component tags declared on classes and their ancestors
//! into component descriptors, metatype documents and abstract descriptors for
//! later builds, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`descriptor_generation`): Pure merge and validation logic
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scr_descriptor::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateDescriptorsUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(false),
//! );
//!
//! // Execute
//! let request = DescriptorRequest::new(PathBuf::from("target/classes.json"));
//! let response = use_case.execute(request)?;
//!
//! // Publish into target/generated/OSGI-INF
//! let publisher = PublishDescriptorsUseCase::new(
//!     JsonFormatter::new(),
//!     FileSystemWriter::new(PathBuf::from("target/generated")),
//!     StderrProgressReporter::new(false),
//! );
//! let report = publisher.execute(
//!     &PublishRequest::new("serviceComponents.json", "metatype.json"),
//!     &response,
//! )?;
//! println!("{:?}", report.service_component_header);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod descriptor_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
    pub use crate::application::dto::{
        DescriptorRequest, DescriptorResponse, OutputFormat, PublishReport, PublishRequest,
    };
    pub use crate::application::use_cases::{
        GenerateDescriptorsUseCase, PublishDescriptorsUseCase,
    };
    pub use crate::descriptor_generation::domain::{
        ClassCatalog, ClassDescription, Component, Components, FieldDescription, MetaData,
        MethodDescription, Tag,
    };
    pub use crate::descriptor_generation::services::{
        AssemblyOptions, CompilationOutcome, ComponentValidator, DescriptorCompiler,
    };
    pub use crate::ports::outbound::{
        ClassModelReader, DescriptorFormatter, DescriptorReader, DescriptorStore,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
