mod accessor_generator;
mod ancestry_orderer;
mod class_filter;
mod component_assembler;
mod component_validator;
mod descriptor_compiler;
mod output_collector;
mod property_merger;
mod reference_merger;
mod service_resolver;

pub use accessor_generator::{AccessorGenerator, AccessorKind, AccessorStub};
pub use ancestry_orderer::AncestryOrderer;
pub use class_filter::ClassFilter;
pub use component_assembler::{AssembledComponent, AssemblyOptions, ComponentAssembler};
pub use component_validator::ComponentValidator;
pub use descriptor_compiler::{
    ClassDiagnostics, CompilationOutcome, CompilationResult, DescriptorCompiler,
};
pub use output_collector::{CollectedOutput, Disposition, OutputCollector};
pub use property_merger::PropertyMerger;
pub use reference_merger::{MergedReference, ReferenceMerger};
pub use service_resolver::{ServiceResolver, MAX_DISCOVERY_DEPTH};
