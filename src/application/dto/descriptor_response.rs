use crate::descriptor_generation::domain::{Components, MetaData};
use crate::descriptor_generation::services::{
    AccessorStub, ClassDiagnostics, CompilationOutcome, CompilationResult,
};

/// DescriptorResponse - Internal response DTO from the descriptor generation use case
///
/// Carries the three output collections together with what went wrong, so
/// the caller decides whether failures abort publishing.
#[derive(Debug, Clone)]
pub struct DescriptorResponse {
    pub components: Components,
    pub abstract_components: Components,
    pub metadata: MetaData,
    /// Diagnostics of the classes that failed assembly or validation
    pub failures: Vec<ClassDiagnostics>,
    /// Accessor methods synthesized during the run
    pub generated_accessors: Vec<AccessorStub>,
    pub outcome: CompilationOutcome,
}

impl DescriptorResponse {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Every error message of every failing class
    pub fn error_messages(&self) -> Vec<String> {
        self.failures.iter().flat_map(ClassDiagnostics::errors).collect()
    }
}

impl From<CompilationResult> for DescriptorResponse {
    fn from(result: CompilationResult) -> Self {
        let outcome = result.outcome();
        Self {
            components: result.components,
            abstract_components: result.abstract_components,
            metadata: result.metadata,
            failures: result
                .diagnostics
                .into_iter()
                .filter(ClassDiagnostics::is_failure)
                .collect(),
            generated_accessors: result.generated_accessors,
            outcome,
        }
    }
}
