use crate::descriptor_generation::services::AssemblyOptions;
use std::path::PathBuf;

/// DescriptorRequest - Internal request DTO for the descriptor generation use case
#[derive(Debug, Clone)]
pub struct DescriptorRequest {
    /// Class model document written by the source scanner
    pub class_model_path: PathBuf,
    /// Abstract descriptors of earlier builds to inherit from
    pub inherited_descriptors: Vec<PathBuf>,
    /// Patterns for excluding source classes from processing
    pub exclude_patterns: Vec<String>,
    pub options: AssemblyOptions,
}

impl DescriptorRequest {
    pub fn new(class_model_path: PathBuf) -> Self {
        Self {
            class_model_path,
            inherited_descriptors: Vec::new(),
            exclude_patterns: Vec::new(),
            options: AssemblyOptions::default(),
        }
    }

    pub fn with_inherited_descriptors(mut self, paths: Vec<PathBuf>) -> Self {
        self.inherited_descriptors = paths;
        self
    }

    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_options(mut self, options: AssemblyOptions) -> Self {
        self.options = options;
        self
    }
}
