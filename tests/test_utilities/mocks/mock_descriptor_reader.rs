use scr_descriptor::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock DescriptorReader serving abstract descriptors by path
#[derive(Default)]
pub struct MockDescriptorReader {
    documents: HashMap<PathBuf, Components>,
}

impl MockDescriptorReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, components: Vec<Component>) -> Self {
        self.documents
            .insert(path.into(), components.into_iter().collect());
        self
    }
}

impl DescriptorReader for MockDescriptorReader {
    fn read_components(&self, path: &Path) -> Result<Components> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No mock descriptor at {}", path.display()))
    }
}
