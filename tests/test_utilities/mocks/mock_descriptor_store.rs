use scr_descriptor::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DescriptorStore keeping documents in memory
///
/// Clones share the same storage, so a test can keep one handle while the
/// use case owns another.
#[derive(Default, Clone)]
pub struct MockDescriptorStore {
    pub files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MockDescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl DescriptorStore for MockDescriptorStore {
    fn store(&self, relative_path: &Path, content: &str) -> Result<PathBuf> {
        self.files
            .lock()
            .unwrap()
            .insert(relative_path.to_path_buf(), content.to_string());
        Ok(relative_path.to_path_buf())
    }

    fn remove(&self, relative_path: &Path) -> Result<bool> {
        Ok(self.files.lock().unwrap().remove(relative_path).is_some())
    }
}
