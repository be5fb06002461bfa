use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DescriptorStore port for the output directory of generated documents
///
/// Paths are relative to the store's root.
pub trait DescriptorStore {
    /// Writes a document, creating parent directories as needed
    ///
    /// # Returns
    /// The full path of the written file
    ///
    /// # Errors
    /// Returns an error if the path escapes the root or the write fails
    fn store(&self, relative_path: &Path, content: &str) -> Result<PathBuf>;

    /// Removes a previously generated document
    ///
    /// # Returns
    /// `true` if a file was removed, `false` if none existed
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be removed
    fn remove(&self, relative_path: &Path) -> Result<bool>;
}
