use crate::ports::outbound::DescriptorStore;
use crate::shared::error::DescriptorError;
use crate::shared::security::{validate_not_symlink, validate_relative_name};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing generated documents below an output directory
///
/// This adapter implements the DescriptorStore port. Every document path is
/// relative to the root directory and may not leave it.
pub struct FileSystemWriter {
    root: PathBuf,
}

impl FileSystemWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative_path: &Path) -> Result<PathBuf> {
        let name = relative_path.to_string_lossy();
        validate_relative_name(&name).map_err(|e| DescriptorError::InvalidOutputPath {
            path: relative_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(self.root.join(relative_path))
    }

    /// Security validation before writing:
    /// - Reject if output path exists and is a symlink
    /// - Reject symlinked directories between the root and the file
    fn validate_output_security(&self, target: &Path) -> Result<()> {
        let mut current = target;
        while current != self.root {
            if fs::symlink_metadata(current).is_ok() {
                validate_not_symlink(current, "write").map_err(|e| {
                    DescriptorError::SecurityError {
                        path: current.to_path_buf(),
                        reason: e.to_string(),
                        hint: "Remove the symbolic link from the output directory".to_string(),
                    }
                })?;
            }
            match current.parent() {
                Some(parent) if parent.starts_with(&self.root) => current = parent,
                _ => break,
            }
        }
        Ok(())
    }
}

impl DescriptorStore for FileSystemWriter {
    fn store(&self, relative_path: &Path, content: &str) -> Result<PathBuf> {
        let target = self.resolve(relative_path)?;
        self.validate_output_security(&target)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| DescriptorError::FileWriteError {
                path: target.clone(),
                details: format!("Failed to create directory {}: {}", parent.display(), e),
            })?;
        }

        fs::write(&target, content).map_err(|e| DescriptorError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;

        Ok(target)
    }

    fn remove(&self, relative_path: &Path) -> Result<bool> {
        let target = self.resolve(relative_path)?;
        if fs::symlink_metadata(&target).is_err() {
            return Ok(false);
        }
        self.validate_output_security(&target)?;

        fs::remove_file(&target).map_err(|e| DescriptorError::FileWriteError {
            path: target.clone(),
            details: format!("Failed to remove stale output: {}", e),
        })?;
        Ok(true)
    }
}
