use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Upper bound for a class model or inherited descriptor read into memory (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Metadata of the entry itself, never of a link target
fn entry_metadata(path: &Path, what: &str) -> Result<fs::Metadata> {
    fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to inspect {} {}: {}", what, path.display(), e))
}

/// Rejects a symbolic link at a path the tool is about to touch
///
/// Used for every existing entry between the output root and a generated
/// document such as `OSGI-INF/serviceComponents.json`. `operation` names the
/// access ("write", "remove") in the error message.
///
/// # Errors
/// Returns an error if the entry is a symbolic link or cannot be inspected
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = entry_metadata(path, &format!("{} target", operation))?;
    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: refusing to {} through symbolic link {}",
            operation,
            path.display()
        );
    }
    Ok(())
}

/// Checks that an input document is a plain file
///
/// `file_description` is the document kind shown to the user, e.g.
/// "class model" or "inherited descriptor".
///
/// # Errors
/// Returns an error if the path is missing, a symbolic link, or not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = entry_metadata(path, file_description)?;
    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} {} is a symbolic link; pass the real file instead",
            file_description,
            path.display()
        );
    }
    if !metadata.is_file() {
        anyhow::bail!(
            "{} {} is not a regular file",
            file_description,
            path.display()
        );
    }
    Ok(())
}

/// Validates that a configured output name stays inside the output directory
///
/// Descriptor, metatype and `scrinfo` names are joined onto the output
/// directory, so they must be relative and free of `..` segments.
///
/// # Errors
/// Returns an error if the name is absolute or contains a parent-directory segment
pub fn validate_relative_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    if path.is_absolute() || name.starts_with('/') || name.starts_with('\\') {
        anyhow::bail!("Security: output name '{}' must be a relative path", name);
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        anyhow::bail!(
            "Security: output name '{}' must not leave the output directory",
            name
        );
    }
    Ok(())
}

/// Rejects input documents above `max_size` bytes
///
/// # Errors
/// Returns an error if `file_size` exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large to load ({} bytes, limit {} bytes)",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
