use crate::descriptor_generation::domain::ClassCatalog;
use crate::shared::Result;
use std::path::Path;

/// ClassModelReader port for loading the class descriptions of a build
///
/// This port abstracts where the upstream source scanner left its output
/// and in which document format.
pub trait ClassModelReader {
    /// Reads a class model document into a catalog
    ///
    /// # Arguments
    /// * `path` - Path to the class model document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document does not exist or cannot be read
    /// - The document is not a valid class model
    fn read_class_model(&self, path: &Path) -> Result<ClassCatalog>;
}
