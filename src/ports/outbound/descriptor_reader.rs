use crate::descriptor_generation::domain::Components;
use crate::shared::Result;
use std::path::Path;

/// DescriptorReader port for loading abstract descriptors of earlier builds
pub trait DescriptorReader {
    /// Reads the components stored in a previously written abstract descriptor
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a descriptor document
    fn read_components(&self, path: &Path) -> Result<Components>;
}
