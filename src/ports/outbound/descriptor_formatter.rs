use crate::descriptor_generation::domain::{Components, MetaData};
use crate::shared::Result;

/// DescriptorFormatter port for serializing the compiler's output collections
///
/// Implementations must be deterministic: equal input yields byte-identical output.
pub trait DescriptorFormatter {
    /// Formats a component collection
    ///
    /// # Arguments
    /// * `components` - Components to serialize
    /// * `abstract_descriptor` - Whether the document is the abstract (inheritance)
    ///   descriptor, which also records the abstract flag and private properties
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_components(&self, components: &Components, abstract_descriptor: bool) -> Result<String>;

    /// Formats the metatype document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_metadata(&self, metadata: &MetaData) -> Result<String>;

    /// File extension used for the abstract descriptor written by this formatter
    fn file_extension(&self) -> &'static str;
}

impl<T: DescriptorFormatter + ?Sized> DescriptorFormatter for Box<T> {
    fn format_components(&self, components: &Components, abstract_descriptor: bool) -> Result<String> {
        (**self).format_components(components, abstract_descriptor)
    }

    fn format_metadata(&self, metadata: &MetaData) -> Result<String> {
        (**self).format_metadata(metadata)
    }

    fn file_extension(&self) -> &'static str {
        (**self).file_extension()
    }
}
