use super::descriptor_document::{ComponentsDocument, MetaDataDocument};
use crate::descriptor_generation::domain::{Components, MetaData};
use crate::ports::outbound::DescriptorFormatter;
use crate::shared::Result;

/// YamlFormatter adapter for YAML descriptor documents
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorFormatter for YamlFormatter {
    fn format_components(&self, components: &Components, abstract_descriptor: bool) -> Result<String> {
        let document = ComponentsDocument::from_components(components, abstract_descriptor);
        serde_yaml_ng::to_string(&document).map_err(Into::into)
    }

    fn format_metadata(&self, metadata: &MetaData) -> Result<String> {
        let document = MetaDataDocument::from_metadata(metadata);
        serde_yaml_ng::to_string(&document).map_err(Into::into)
    }

    fn file_extension(&self) -> &'static str {
        "yml"
    }
}
