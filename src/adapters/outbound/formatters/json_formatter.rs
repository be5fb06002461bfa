use super::descriptor_document::{ComponentsDocument, MetaDataDocument};
use crate::descriptor_generation::domain::{Components, MetaData};
use crate::ports::outbound::DescriptorFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for JSON descriptor documents
///
/// This adapter implements the DescriptorFormatter port using pretty-printed
/// JSON. Field order follows the document structs, so equal input always
/// yields identical output.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorFormatter for JsonFormatter {
    fn format_components(&self, components: &Components, abstract_descriptor: bool) -> Result<String> {
        let document = ComponentsDocument::from_components(components, abstract_descriptor);
        serde_json::to_string_pretty(&document).map_err(Into::into)
    }

    fn format_metadata(&self, metadata: &MetaData) -> Result<String> {
        let document = MetaDataDocument::from_metadata(metadata);
        serde_json::to_string_pretty(&document).map_err(Into::into)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor_generation::domain::{
        Component, Designate, MetatypeEntry, Ocd, Property, Reference,
    };

    fn components() -> Components {
        let mut component = Component::new("com.example.LogImpl");
        component.add_property(Property::new("level", "INFO"));
        component.add_reference(Reference::new("store", "com.example.Store"));
        vec![component].into_iter().collect()
    }

    #[test]
    fn test_format_components_structure() {
        let output = JsonFormatter::new()
            .format_components(&components(), false)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        let component = &json["components"][0];
        assert_eq!(component["name"], "LogImpl");
        assert_eq!(component["implementation"], "com.example.LogImpl");
        assert!(component.get("abstract").is_none());
        assert_eq!(component["properties"][0]["name"], "level");
        assert_eq!(component["properties"][0]["value"], "INFO");
        assert!(component["properties"][0].get("type").is_none());
        assert_eq!(component["references"][0]["cardinality"], "1..1");
        assert_eq!(component["references"][0]["policy"], "static");
        assert_eq!(component["references"][0]["unbind"], "unbindStore");
    }

    #[test]
    fn test_abstract_descriptor_records_abstract_flag() {
        let output = JsonFormatter::new()
            .format_components(&components(), true)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["components"][0]["abstract"], false);
    }

    #[test]
    fn test_output_is_deterministic() {
        let formatter = JsonFormatter::new();
        let first = formatter.format_components(&components(), false).unwrap();
        let second = formatter.format_components(&components(), false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_metadata() {
        let mut metadata = MetaData::new();
        metadata.add(MetatypeEntry {
            ocd: Ocd::for_component("LogImpl", None, None),
            designate: Designate::for_component("LogImpl"),
        });

        let output = JsonFormatter::new().format_metadata(&metadata).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["localization"], "OSGI-INF/metatype/metatype");
        assert_eq!(json["ocds"][0]["name"], "%LogImpl.name");
        assert_eq!(json["designates"][0]["object"]["ocdref"], "LogImpl");
    }
}
