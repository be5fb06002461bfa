use crate::descriptor_generation::domain::{
    ClassCatalog, ClassDescription, FieldDescription, MethodDescription, Tag,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Class model document written by the upstream source scanner
#[derive(Debug, Deserialize)]
pub(super) struct ClassModelDocument {
    #[serde(default)]
    classes: Vec<ClassEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassEntry {
    name: String,
    #[serde(rename = "abstract", default)]
    is_abstract: bool,
    #[serde(rename = "interface", default)]
    is_interface: bool,
    #[serde(default)]
    external: bool,
    #[serde(default)]
    superclass: Option<String>,
    #[serde(default)]
    interfaces: Vec<String>,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    tags: Vec<TagEntry>,
    #[serde(default)]
    fields: Vec<FieldEntry>,
    #[serde(default)]
    methods: Vec<MethodEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
    #[serde(default)]
    parameters: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    tags: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct MethodEntry {
    name: String,
    #[serde(default)]
    parameters: Vec<String>,
}

impl ClassModelDocument {
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn into_catalog(self) -> ClassCatalog {
        ClassCatalog::from_descriptions(self.classes.into_iter().map(ClassEntry::into_description))
    }
}

impl TagEntry {
    fn into_tag(self) -> Tag {
        Tag::from_parameters(self.name, self.parameters)
    }
}

impl ClassEntry {
    fn into_description(self) -> ClassDescription {
        let mut class = ClassDescription::new(self.name)
            .abstract_class(self.is_abstract)
            .interface(self.is_interface)
            .external(self.external);
        if let Some(superclass) = self.superclass {
            class = class.extends(superclass);
        }
        for interface in self.interfaces {
            class = class.implements(interface);
        }
        for import in self.imports {
            class = class.with_import(import);
        }
        for tag in self.tags {
            class = class.with_tag(tag.into_tag());
        }
        for field in self.fields {
            let mut description = FieldDescription::new(field.name, field.type_name);
            if let Some(value) = field.value {
                description = description.with_constant_value(value);
            }
            for tag in field.tags {
                description = description.with_tag(tag.into_tag());
            }
            class = class.with_field(description);
        }
        for method in self.methods {
            class = class.with_method(MethodDescription::new(method.name, method.parameters));
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor_generation::domain::tag;

    const JSON_MODEL: &str = r#"{
        "classes": [
            {
                "name": "com.example.LogImpl",
                "superclass": "com.example.Base",
                "interfaces": ["com.example.Log"],
                "imports": ["org.store.*"],
                "tags": [
                    { "name": "scr.component", "parameters": { "immediate": "true" } }
                ],
                "fields": [
                    {
                        "name": "store",
                        "type": "Store",
                        "tags": [{ "name": "scr.reference" }]
                    },
                    { "name": "LEVEL", "type": "String", "value": "level" }
                ],
                "methods": [{ "name": "activate", "parameters": [] }]
            },
            { "name": "com.example.Log", "interface": true },
            { "name": "com.example.Base", "abstract": true, "external": true }
        ]
    }"#;

    #[test]
    fn test_json_document_into_catalog() {
        let document: ClassModelDocument = serde_json::from_str(JSON_MODEL).unwrap();
        assert_eq!(document.class_count(), 3);

        let catalog = document.into_catalog();
        let class = catalog.get("com.example.LogImpl").unwrap();
        assert_eq!(class.superclass(), Some("com.example.Base"));
        assert_eq!(class.interfaces(), &["com.example.Log".to_string()]);
        assert_eq!(
            class
                .tag_by_name(tag::COMPONENT)
                .and_then(|t| t.named_parameter(tag::COMPONENT_IMMEDIATE)),
            Some("true")
        );
        assert!(class.fields()[0].tag_by_name(tag::REFERENCE).is_some());
        assert_eq!(class.fields()[1].constant_value(), Some("level"));
        assert!(class.declares_method("activate", &[]));
        assert!(catalog.get("com.example.Log").unwrap().is_interface());
        assert!(catalog.get("com.example.Base").unwrap().is_external());
    }

    #[test]
    fn test_toml_document() {
        let content = r#"
[[classes]]
name = "a.Impl"

[[classes.tags]]
name = "scr.component"
parameters = { abstract = "yes" }
"#;
        let document: ClassModelDocument = toml::from_str(content).unwrap();
        let catalog = document.into_catalog();
        let component = catalog.get("a.Impl").unwrap().tag_by_name(tag::COMPONENT).unwrap();
        assert_eq!(component.named_parameter(tag::COMPONENT_ABSTRACT), Some("yes"));
    }

    #[test]
    fn test_unknown_class_keys_are_rejected() {
        let result: Result<ClassModelDocument, _> =
            serde_json::from_str(r#"{"classes": [{"name": "a.B", "extends": "a.C"}]}"#);
        assert!(result.is_err());
    }
}
