use crate::descriptor_generation::domain::{
    AttributeDefinition, Component, Components, Designate, Interface, MetaData, Ocd, Property,
    PropertyType, Reference, Service,
};
use serde::{Deserialize, Serialize};

/// Document format of a component descriptor
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ComponentsDocument {
    #[serde(default)]
    pub components: Vec<ComponentDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ComponentDocument {
    pub name: String,
    pub implementation: String,
    /// Only recorded in abstract descriptors
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub is_abstract: Option<bool>,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<ReferenceDocument>,
}

fn enabled_default() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_default_type(value: &str) -> bool {
    value == PropertyType::DEFAULT.as_str()
}

fn default_type() -> String {
    PropertyType::DEFAULT.as_str().to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ServiceDocument {
    #[serde(rename = "servicefactory", default, skip_serializing_if = "is_false")]
    pub service_factory: bool,
    #[serde(default)]
    pub provide: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PropertyDocument {
    pub name: String,
    #[serde(rename = "type", default = "default_type", skip_serializing_if = "is_default_type")]
    pub property_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Only recorded in abstract descriptors
    #[serde(default, skip_serializing_if = "is_false")]
    pub private: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ReferenceDocument {
    pub name: String,
    pub interface: String,
    pub cardinality: String,
    pub policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub bind: String,
    pub unbind: String,
}

impl ComponentsDocument {
    pub fn from_components(components: &Components, abstract_descriptor: bool) -> Self {
        Self {
            components: components
                .iter()
                .map(|component| ComponentDocument::from_component(component, abstract_descriptor))
                .collect(),
        }
    }

    pub fn into_components(self) -> Components {
        self.components
            .into_iter()
            .map(ComponentDocument::into_component)
            .collect()
    }
}

impl ComponentDocument {
    fn from_component(component: &Component, abstract_descriptor: bool) -> Self {
        Self {
            name: component.name().to_string(),
            implementation: component.implementation().to_string(),
            is_abstract: abstract_descriptor.then(|| component.is_abstract()),
            enabled: component.is_enabled(),
            immediate: component.immediate(),
            factory: component.factory().map(str::to_string),
            service: component.service().map(|service| ServiceDocument {
                service_factory: service.service_factory,
                provide: service.interface_names().map(str::to_string).collect(),
            }),
            properties: component
                .properties()
                .iter()
                .map(|property| PropertyDocument {
                    name: property.name.clone(),
                    property_type: property.property_type.clone(),
                    value: property.value.clone(),
                    values: property.values.clone(),
                    private: abstract_descriptor && property.private,
                })
                .collect(),
            references: component
                .references()
                .iter()
                .map(|reference| ReferenceDocument {
                    name: reference.name.clone(),
                    interface: reference.interface_name.clone().unwrap_or_default(),
                    cardinality: reference.cardinality.clone(),
                    policy: reference.policy.clone(),
                    target: reference.target.clone(),
                    bind: reference.bind.clone(),
                    unbind: reference.unbind.clone(),
                })
                .collect(),
        }
    }

    /// Everything read back is attributed to the implementation class
    fn into_component(self) -> Component {
        let implementation = self.implementation;
        let mut component = Component::new(implementation.as_str());
        component.set_name(self.name);
        component.set_abstract(self.is_abstract.unwrap_or(false));
        component.set_enabled(self.enabled);
        component.set_immediate(self.immediate);
        component.set_factory(self.factory);
        component.set_service(self.service.map(|service| Service {
            service_factory: service.service_factory,
            interfaces: service
                .provide
                .into_iter()
                .map(|name| Interface::new(name, implementation.as_str()))
                .collect(),
        }));
        component.set_properties(
            self.properties
                .into_iter()
                .map(|doc| Property {
                    name: doc.name,
                    value: doc.value,
                    values: doc.values,
                    property_type: doc.property_type,
                    private: doc.private,
                    label: None,
                    description: None,
                    cardinality: None,
                    declared_by: implementation.clone(),
                })
                .collect(),
        );
        component.set_references(
            self.references
                .into_iter()
                .map(|doc| Reference {
                    name: doc.name,
                    interface_name: (!doc.interface.is_empty()).then_some(doc.interface),
                    cardinality: doc.cardinality,
                    policy: doc.policy,
                    target: doc.target,
                    bind: doc.bind,
                    unbind: doc.unbind,
                    declared_by: implementation.clone(),
                    field: None,
                })
                .collect(),
        );
        component
    }
}

/// Document format of the metatype descriptor
#[derive(Debug, Serialize)]
pub(crate) struct MetaDataDocument {
    localization: String,
    ocds: Vec<OcdDocument>,
    designates: Vec<DesignateDocument>,
}

#[derive(Debug, Serialize)]
struct OcdDocument {
    id: String,
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<AttributeDocument>,
}

#[derive(Debug, Serialize)]
struct AttributeDocument {
    id: String,
    #[serde(rename = "type")]
    attribute_type: String,
    #[serde(rename = "default", skip_serializing_if = "Vec::is_empty")]
    default_values: Vec<String>,
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cardinality: Option<String>,
}

#[derive(Debug, Serialize)]
struct DesignateDocument {
    pid: String,
    object: ObjectDocument,
}

#[derive(Debug, Serialize)]
struct ObjectDocument {
    #[serde(rename = "ocdref")]
    ocd_ref: String,
}

impl MetaDataDocument {
    pub fn from_metadata(metadata: &MetaData) -> Self {
        Self {
            localization: metadata.localization().to_string(),
            ocds: metadata.descriptors().iter().map(OcdDocument::from_ocd).collect(),
            designates: metadata
                .designates()
                .iter()
                .map(DesignateDocument::from_designate)
                .collect(),
        }
    }
}

impl OcdDocument {
    fn from_ocd(ocd: &Ocd) -> Self {
        Self {
            id: ocd.id.clone(),
            name: ocd.name.clone(),
            description: ocd.description.clone(),
            attributes: ocd.attributes.iter().map(AttributeDocument::from_attribute).collect(),
        }
    }
}

impl AttributeDocument {
    fn from_attribute(attribute: &AttributeDefinition) -> Self {
        Self {
            id: attribute.id.clone(),
            attribute_type: attribute.attribute_type.clone(),
            default_values: attribute.default_values.clone(),
            name: attribute.name.clone(),
            description: attribute.description.clone(),
            cardinality: attribute.cardinality.clone(),
        }
    }
}

impl DesignateDocument {
    fn from_designate(designate: &Designate) -> Self {
        Self {
            pid: designate.pid.clone(),
            object: ObjectDocument {
                ocd_ref: designate.object.ocd_ref.clone(),
            },
        }
    }
}
