use std::collections::BTreeMap;

/// Tag declaring a component on a class
pub const COMPONENT: &str = "scr.component";
/// Tag declaring an exposed service
pub const SERVICE: &str = "scr.service";
/// Tag declaring a configuration property (class or field)
pub const PROPERTY: &str = "scr.property";
/// Tag declaring a service reference (class or field)
pub const REFERENCE: &str = "scr.reference";

pub const COMPONENT_NAME: &str = "name";
pub const COMPONENT_LABEL: &str = "label";
pub const COMPONENT_DESCRIPTION: &str = "description";
pub const COMPONENT_ENABLED: &str = "enabled";
pub const COMPONENT_FACTORY: &str = "factory";
pub const COMPONENT_IMMEDIATE: &str = "immediate";
pub const COMPONENT_INHERIT: &str = "inherit";
pub const COMPONENT_METATYPE: &str = "metatype";
pub const COMPONENT_ABSTRACT: &str = "abstract";
pub const COMPONENT_DS: &str = "ds";
pub const COMPONENT_CREATE_PID: &str = "create-pid";

pub const SERVICE_INTERFACE: &str = "interface";
pub const SERVICE_FACTORY: &str = "servicefactory";

pub const PROPERTY_NAME: &str = "name";
pub const PROPERTY_VALUE: &str = "value";
pub const PROPERTY_MULTIVALUE_PREFIX: &str = "values";
pub const PROPERTY_TYPE: &str = "type";
pub const PROPERTY_PRIVATE: &str = "private";
pub const PROPERTY_LABEL: &str = "label";
pub const PROPERTY_DESCRIPTION: &str = "description";
pub const PROPERTY_CARDINALITY: &str = "cardinality";

pub const REFERENCE_NAME: &str = "name";
pub const REFERENCE_INTERFACE: &str = "interface";
pub const REFERENCE_CARDINALITY: &str = "cardinality";
pub const REFERENCE_POLICY: &str = "policy";
pub const REFERENCE_TARGET: &str = "target";
pub const REFERENCE_BIND: &str = "bind";
pub const REFERENCE_UNBIND: &str = "unbind";

/// A lexically parsed declarative tag: a kind name plus named parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    parameters: BTreeMap<String, String>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Builder-style helper for attaching a parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn from_parameters(name: impl Into<String>, parameters: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    pub fn named_parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Returns the parameter only when it is present and not blank
    pub fn non_empty_parameter(&self, key: &str) -> Option<&str> {
        self.named_parameter(key).filter(|v| !v.trim().is_empty())
    }

    /// Boolean parameter with `true` (case-insensitive) as the only true value
    pub fn boolean_parameter(&self, key: &str, default: bool) -> bool {
        self.named_parameter(key)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(default)
    }

    /// Tri-state flag accepting `yes` or `true` as true, `None` when absent
    pub fn flag_parameter(&self, key: &str) -> Option<bool> {
        self.named_parameter(key).map(is_affirmative)
    }
}

/// `yes` and `true` (case-insensitive) are affirmative, everything else is not
pub fn is_affirmative(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("true")
}
