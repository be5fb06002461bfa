use super::class_description::simple_name;

/// Reserved property key correlating stored configuration with a component
pub const SERVICE_PID: &str = "service.pid";

/// Parameter type accepted by bind/unbind methods as an alternative to the interface
pub const SERVICE_REFERENCE_TYPE: &str = "org.osgi.framework.ServiceReference";

/// One interface exposed by a component's service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    /// Class whose service tag contributed this interface
    pub declared_by: String,
}

impl Interface {
    pub fn new(name: impl Into<String>, declared_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_by: declared_by.into(),
        }
    }
}

/// The set of interfaces a component exposes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub service_factory: bool,
    pub interfaces: Vec<Interface>,
}

impl Service {
    pub fn interface_names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.iter().map(|i| i.name.as_str())
    }
}

/// Property value types understood by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Long,
    Double,
    Float,
    Integer,
    Byte,
    Char,
    Boolean,
    Short,
}

impl PropertyType {
    pub const DEFAULT: PropertyType = PropertyType::String;

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "String" => Some(Self::String),
            "Long" => Some(Self::Long),
            "Double" => Some(Self::Double),
            "Float" => Some(Self::Float),
            "Integer" => Some(Self::Integer),
            "Byte" => Some(Self::Byte),
            "Char" | "Character" => Some(Self::Char),
            "Boolean" => Some(Self::Boolean),
            "Short" => Some(Self::Short),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Long => "Long",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Integer => "Integer",
            Self::Byte => "Byte",
            Self::Char => "Char",
            Self::Boolean => "Boolean",
            Self::Short => "Short",
        }
    }

    /// Checks whether a literal value is representable in this type
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::String => true,
            Self::Long => value.parse::<i64>().is_ok(),
            Self::Integer => value.parse::<i32>().is_ok(),
            Self::Short => value.parse::<i16>().is_ok(),
            Self::Byte => value.parse::<i8>().is_ok(),
            Self::Double => value.parse::<f64>().is_ok(),
            Self::Float => value.parse::<f32>().is_ok(),
            Self::Char => value.chars().count() == 1,
            Self::Boolean => {
                value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
            }
        }
    }
}

/// One configuration property of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: Option<String>,
    pub values: Vec<String>,
    /// Raw type name as declared; checked against [`PropertyType`] during validation
    pub property_type: String,
    /// Private properties are not exposed through the metatype descriptor
    pub private: bool,
    pub label: Option<String>,
    pub description: Option<String>,
    pub cardinality: Option<String>,
    pub declared_by: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            values: Vec::new(),
            property_type: PropertyType::DEFAULT.as_str().to_string(),
            private: false,
            label: None,
            description: None,
            cardinality: None,
            declared_by: String::new(),
        }
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some() || !self.values.is_empty()
    }

    /// All literal values, single value first
    pub fn all_values(&self) -> impl Iterator<Item = &str> {
        self.value
            .iter()
            .chain(self.values.iter())
            .map(String::as_str)
    }
}

/// Allowed multiplicity of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ZeroToOne,
    ExactlyOne,
    ZeroToMany,
    OneToMany,
}

impl Cardinality {
    pub const DEFAULT: Cardinality = Cardinality::ExactlyOne;

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "0..1" => Some(Self::ZeroToOne),
            "1..1" => Some(Self::ExactlyOne),
            "0..n" => Some(Self::ZeroToMany),
            "1..n" => Some(Self::OneToMany),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroToOne => "0..1",
            Self::ExactlyOne => "1..1",
            Self::ZeroToMany => "0..n",
            Self::OneToMany => "1..n",
        }
    }

    pub fn is_single_valued(&self) -> bool {
        matches!(self, Self::ZeroToOne | Self::ExactlyOne)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::ZeroToOne | Self::ZeroToMany)
    }
}

/// Whether a bound reference may be rebound while the component is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePolicy {
    Static,
    Dynamic,
}

impl ReferencePolicy {
    pub const DEFAULT: ReferencePolicy = ReferencePolicy::Static;

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "static" => Some(Self::Static),
            "dynamic" => Some(Self::Dynamic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }
}

/// A declared dependency on another service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub interface_name: Option<String>,
    /// Raw cardinality; checked against [`Cardinality`] during validation
    pub cardinality: String,
    /// Raw policy; checked against [`ReferencePolicy`] during validation
    pub policy: String,
    pub target: Option<String>,
    pub bind: String,
    pub unbind: String,
    pub declared_by: String,
    /// Field the reference tag was attached to, if any
    pub field: Option<String>,
}

impl Reference {
    /// Creates a reference with default cardinality, policy and accessor names
    pub fn new(name: impl Into<String>, interface_name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            bind: default_bind_name(&name),
            unbind: default_unbind_name(&name),
            name,
            interface_name: Some(interface_name.into()),
            cardinality: Cardinality::DEFAULT.as_str().to_string(),
            policy: ReferencePolicy::DEFAULT.as_str().to_string(),
            target: None,
            declared_by: String::new(),
            field: None,
        }
    }

    pub fn parsed_cardinality(&self) -> Option<Cardinality> {
        Cardinality::parse(&self.cardinality)
    }

    pub fn parsed_policy(&self) -> Option<ReferencePolicy> {
        ReferencePolicy::parse(&self.policy)
    }
}

/// `bind` + reference name with an upper-cased first letter
pub fn default_bind_name(reference_name: &str) -> String {
    format!("bind{}", capitalize(reference_name))
}

/// `unbind` + reference name with an upper-cased first letter
pub fn default_unbind_name(reference_name: &str) -> String {
    format!("unbind{}", capitalize(reference_name))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One declared software component, merged across its class hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    implementation: String,
    is_abstract: bool,
    ds: bool,
    enabled: bool,
    immediate: Option<bool>,
    factory: Option<String>,
    service: Option<Service>,
    properties: Vec<Property>,
    references: Vec<Reference>,
}

impl Component {
    /// Creates a component bound to an implementation class, named after its simple name
    pub fn new(implementation: impl Into<String>) -> Self {
        let implementation = implementation.into();
        Self {
            name: simple_name(&implementation).to_string(),
            implementation,
            is_abstract: false,
            ds: true,
            enabled: true,
            immediate: None,
            factory: None,
            service: None,
            properties: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Whether the component is written to descriptors at all
    pub fn is_ds(&self) -> bool {
        self.ds
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `None` when the declaration left `immediate` unset
    pub fn immediate(&self) -> Option<bool> {
        self.immediate
    }

    pub fn factory(&self) -> Option<&str> {
        self.factory.as_deref()
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn is_service_factory(&self) -> bool {
        self.service.as_ref().is_some_and(|s| s.service_factory)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn set_ds(&mut self, ds: bool) {
        self.ds = ds;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_immediate(&mut self, immediate: Option<bool>) {
        self.immediate = immediate;
    }

    pub fn set_factory(&mut self, factory: Option<String>) {
        self.factory = factory;
    }

    pub fn set_service(&mut self, service: Option<Service>) {
        self.service = service;
    }

    pub fn set_properties(&mut self, properties: Vec<Property>) {
        self.properties = properties;
    }

    pub fn set_references(&mut self, references: Vec<Reference>) {
        self.references = references;
    }

    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn add_reference(&mut self, reference: Reference) {
        self.references.push(reference);
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Adds the persistent-identity property unless one is already present
    ///
    /// Returns whether a property was added.
    pub fn ensure_pid_property(&mut self) -> bool {
        if self.property(SERVICE_PID).is_some() {
            return false;
        }
        let mut pid = Property::new(SERVICE_PID, self.name.clone());
        pid.declared_by = self.implementation.clone();
        self.properties.push(pid);
        true
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Component {} ({})", self.name, self.implementation)
    }
}
