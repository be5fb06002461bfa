use super::tag::Tag;

/// A method signature known for a class (declared or synthesized)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescription {
    pub name: String,
    pub parameter_types: Vec<String>,
}

impl MethodDescription {
    pub fn new(name: impl Into<String>, parameter_types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types,
        }
    }
}

/// A field together with the tags attached to it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescription {
    name: String,
    type_name: String,
    constant_value: Option<String>,
    tags: Vec<Tag>,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            constant_value: None,
            tags: Vec::new(),
        }
    }

    pub fn with_constant_value(mut self, value: impl Into<String>) -> Self {
        self.constant_value = Some(value.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn constant_value(&self) -> Option<&str> {
        self.constant_value.as_deref()
    }

    pub fn tag_by_name(&self, tag_name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name() == tag_name)
    }
}

/// Description of one class as supplied by the upstream source scanner
///
/// Superclass and interfaces are kept as qualified names; the owning
/// [`ClassCatalog`](super::ClassCatalog) resolves them to descriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescription {
    name: String,
    is_abstract: bool,
    is_interface: bool,
    is_external: bool,
    superclass: Option<String>,
    interfaces: Vec<String>,
    imports: Vec<String>,
    tags: Vec<Tag>,
    fields: Vec<FieldDescription>,
    methods: Vec<MethodDescription>,
}

impl ClassDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            is_interface: false,
            is_external: false,
            superclass: None,
            interfaces: Vec::new(),
            imports: Vec::new(),
            tags: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn abstract_class(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn interface(mut self, is_interface: bool) -> Self {
        self.is_interface = is_interface;
        self
    }

    pub fn external(mut self, is_external: bool) -> Self {
        self.is_external = is_external;
        self
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_field(mut self, field: FieldDescription) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescription) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Simple (unqualified) class name
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    /// Package part of the qualified name, empty for the default package
    pub fn package(&self) -> &str {
        self.name.rsplit_once('.').map(|(p, _)| p).unwrap_or("")
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn is_external(&self) -> bool {
        self.is_external
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn fields(&self) -> &[FieldDescription] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodDescription] {
        &self.methods
    }

    /// First class-level tag of the given kind
    pub fn tag_by_name(&self, tag_name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name() == tag_name)
    }

    /// All class-level tags of the given kind, in declaration order
    pub fn declared_tags(&self, tag_name: &str) -> Vec<&Tag> {
        self.tags.iter().filter(|t| t.name() == tag_name).collect()
    }

    pub fn declares_method(&self, name: &str, parameter_types: &[String]) -> bool {
        self.methods
            .iter()
            .any(|m| m.name == name && m.parameter_types == parameter_types)
    }

    /// Adds a method unless an identical signature exists; returns whether it was added
    pub(crate) fn add_method(&mut self, method: MethodDescription) -> bool {
        if self.declares_method(&method.name, &method.parameter_types) {
            return false;
        }
        self.methods.push(method);
        true
    }
}

/// Returns the part after the last dot of a qualified name
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
