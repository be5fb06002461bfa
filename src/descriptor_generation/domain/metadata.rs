/// Localization base used by the generated metatype documents
pub const METATYPE_LOCALIZATION: &str = "OSGI-INF/metatype/metatype";

/// Configurable attribute exposed through an object class definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub id: String,
    pub attribute_type: String,
    pub default_values: Vec<String>,
    pub name: String,
    pub description: String,
    pub cardinality: Option<String>,
}

/// Object class definition mirroring a component's configurable properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ocd {
    pub id: String,
    pub name: String,
    pub description: String,
    pub attributes: Vec<AttributeDefinition>,
}

impl Ocd {
    /// Creates a definition whose label and description default to localization keys
    pub fn for_component(
        component_name: &str,
        label: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            id: component_name.to_string(),
            name: label
                .map(str::to_string)
                .unwrap_or_else(|| format!("%{}.name", component_name)),
            description: description
                .map(str::to_string)
                .unwrap_or_else(|| format!("%{}.description", component_name)),
            attributes: Vec::new(),
        }
    }
}

/// Object referenced by a designate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtObject {
    pub ocd_ref: String,
}

/// Binds a configuration PID to an object class definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Designate {
    pub pid: String,
    pub object: MtObject,
}

impl Designate {
    pub fn for_component(component_name: &str) -> Self {
        Self {
            pid: component_name.to_string(),
            object: MtObject {
                ocd_ref: component_name.to_string(),
            },
        }
    }
}

/// The metatype pair produced for one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetatypeEntry {
    pub ocd: Ocd,
    pub designate: Designate,
}

/// Accumulated metatype information of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaData {
    localization: String,
    descriptors: Vec<Ocd>,
    designates: Vec<Designate>,
}

impl Default for MetaData {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaData {
    pub fn new() -> Self {
        Self {
            localization: METATYPE_LOCALIZATION.to_string(),
            descriptors: Vec::new(),
            designates: Vec::new(),
        }
    }

    pub fn localization(&self) -> &str {
        &self.localization
    }

    pub fn descriptors(&self) -> &[Ocd] {
        &self.descriptors
    }

    pub fn designates(&self) -> &[Designate] {
        &self.designates
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn add(&mut self, entry: MetatypeEntry) {
        self.descriptors.push(entry.ocd);
        self.designates.push(entry.designate);
    }
}
