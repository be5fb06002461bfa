use crate::descriptor_generation::domain::tag::{self, Tag};
use crate::descriptor_generation::domain::{
    AttributeDefinition, ClassDescription, FieldDescription, Ocd, Property, PropertyType,
};

/// PropertyMerger folds property declarations of an ancestor walk into one list
///
/// Contributions arrive leaf first. A declaration on the inspected class replaces
/// any earlier one of the same name; an ancestor's declaration is only taken when
/// nothing closer to the leaf declared that name. Overrides never raise errors.
#[derive(Debug, Default)]
pub struct PropertyMerger {
    properties: Vec<Property>,
}

impl PropertyMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a class-level property tag
    pub fn merge_tag(&mut self, property_tag: &Tag, owner: &ClassDescription, from_inspected: bool) {
        let name = property_tag
            .named_parameter(tag::PROPERTY_NAME)
            .unwrap_or_default()
            .trim()
            .to_string();
        let property = Self::build_property(name, property_tag, owner);
        self.accept(property, from_inspected);
    }

    /// Merges the property tag of a field, if it carries one
    ///
    /// The name comes from the tag, else the field's constant value, else the
    /// field identifier.
    pub fn merge_field(&mut self, field: &FieldDescription, owner: &ClassDescription, from_inspected: bool) {
        let Some(property_tag) = field.tag_by_name(tag::PROPERTY) else {
            return;
        };
        let name = property_tag
            .non_empty_parameter(tag::PROPERTY_NAME)
            .or_else(|| field.constant_value().filter(|v| !v.trim().is_empty()))
            .unwrap_or(field.name())
            .trim()
            .to_string();
        let property = Self::build_property(name, property_tag, owner);
        self.accept(property, from_inspected);
    }

    /// Produces the merged properties and mirrors the public ones into the OCD
    pub fn finish(self, ocd: Option<&mut Ocd>) -> Vec<Property> {
        if let Some(ocd) = ocd {
            ocd.attributes.extend(
                self.properties
                    .iter()
                    .filter(|p| !p.private)
                    .map(Self::attribute_definition),
            );
        }
        self.properties
    }

    fn accept(&mut self, property: Property, from_inspected: bool) {
        if from_inspected {
            self.insert_or_replace(property);
        } else {
            self.insert_if_absent(property);
        }
    }

    /// Leaf contributions: the latest declaration of a name wins, keeping its position
    fn insert_or_replace(&mut self, property: Property) {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    /// Ancestor contributions: first declaration of a name wins
    fn insert_if_absent(&mut self, property: Property) -> bool {
        if self.properties.iter().any(|p| p.name == property.name) {
            return false;
        }
        self.properties.push(property);
        true
    }

    fn build_property(name: String, property_tag: &Tag, owner: &ClassDescription) -> Property {
        Property {
            name,
            value: property_tag
                .named_parameter(tag::PROPERTY_VALUE)
                .map(str::to_string),
            values: Self::multi_values(property_tag),
            property_type: property_tag
                .non_empty_parameter(tag::PROPERTY_TYPE)
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| PropertyType::DEFAULT.as_str().to_string()),
            private: property_tag.boolean_parameter(tag::PROPERTY_PRIVATE, false),
            label: property_tag
                .named_parameter(tag::PROPERTY_LABEL)
                .map(str::to_string),
            description: property_tag
                .named_parameter(tag::PROPERTY_DESCRIPTION)
                .map(str::to_string),
            cardinality: property_tag
                .non_empty_parameter(tag::PROPERTY_CARDINALITY)
                .map(str::to_string),
            declared_by: owner.name().to_string(),
        }
    }

    /// Collects `values` (comma separated) and numbered `values.N` parameters
    fn multi_values(property_tag: &Tag) -> Vec<String> {
        let mut numbered: Vec<(u32, &str)> = Vec::new();
        let mut values = Vec::new();
        for (key, value) in property_tag.parameters() {
            if key == tag::PROPERTY_MULTIVALUE_PREFIX {
                values.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string),
                );
            } else if let Some(index) = key
                .strip_prefix(tag::PROPERTY_MULTIVALUE_PREFIX)
                .and_then(|rest| rest.strip_prefix('.'))
                .and_then(|index| index.parse::<u32>().ok())
            {
                numbered.push((index, value.as_str()));
            }
        }
        numbered.sort_by_key(|(index, _)| *index);
        values.extend(numbered.into_iter().map(|(_, v)| v.to_string()));
        values
    }

    fn attribute_definition(property: &Property) -> AttributeDefinition {
        AttributeDefinition {
            id: property.name.clone(),
            attribute_type: property.property_type.clone(),
            default_values: property.all_values().map(str::to_string).collect(),
            name: property
                .label
                .clone()
                .unwrap_or_else(|| format!("%{}.name", property.name)),
            description: property
                .description
                .clone()
                .unwrap_or_else(|| format!("%{}.description", property.name)),
            cardinality: property.cardinality.clone(),
        }
    }
}
