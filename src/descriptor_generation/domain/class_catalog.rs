use super::class_description::{ClassDescription, MethodDescription};
use super::component::{SERVICE_PID, SERVICE_REFERENCE_TYPE};
use super::components::Components;
use super::tag::{self, Tag};
use std::collections::{BTreeMap, HashSet};

/// Maximum number of levels followed up a superclass chain
pub const MAX_ANCESTRY_DEPTH: usize = 64;

/// All class descriptions visible to one compiler run, keyed by qualified name
///
/// Source classes are candidates for component processing; external classes
/// only serve as resolution targets (library types, inherited descriptors).
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    classes: BTreeMap<String, ClassDescription>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog; a later description replaces an earlier one of the same name
    pub fn from_descriptions(descriptions: impl IntoIterator<Item = ClassDescription>) -> Self {
        let mut catalog = Self::new();
        for description in descriptions {
            catalog.insert(description);
        }
        catalog
    }

    pub fn insert(&mut self, description: ClassDescription) -> Option<ClassDescription> {
        self.classes
            .insert(description.name().to_string(), description)
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescription> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Classes eligible for component processing, ordered by qualified name
    pub fn source_classes(&self) -> impl Iterator<Item = &ClassDescription> {
        self.classes.values().filter(|c| !c.is_external())
    }

    /// Demotes a source class to an external one; it stays resolvable as an ancestor
    pub fn mark_external(&mut self, name: &str) -> bool {
        match self.classes.get_mut(name) {
            Some(class) if !class.is_external() => {
                *class = class.clone().external(true);
                true
            }
            _ => false,
        }
    }

    /// Resolves a type name as seen from inside `from`
    ///
    /// Lookup order: qualified name, single-type imports, same package,
    /// on-demand (`.*`) imports.
    pub fn resolve_type<'a>(
        &'a self,
        from: &ClassDescription,
        name: &str,
    ) -> Option<&'a ClassDescription> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(found) = self.get(name) {
            return Some(found);
        }

        let single_import = from.imports().iter().find(|import| {
            import
                .strip_suffix(name)
                .is_some_and(|prefix| prefix.ends_with('.'))
        });
        if let Some(found) = single_import.and_then(|import| self.get(import)) {
            return Some(found);
        }

        let package = from.package();
        let same_package = if package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", package, name)
        };
        if let Some(found) = self.get(&same_package) {
            return Some(found);
        }

        from.imports()
            .iter()
            .filter_map(|import| import.strip_suffix(".*"))
            .find_map(|package| self.get(&format!("{}.{}", package, name)))
    }

    pub fn superclass_of<'a>(&'a self, class: &ClassDescription) -> Option<&'a ClassDescription> {
        class
            .superclass()
            .and_then(|name| self.resolve_type(class, name))
    }

    /// The class followed by its known ancestors, leaf first
    ///
    /// The chain stops at the first unknown superclass, at a cycle, or after
    /// [`MAX_ANCESTRY_DEPTH`] levels.
    pub fn ancestry<'a>(&'a self, class: &'a ClassDescription) -> Vec<&'a ClassDescription> {
        let mut seen = HashSet::new();
        std::iter::successors(Some(class), |current| self.superclass_of(current))
            .take_while(|current| seen.insert(current.name().to_string()))
            .take(MAX_ANCESTRY_DEPTH)
            .collect()
    }

    /// Class-level tags of a kind, optionally including every ancestor's, leaf first
    pub fn tags_by_name<'a>(
        &'a self,
        class: &'a ClassDescription,
        tag_name: &str,
        inherited: bool,
    ) -> Vec<(&'a ClassDescription, &'a Tag)> {
        let chain = if inherited {
            self.ancestry(class)
        } else {
            vec![class]
        };
        chain
            .into_iter()
            .flat_map(|owner| {
                owner
                    .declared_tags(tag_name)
                    .into_iter()
                    .map(move |tag| (owner, tag))
            })
            .collect()
    }

    /// Searches the class and its ancestors for a method signature
    pub fn find_method(
        &self,
        class: &ClassDescription,
        name: &str,
        parameter_types: &[String],
    ) -> bool {
        self.ancestry(class)
            .iter()
            .any(|c| c.declares_method(name, parameter_types))
    }

    /// Whether a bind/unbind style method exists taking the interface or a raw
    /// service reference
    pub fn declares_accessor(
        &self,
        class: &ClassDescription,
        method_name: &str,
        interface: &str,
    ) -> bool {
        [interface, SERVICE_REFERENCE_TYPE]
            .iter()
            .any(|parameter| self.find_method(class, method_name, &[parameter.to_string()]))
    }

    /// Whether the class, an ancestor, or any implemented interface is `type_name`
    pub fn is_assignable_to(&self, class: &ClassDescription, type_name: &str) -> bool {
        let mut pending = vec![class];
        let mut visited = HashSet::new();
        while let Some(current) = pending.pop() {
            if current.name() == type_name {
                return true;
            }
            if !visited.insert(current.name().to_string()) {
                continue;
            }
            for interface in current.interfaces() {
                if interface == type_name {
                    return true;
                }
                if let Some(resolved) = self.resolve_type(current, interface) {
                    if resolved.name() == type_name {
                        return true;
                    }
                    pending.push(resolved);
                }
            }
            if let Some(parent) = self.superclass_of(current) {
                pending.push(parent);
            }
        }
        false
    }

    /// Registers methods onto a class; existing signatures are left untouched
    ///
    /// Returns the number of methods actually added.
    pub fn register_methods(
        &mut self,
        class_name: &str,
        methods: impl IntoIterator<Item = MethodDescription>,
    ) -> usize {
        match self.classes.get_mut(class_name) {
            Some(class) => methods
                .into_iter()
                .filter(|method| class.add_method(method.clone()))
                .count(),
            None => 0,
        }
    }

    /// Makes components from earlier abstract descriptors available as ancestors
    ///
    /// Each component whose implementation is not a known source class becomes an
    /// external class description carrying property and reference tags, the
    /// references' accessor methods, and the service interfaces. Returns the
    /// number of classes registered.
    pub fn register_inherited(&mut self, components: &Components) -> usize {
        let mut registered = 0;
        for component in components {
            if self
                .get(component.implementation())
                .is_some_and(|existing| !existing.is_external())
            {
                continue;
            }

            let mut class = ClassDescription::new(component.implementation())
                .external(true)
                .abstract_class(component.is_abstract());

            for property in component.properties() {
                if property.name == SERVICE_PID {
                    continue;
                }
                let mut tag = Tag::new(tag::PROPERTY)
                    .with_parameter(tag::PROPERTY_NAME, property.name.as_str())
                    .with_parameter(tag::PROPERTY_TYPE, property.property_type.as_str());
                if let Some(value) = &property.value {
                    tag = tag.with_parameter(tag::PROPERTY_VALUE, value.as_str());
                }
                for (index, value) in property.values.iter().enumerate() {
                    tag = tag.with_parameter(
                        format!("{}.{}", tag::PROPERTY_MULTIVALUE_PREFIX, index + 1),
                        value.as_str(),
                    );
                }
                if property.private {
                    tag = tag.with_parameter(tag::PROPERTY_PRIVATE, "true");
                }
                class = class.with_tag(tag);
            }

            for reference in component.references() {
                let mut tag = Tag::new(tag::REFERENCE)
                    .with_parameter(tag::REFERENCE_NAME, reference.name.as_str())
                    .with_parameter(tag::REFERENCE_CARDINALITY, reference.cardinality.as_str())
                    .with_parameter(tag::REFERENCE_POLICY, reference.policy.as_str())
                    .with_parameter(tag::REFERENCE_BIND, reference.bind.as_str())
                    .with_parameter(tag::REFERENCE_UNBIND, reference.unbind.as_str());
                if let Some(interface) = &reference.interface_name {
                    tag = tag.with_parameter(tag::REFERENCE_INTERFACE, interface.as_str());
                    class = class
                        .with_method(MethodDescription::new(
                            reference.bind.as_str(),
                            vec![interface.clone()],
                        ))
                        .with_method(MethodDescription::new(
                            reference.unbind.as_str(),
                            vec![interface.clone()],
                        ));
                }
                if let Some(target) = &reference.target {
                    tag = tag.with_parameter(tag::REFERENCE_TARGET, target.as_str());
                }
                class = class.with_tag(tag);
            }

            if let Some(service) = component.service() {
                for interface in service.interface_names() {
                    if !class.interfaces().iter().any(|i| i == interface) {
                        class = class.implements(interface);
                    }
                }
            }

            self.insert(class);
            registered += 1;
        }
        registered
    }
}
