use super::accessor_generator::{AccessorGenerator, AccessorStub};
use super::property_merger::PropertyMerger;
use super::reference_merger::{MergedReference, ReferenceMerger};
use super::service_resolver::ServiceResolver;
use crate::descriptor_generation::domain::tag::{self, Tag};
use crate::descriptor_generation::domain::{
    AssemblyError, ClassCatalog, ClassDescription, Component, Designate, MetatypeEntry, Ocd,
};

/// Switches consumed by component assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Synthesize bind/unbind stubs for field references
    pub generate_accessors: bool,
    /// Add the persistent-identity property unless a component opts out
    pub create_pid: bool,
    /// Inheritance toggle used when a component tag omits `inherit`
    pub inherit_default: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            generate_accessors: true,
            create_pid: true,
            inherit_default: true,
        }
    }
}

/// Result of assembling one component, before validation
#[derive(Debug, Clone)]
pub struct AssembledComponent {
    pub component: Component,
    /// Present unless the component tag disabled metatype generation
    pub metatype: Option<MetatypeEntry>,
    pub accessors: Vec<AccessorStub>,
    pub warnings: Vec<String>,
}

/// ComponentAssembler merges the declarations of a class and its ancestors
/// into a single [`Component`]
///
/// The assembler reads the catalog only. Accessor stubs it plans are returned
/// for the caller to apply.
pub struct ComponentAssembler<'a> {
    catalog: &'a ClassCatalog,
    options: AssemblyOptions,
}

impl<'a> ComponentAssembler<'a> {
    pub fn new(catalog: &'a ClassCatalog, options: AssemblyOptions) -> Self {
        Self { catalog, options }
    }

    /// Assembles the component declared by `component_tag` on `class`
    ///
    /// # Errors
    /// Returns an [`AssemblyError`] when an explicit service interface does not
    /// resolve or a reference name is declared twice on `class` itself.
    pub fn assemble(
        &self,
        class: &'a ClassDescription,
        component_tag: &Tag,
    ) -> Result<AssembledComponent, AssemblyError> {
        let mut warnings = Vec::new();
        let mut component = Component::new(class.name());
        Self::apply_attributes(&mut component, class, component_tag);

        let mut ocd = Self::metatype_enabled(component_tag).then(|| {
            Ocd::for_component(
                component.name(),
                component_tag.named_parameter(tag::COMPONENT_LABEL),
                component_tag.named_parameter(tag::COMPONENT_DESCRIPTION),
            )
        });

        let inherited =
            component_tag.boolean_parameter(tag::COMPONENT_INHERIT, self.options.inherit_default);
        component.set_service(ServiceResolver::resolve(
            self.catalog,
            class,
            inherited,
            &mut warnings,
        )?);

        let chain = if inherited {
            self.catalog.ancestry(class)
        } else {
            vec![class]
        };

        let mut properties = PropertyMerger::new();
        let mut references = ReferenceMerger::new();
        for (depth, owner) in chain.into_iter().enumerate() {
            let from_inspected = depth == 0;
            for property_tag in owner.declared_tags(tag::PROPERTY) {
                properties.merge_tag(property_tag, owner, from_inspected);
            }
            for reference_tag in owner.declared_tags(tag::REFERENCE) {
                references.merge_tag(reference_tag, owner, from_inspected)?;
            }
            for field in owner.fields() {
                references.merge_field(field, owner, from_inspected)?;
                properties.merge_field(field, owner, from_inspected);
            }
        }

        component.set_properties(properties.finish(ocd.as_mut()));

        let mut merged = references.finish();
        self.qualify_interfaces(&mut merged);
        let accessors =
            AccessorGenerator::new(self.options.generate_accessors).plan(self.catalog, class, &merged);
        component.set_references(merged.into_iter().map(|m| m.reference).collect());

        if component_tag.boolean_parameter(tag::COMPONENT_CREATE_PID, self.options.create_pid) {
            component.ensure_pid_property();
        }

        let metatype = ocd.map(|ocd| MetatypeEntry {
            designate: Designate::for_component(component.name()),
            ocd,
        });

        Ok(AssembledComponent {
            component,
            metatype,
            accessors,
            warnings,
        })
    }

    fn apply_attributes(component: &mut Component, class: &ClassDescription, component_tag: &Tag) {
        component.set_abstract(
            component_tag
                .flag_parameter(tag::COMPONENT_ABSTRACT)
                .unwrap_or(class.is_abstract()),
        );
        component.set_ds(component_tag.flag_parameter(tag::COMPONENT_DS).unwrap_or(true));
        if let Some(name) = component_tag.non_empty_parameter(tag::COMPONENT_NAME) {
            component.set_name(name.trim());
        }
        component.set_enabled(component_tag.boolean_parameter(tag::COMPONENT_ENABLED, true));
        // unset stays unset; validation distinguishes it from an explicit value
        component.set_immediate(
            component_tag
                .named_parameter(tag::COMPONENT_IMMEDIATE)
                .map(|_| component_tag.boolean_parameter(tag::COMPONENT_IMMEDIATE, true)),
        );
        component.set_factory(
            component_tag
                .named_parameter(tag::COMPONENT_FACTORY)
                .map(str::to_string),
        );
    }

    fn metatype_enabled(component_tag: &Tag) -> bool {
        component_tag
            .flag_parameter(tag::COMPONENT_METATYPE)
            .unwrap_or(true)
    }

    /// Replaces simple interface names with qualified ones when the declaring class resolves them
    fn qualify_interfaces(&self, merged: &mut [MergedReference<'_>]) {
        for entry in merged.iter_mut() {
            let reference = &mut entry.reference;
            let Some(declaring) = self.catalog.get(&reference.declared_by) else {
                continue;
            };
            let qualified = reference
                .interface_name
                .as_deref()
                .and_then(|name| self.catalog.resolve_type(declaring, name))
                .map(|resolved| resolved.name().to_string());
            if qualified.is_some() {
                reference.interface_name = qualified;
            }
        }
    }
}
