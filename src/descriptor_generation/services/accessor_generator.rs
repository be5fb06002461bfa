use super::reference_merger::MergedReference;
use crate::descriptor_generation::domain::{ClassCatalog, ClassDescription, MethodDescription};

/// Which half of an accessor pair a stub provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Bind,
    Unbind,
}

impl AccessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorKind::Bind => "bind",
            AccessorKind::Unbind => "unbind",
        }
    }
}

/// A bind or unbind method that has to be synthesized on a component class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorStub {
    pub class_name: String,
    pub method_name: String,
    pub parameter_type: String,
    /// Name of the reference the accessor serves
    pub reference: String,
    pub kind: AccessorKind,
}

impl AccessorStub {
    pub fn to_method(&self) -> MethodDescription {
        MethodDescription::new(self.method_name.as_str(), vec![self.parameter_type.clone()])
    }
}

/// AccessorGenerator plans accessor stubs for field-attached single-valued references
///
/// Planning is pure; [`AccessorGenerator::apply`] is the only write-back into the
/// class catalog and skips signatures that already exist.
#[derive(Debug, Clone, Copy)]
pub struct AccessorGenerator {
    enabled: bool,
}

impl AccessorGenerator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns the stubs missing on `class` for the given merged references
    pub fn plan(
        &self,
        catalog: &ClassCatalog,
        class: &ClassDescription,
        references: &[MergedReference<'_>],
    ) -> Vec<AccessorStub> {
        if !self.enabled {
            return Vec::new();
        }

        let mut stubs = Vec::new();
        for merged in references {
            let reference = &merged.reference;
            if merged.field.is_none() {
                continue;
            }
            let single_valued = reference
                .parsed_cardinality()
                .is_some_and(|c| c.is_single_valued());
            if !single_valued {
                continue;
            }
            let Some(interface) = reference.interface_name.as_deref() else {
                continue;
            };

            let candidates = [
                (AccessorKind::Bind, merged.explicit_bind, &reference.bind),
                (AccessorKind::Unbind, merged.explicit_unbind, &reference.unbind),
            ];
            for (kind, explicit, method_name) in candidates {
                if explicit || catalog.declares_accessor(class, method_name, interface) {
                    continue;
                }
                stubs.push(AccessorStub {
                    class_name: class.name().to_string(),
                    method_name: method_name.clone(),
                    parameter_type: interface.to_string(),
                    reference: reference.name.clone(),
                    kind,
                });
            }
        }
        stubs
    }

    /// Registers the stubs on their classes; returns how many methods were added
    pub fn apply(catalog: &mut ClassCatalog, stubs: &[AccessorStub]) -> usize {
        stubs
            .iter()
            .map(|stub| catalog.register_methods(&stub.class_name, [stub.to_method()]))
            .sum()
    }
}
