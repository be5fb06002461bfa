use crate::descriptor_generation::domain::component::{default_bind_name, default_unbind_name};
use crate::descriptor_generation::domain::tag::{self, Tag};
use crate::descriptor_generation::domain::{
    AssemblyError, Cardinality, ClassDescription, FieldDescription, Reference, ReferencePolicy,
};

/// One reference declaration as found during the ancestor walk
#[derive(Debug, Clone, Copy)]
struct ReferenceDeclaration<'a> {
    tag: &'a Tag,
    field: Option<&'a FieldDescription>,
    owner: &'a ClassDescription,
}

/// A finalized reference together with what accessor synthesis needs to know
#[derive(Debug, Clone)]
pub struct MergedReference<'a> {
    pub reference: Reference,
    pub field: Option<&'a FieldDescription>,
    pub explicit_bind: bool,
    pub explicit_unbind: bool,
}

/// ReferenceMerger accumulates reference declarations keyed by name
///
/// Declarations arrive leaf first. A name declared twice on the inspected class
/// is a duplicate definition; any other repeat is an inherited declaration
/// shadowed by the one closer to the leaf and is dropped silently.
#[derive(Debug, Default)]
pub struct ReferenceMerger<'a> {
    declarations: Vec<(String, ReferenceDeclaration<'a>)>,
}

impl<'a> ReferenceMerger<'a> {
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Merges a class-level reference tag; tags without a name are ignored
    pub fn merge_tag(
        &mut self,
        reference_tag: &'a Tag,
        owner: &'a ClassDescription,
        from_inspected: bool,
    ) -> Result<(), AssemblyError> {
        let declaration = ReferenceDeclaration {
            tag: reference_tag,
            field: None,
            owner,
        };
        match Self::reference_name(reference_tag, None) {
            Some(name) => self.accept(name, declaration, from_inspected),
            None => Ok(()),
        }
    }

    /// Merges the reference tag of a field, named after the field unless given
    pub fn merge_field(
        &mut self,
        field: &'a FieldDescription,
        owner: &'a ClassDescription,
        from_inspected: bool,
    ) -> Result<(), AssemblyError> {
        let Some(reference_tag) = field.tag_by_name(tag::REFERENCE) else {
            return Ok(());
        };
        let declaration = ReferenceDeclaration {
            tag: reference_tag,
            field: Some(field),
            owner,
        };
        match Self::reference_name(reference_tag, Some(field.name())) {
            Some(name) => self.accept(name, declaration, from_inspected),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declarations.iter().any(|(n, _)| n == name)
    }

    /// Turns the accumulated declarations into references, applying defaults
    pub fn finish(self) -> Vec<MergedReference<'a>> {
        self.declarations
            .into_iter()
            .map(|(name, declaration)| Self::build_reference(name, declaration))
            .collect()
    }

    fn accept(
        &mut self,
        name: String,
        declaration: ReferenceDeclaration<'a>,
        from_inspected: bool,
    ) -> Result<(), AssemblyError> {
        if from_inspected {
            self.insert_or_reject(name, declaration)
        } else {
            self.insert_if_absent(name, declaration);
            Ok(())
        }
    }

    /// Inspected-class contributions: a second declaration of a name is an error
    fn insert_or_reject(
        &mut self,
        name: String,
        declaration: ReferenceDeclaration<'a>,
    ) -> Result<(), AssemblyError> {
        if self.contains(&name) {
            return Err(AssemblyError::DuplicateReference {
                name,
                class_name: declaration.owner.name().to_string(),
            });
        }
        self.declarations.push((name, declaration));
        Ok(())
    }

    /// Inherited contributions: the first declaration of a name wins
    fn insert_if_absent(&mut self, name: String, declaration: ReferenceDeclaration<'a>) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.declarations.push((name, declaration));
        true
    }

    /// Explicit `name` parameter, else the field identifier
    fn reference_name(reference_tag: &Tag, field_name: Option<&str>) -> Option<String> {
        reference_tag
            .non_empty_parameter(tag::REFERENCE_NAME)
            .or(field_name.filter(|n| !n.trim().is_empty()))
            .map(|n| n.trim().to_string())
    }

    fn build_reference(name: String, declaration: ReferenceDeclaration<'a>) -> MergedReference<'a> {
        let reference_tag = declaration.tag;
        let interface_name = reference_tag
            .non_empty_parameter(tag::REFERENCE_INTERFACE)
            .map(|i| i.trim().to_string())
            .or_else(|| declaration.field.map(|f| f.type_name().to_string()));
        let explicit_bind = reference_tag.named_parameter(tag::REFERENCE_BIND);
        let explicit_unbind = reference_tag.named_parameter(tag::REFERENCE_UNBIND);

        let reference = Reference {
            interface_name,
            cardinality: reference_tag
                .named_parameter(tag::REFERENCE_CARDINALITY)
                .map(str::to_string)
                .unwrap_or_else(|| Cardinality::DEFAULT.as_str().to_string()),
            policy: reference_tag
                .named_parameter(tag::REFERENCE_POLICY)
                .map(str::to_string)
                .unwrap_or_else(|| ReferencePolicy::DEFAULT.as_str().to_string()),
            target: reference_tag
                .named_parameter(tag::REFERENCE_TARGET)
                .map(str::to_string),
            bind: explicit_bind
                .map(str::to_string)
                .unwrap_or_else(|| default_bind_name(&name)),
            unbind: explicit_unbind
                .map(str::to_string)
                .unwrap_or_else(|| default_unbind_name(&name)),
            declared_by: declaration.owner.name().to_string(),
            field: declaration.field.map(|f| f.name().to_string()),
            name,
        };

        MergedReference {
            reference,
            field: declaration.field,
            explicit_bind: explicit_bind.is_some(),
            explicit_unbind: explicit_unbind.is_some(),
        }
    }
}
