use std::collections::HashSet;

use crate::descriptor_generation::domain::tag::{self, Tag};
use crate::descriptor_generation::domain::{
    AssemblyError, ClassCatalog, ClassDescription, Interface, Service,
};

/// Maximum nesting followed while discovering implemented interfaces
pub const MAX_DISCOVERY_DEPTH: usize = 32;

/// ServiceResolver builds the service block of a component from its service tags
///
/// A tag naming an interface contributes exactly that interface, resolved through
/// the class's imports. A tag without an interface contributes every interface
/// the class implements, their super-interfaces, and everything implemented by
/// its ancestors. Discovered interfaces are not de-duplicated, so an interface
/// reachable along two paths is listed twice. A type that is already on the
/// current path is skipped, which stops cyclic hierarchies and yields a warning.
pub struct ServiceResolver;

impl ServiceResolver {
    /// Returns `None` when no service tag applies to the class
    ///
    /// # Errors
    /// [`AssemblyError::UnresolvedInterface`] when an explicitly named interface
    /// does not resolve to a known class or interface.
    pub fn resolve(
        catalog: &ClassCatalog,
        class: &ClassDescription,
        inherited: bool,
        warnings: &mut Vec<String>,
    ) -> Result<Option<Service>, AssemblyError> {
        let service_tags = catalog.tags_by_name(class, tag::SERVICE, inherited);
        if service_tags.is_empty() {
            return Ok(None);
        }

        let mut service = Service::default();
        for (owner, service_tag) in service_tags {
            match service_tag.non_empty_parameter(tag::SERVICE_INTERFACE) {
                Some(name) => {
                    let resolved = catalog.resolve_type(class, name).ok_or_else(|| {
                        AssemblyError::UnresolvedInterface {
                            interface: name.trim().to_string(),
                            class_name: class.name().to_string(),
                        }
                    })?;
                    service
                        .interfaces
                        .push(Interface::new(resolved.name(), owner.name()));
                }
                None => {
                    let mut discovery = Discovery {
                        catalog,
                        declared_by: owner.name(),
                        interfaces: &mut service.interfaces,
                        path: HashSet::new(),
                        truncated: false,
                    };
                    discovery.visit(Some(class), 0);
                    if discovery.truncated {
                        warnings.push(Self::truncation_warning(class, service_tag));
                    }
                }
            }

            service.service_factory |= service_tag.boolean_parameter(tag::SERVICE_FACTORY, false);
        }

        Ok(Some(service))
    }

    fn truncation_warning(class: &ClassDescription, service_tag: &Tag) -> String {
        format!(
            "Interface discovery for @{} in class {} stopped at a cyclic type hierarchy or after {} levels.",
            service_tag.name(),
            class.name(),
            MAX_DISCOVERY_DEPTH
        )
    }
}

/// Recursive walk over implemented interfaces and superclasses
struct Discovery<'a, 'b> {
    catalog: &'a ClassCatalog,
    declared_by: &'a str,
    interfaces: &'b mut Vec<Interface>,
    path: HashSet<&'a str>,
    truncated: bool,
}

impl<'a> Discovery<'a, '_> {
    fn visit(&mut self, description: Option<&'a ClassDescription>, depth: usize) {
        let Some(description) = description else {
            return;
        };
        if depth >= MAX_DISCOVERY_DEPTH || !self.path.insert(description.name()) {
            self.truncated = true;
            return;
        }

        for interface in description.interfaces() {
            let resolved = self.catalog.resolve_type(description, interface);
            let name = resolved.map(|r| r.name()).unwrap_or(interface.as_str());
            if self.path.contains(name) {
                self.truncated = true;
                continue;
            }
            self.interfaces.push(Interface::new(name, self.declared_by));
            self.visit(resolved, depth + 1);
        }

        self.visit(self.catalog.superclass_of(description), depth + 1);
        self.path.remove(description.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_tag() -> Tag {
        Tag::new(tag::SERVICE)
    }

    fn names(service: &Service) -> Vec<&str> {
        service.interface_names().collect()
    }

    #[test]
    fn test_no_service_tag_yields_none() {
        let catalog = ClassCatalog::from_descriptions(vec![ClassDescription::new("a.Impl")]);
        let class = catalog.get("a.Impl").unwrap();
        let mut warnings = Vec::new();

        let service = ServiceResolver::resolve(&catalog, class, true, &mut warnings).unwrap();
        assert!(service.is_none());
    }

    #[test]
    fn test_explicit_interface_is_resolved_through_imports() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("org.log.LogService").interface(true),
            ClassDescription::new("a.Impl")
                .with_import("org.log.LogService")
                .with_tag(service_tag().with_parameter(tag::SERVICE_INTERFACE, "LogService")),
        ]);
        let class = catalog.get("a.Impl").unwrap();
        let mut warnings = Vec::new();

        let service = ServiceResolver::resolve(&catalog, class, true, &mut warnings)
            .unwrap()
            .unwrap();
        assert_eq!(names(&service), vec!["org.log.LogService"]);
        assert_eq!(service.interfaces[0].declared_by, "a.Impl");
    }

    #[test]
    fn test_unresolved_explicit_interface_fails() {
        let catalog = ClassCatalog::from_descriptions(vec![ClassDescription::new("a.Impl")
            .with_tag(service_tag().with_parameter(tag::SERVICE_INTERFACE, "Missing"))]);
        let class = catalog.get("a.Impl").unwrap();
        let mut warnings = Vec::new();

        let result = ServiceResolver::resolve(&catalog, class, true, &mut warnings);
        assert_eq!(
            result,
            Err(AssemblyError::UnresolvedInterface {
                interface: "Missing".to_string(),
                class_name: "a.Impl".to_string(),
            })
        );
    }

    #[test]
    fn test_discovery_walks_super_interfaces_and_superclasses() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("a.Root").interface(true),
            ClassDescription::new("a.Child").interface(true).implements("a.Root"),
            ClassDescription::new("a.Base").implements("java.io.Serializable"),
            ClassDescription::new("a.Impl")
                .extends("a.Base")
                .implements("a.Child")
                .with_tag(service_tag()),
        ]);
        let class = catalog.get("a.Impl").unwrap();
        let mut warnings = Vec::new();

        let service = ServiceResolver::resolve(&catalog, class, true, &mut warnings)
            .unwrap()
            .unwrap();
        assert_eq!(
            names(&service),
            vec!["a.Child", "a.Root", "java.io.Serializable"]
        );
        assert!(warnings.is_empty());
    }

    // Interfaces reachable along two paths are intentionally listed twice.
    #[test]
    fn test_diamond_discovery_terminates_without_deduplication() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("d.C").interface(true),
            ClassDescription::new("d.A").interface(true).implements("d.C"),
            ClassDescription::new("d.B").interface(true).implements("d.C"),
            ClassDescription::new("d.Impl")
                .implements("d.A")
                .implements("d.B")
                .with_tag(service_tag()),
        ]);
        let class = catalog.get("d.Impl").unwrap();
        let mut warnings = Vec::new();

        let service = ServiceResolver::resolve(&catalog, class, true, &mut warnings)
            .unwrap()
            .unwrap();
        assert_eq!(names(&service), vec!["d.A", "d.C", "d.B", "d.C"]);
    }

    #[test]
    fn test_cyclic_interfaces_are_bounded() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("c.A").interface(true).implements("c.B"),
            ClassDescription::new("c.B").interface(true).implements("c.A"),
            ClassDescription::new("c.Impl")
                .implements("c.A")
                .with_tag(service_tag()),
        ]);
        let class = catalog.get("c.Impl").unwrap();
        let mut warnings = Vec::new();

        let service = ServiceResolver::resolve(&catalog, class, true, &mut warnings)
            .unwrap()
            .unwrap();
        assert_eq!(names(&service), vec!["c.A", "c.B"]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("c.Impl"));
    }

    #[test]
    fn test_self_referencing_interface_with_two_branches_stops() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("a.I")
                .interface(true)
                .implements("a.I")
                .implements("a.I"),
            ClassDescription::new("a.Impl")
                .implements("a.I")
                .with_tag(service_tag()),
        ]);
        let class = catalog.get("a.Impl").unwrap();
        let mut warnings = Vec::new();

        let service = ServiceResolver::resolve(&catalog, class, true, &mut warnings)
            .unwrap()
            .unwrap();
        assert_eq!(names(&service), vec!["a.I"]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_cyclic_superclass_chain_stops() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("s.Api").interface(true),
            ClassDescription::new("s.A").extends("s.B").implements("s.Api"),
            ClassDescription::new("s.B").extends("s.A"),
            ClassDescription::new("s.Impl")
                .extends("s.A")
                .with_tag(service_tag()),
        ]);
        let class = catalog.get("s.Impl").unwrap();
        let mut warnings = Vec::new();

        let service = ServiceResolver::resolve(&catalog, class, true, &mut warnings)
            .unwrap()
            .unwrap();
        assert_eq!(names(&service), vec!["s.Api"]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_service_factory_is_or_of_all_tags() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("a.Api").interface(true),
            ClassDescription::new("a.Base")
                .with_tag(service_tag().with_parameter(tag::SERVICE_FACTORY, "true")),
            ClassDescription::new("a.Impl")
                .extends("a.Base")
                .implements("a.Api")
                .with_tag(service_tag()),
        ]);
        let class = catalog.get("a.Impl").unwrap();
        let mut warnings = Vec::new();

        let inherited = ServiceResolver::resolve(&catalog, class, true, &mut warnings)
            .unwrap()
            .unwrap();
        assert!(inherited.service_factory);
        // the ancestor's tag also triggers a second discovery pass from the leaf
        assert_eq!(names(&inherited), vec!["a.Api", "a.Api"]);
        assert_eq!(inherited.interfaces[1].declared_by, "a.Base");

        let local = ServiceResolver::resolve(&catalog, class, false, &mut warnings)
            .unwrap()
            .unwrap();
        assert!(!local.service_factory);
    }
}
