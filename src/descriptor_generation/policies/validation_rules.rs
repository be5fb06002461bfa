use crate::descriptor_generation::domain::{
    ClassCatalog, ClassDescription, Component, Property, PropertyType, Reference,
};

/// What a rule may look at besides the merged component itself
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub catalog: &'a ClassCatalog,
    /// The class the component was declared on
    pub class: &'a ClassDescription,
}

/// Errors and warnings collected for one component, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, component: &Component, message: impl AsRef<str>) {
        self.errors.push(format!("{}: {}", component, message.as_ref()));
    }

    pub fn warning(&mut self, component: &Component, message: impl AsRef<str>) {
        self.warnings.push(format!("{}: {}", component, message.as_ref()));
    }

    /// A component is eligible for output exactly when no error was reported
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One business rule over a merged component
pub trait ValidationRule {
    fn name(&self) -> &'static str;

    fn check(&self, component: &Component, context: &ValidationContext<'_>, report: &mut ValidationReport);
}

/// Name and implementation class must be present
pub struct IdentityRule;

impl ValidationRule for IdentityRule {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn check(&self, component: &Component, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        if component.name().trim().is_empty() {
            report.error(component, "Component name must not be empty");
        }
        if component.implementation().trim().is_empty() {
            report.error(component, "Implementation class name must not be empty");
        }
    }
}

/// A deployable component needs an instantiable class
pub struct ImplementationRule;

impl ValidationRule for ImplementationRule {
    fn name(&self) -> &'static str {
        "implementation"
    }

    fn check(&self, component: &Component, context: &ValidationContext<'_>, report: &mut ValidationReport) {
        if component.is_abstract() {
            return;
        }
        if context.class.is_interface() {
            report.error(
                component,
                format!("Implementation {} is an interface", context.class.name()),
            );
        } else if context.class.is_abstract() {
            report.error(
                component,
                format!(
                    "Implementation {} is abstract; declare the component abstract or make the class concrete",
                    context.class.name()
                ),
            );
        }
    }
}

/// A delayed component only makes sense when it provides a service
pub struct ImmediateRule;

impl ValidationRule for ImmediateRule {
    fn name(&self) -> &'static str {
        "immediate"
    }

    fn check(&self, component: &Component, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        if component.immediate() == Some(false) && component.service().is_none() {
            report.error(
                component,
                "A component which does not provide a service must be immediate",
            );
        }
    }
}

/// Service factories can neither be immediate nor component factories
pub struct ServiceFactoryRule;

impl ValidationRule for ServiceFactoryRule {
    fn name(&self) -> &'static str {
        "service-factory"
    }

    fn check(&self, component: &Component, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        if !component.is_service_factory() {
            return;
        }
        if component.immediate() == Some(true) {
            report.error(component, "A service factory component must not be immediate");
        }
        if component.factory().is_some() {
            report.error(
                component,
                "A service factory component must not be a component factory",
            );
        }
    }
}

/// The service block names interfaces the class actually implements
pub struct ServiceRule;

impl ValidationRule for ServiceRule {
    fn name(&self) -> &'static str {
        "service"
    }

    fn check(&self, component: &Component, context: &ValidationContext<'_>, report: &mut ValidationReport) {
        let Some(service) = component.service() else {
            return;
        };
        if service.interfaces.is_empty() {
            report.error(component, "Service must declare at least one interface");
            return;
        }
        for interface in service.interface_names() {
            if interface.trim().is_empty() {
                report.error(component, "Service interface name must not be empty");
                continue;
            }
            // library types outside the class model cannot be checked
            if context.catalog.get(interface).is_none() {
                continue;
            }
            if !context.catalog.is_assignable_to(context.class, interface) {
                report.error(
                    component,
                    format!(
                        "Class {} does not implement service interface {}",
                        context.class.name(),
                        interface
                    ),
                );
            }
        }
    }
}

/// Property names, types and literal values
pub struct PropertyRule;

impl PropertyRule {
    fn check_property(component: &Component, property: &Property, report: &mut ValidationReport) {
        if property.name.trim().is_empty() {
            report.error(component, "Property name must not be empty");
            return;
        }
        let Some(property_type) = PropertyType::parse(&property.property_type) else {
            report.error(
                component,
                format!(
                    "Property {} has unknown type '{}'",
                    property.name, property.property_type
                ),
            );
            return;
        };
        for value in property.all_values() {
            if !property_type.accepts(value) {
                report.error(
                    component,
                    format!(
                        "Property {} value '{}' is not a valid {}",
                        property.name,
                        value,
                        property_type.as_str()
                    ),
                );
            }
        }
        if !property.has_value() {
            report.warning(component, format!("Property {} has no value", property.name));
        }
    }
}

impl ValidationRule for PropertyRule {
    fn name(&self) -> &'static str {
        "property"
    }

    fn check(&self, component: &Component, _context: &ValidationContext<'_>, report: &mut ValidationReport) {
        for property in component.properties() {
            Self::check_property(component, property, report);
        }
    }
}

/// Reference vocabulary, target filters and accessor methods
pub struct ReferenceRule;

impl ReferenceRule {
    fn check_reference(
        component: &Component,
        reference: &Reference,
        context: &ValidationContext<'_>,
        report: &mut ValidationReport,
    ) {
        if reference.name.trim().is_empty() {
            report.error(component, "Reference name must not be empty");
            return;
        }
        let interface = reference
            .interface_name
            .as_deref()
            .filter(|i| !i.trim().is_empty());
        if interface.is_none() {
            report.error(
                component,
                format!("Reference {} has no interface", reference.name),
            );
        }
        if reference.parsed_cardinality().is_none() {
            report.error(
                component,
                format!(
                    "Reference {} has invalid cardinality '{}'; expected 0..1, 1..1, 0..n or 1..n",
                    reference.name, reference.cardinality
                ),
            );
        }
        if reference.parsed_policy().is_none() {
            report.error(
                component,
                format!(
                    "Reference {} has invalid policy '{}'; expected static or dynamic",
                    reference.name, reference.policy
                ),
            );
        }
        if let Some(target) = reference.target.as_deref().map(str::trim) {
            if !(target.starts_with('(') && target.ends_with(')')) {
                report.warning(
                    component,
                    format!(
                        "Reference {} target filter '{}' should be enclosed in parentheses",
                        reference.name, target
                    ),
                );
            }
        }

        let Some(interface) = interface else {
            return;
        };
        for method in [&reference.bind, &reference.unbind] {
            if context.catalog.declares_accessor(context.class, method, interface) {
                continue;
            }
            let message = format!(
                "Missing method {} for reference {}",
                method, reference.name
            );
            if component.is_abstract() {
                report.warning(component, message);
            } else {
                report.error(component, message);
            }
        }
    }
}

impl ValidationRule for ReferenceRule {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn check(&self, component: &Component, context: &ValidationContext<'_>, report: &mut ValidationReport) {
        for reference in component.references() {
            Self::check_reference(component, reference, context, report);
        }
    }
}

/// The default rule set, in evaluation order
pub fn standard_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(IdentityRule),
        Box::new(ImplementationRule),
        Box::new(ImmediateRule),
        Box::new(ServiceFactoryRule),
        Box::new(ServiceRule),
        Box::new(PropertyRule),
        Box::new(ReferenceRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor_generation::domain::{
        Interface, MethodDescription, Service,
    };

    fn run(rule: &dyn ValidationRule, component: &Component, catalog: &ClassCatalog) -> ValidationReport {
        let class = catalog.get(component.implementation()).unwrap();
        let context = ValidationContext { catalog, class };
        let mut report = ValidationReport::new();
        rule.check(component, &context, &mut report);
        report
    }

    fn single(class: ClassDescription) -> ClassCatalog {
        ClassCatalog::from_descriptions(vec![class])
    }

    #[test]
    fn test_abstract_class_requires_abstract_component() {
        let catalog = single(ClassDescription::new("a.Base").abstract_class(true));
        let mut component = Component::new("a.Base");

        let report = run(&ImplementationRule, &component, &catalog);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("is abstract"));

        component.set_abstract(true);
        assert!(run(&ImplementationRule, &component, &catalog).is_valid());
    }

    #[test]
    fn test_delayed_component_without_service() {
        let catalog = single(ClassDescription::new("a.Impl"));
        let mut component = Component::new("a.Impl");
        component.set_immediate(Some(false));

        let report = run(&ImmediateRule, &component, &catalog);
        assert!(!report.is_valid());

        component.set_service(Some(Service {
            service_factory: false,
            interfaces: vec![Interface::new("org.Api", "a.Impl")],
        }));
        assert!(run(&ImmediateRule, &component, &catalog).is_valid());
    }

    #[test]
    fn test_service_factory_constraints() {
        let catalog = single(ClassDescription::new("a.Impl"));
        let mut component = Component::new("a.Impl");
        component.set_service(Some(Service {
            service_factory: true,
            interfaces: vec![Interface::new("org.Api", "a.Impl")],
        }));
        component.set_immediate(Some(true));
        component.set_factory(Some("f".to_string()));

        let report = run(&ServiceFactoryRule, &component, &catalog);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_service_interfaces_must_be_implemented() {
        let catalog = ClassCatalog::from_descriptions(vec![
            ClassDescription::new("a.Api").interface(true),
            ClassDescription::new("a.Other").interface(true),
            ClassDescription::new("a.Impl").implements("a.Api"),
        ]);
        let mut component = Component::new("a.Impl");
        component.set_service(Some(Service {
            service_factory: false,
            interfaces: vec![
                Interface::new("a.Api", "a.Impl"),
                Interface::new("a.Other", "a.Impl"),
                Interface::new("lib.Unknown", "a.Impl"),
            ],
        }));

        let report = run(&ServiceRule, &component, &catalog);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("a.Other"));

        component.set_service(Some(Service::default()));
        let report = run(&ServiceRule, &component, &catalog);
        assert!(report.errors[0].contains("at least one interface"));
    }

    #[test]
    fn test_property_types_and_values() {
        let catalog = single(ClassDescription::new("a.Impl"));
        let mut component = Component::new("a.Impl");
        let mut port = Property::new("port", "eighty");
        port.property_type = "Integer".to_string();
        let mut odd = Property::new("odd", "1");
        odd.property_type = "Decimal".to_string();
        let mut empty = Property::new("empty", "");
        empty.value = None;
        component.set_properties(vec![port, odd, empty, Property::new("level", "INFO")]);

        let report = run(&PropertyRule, &component, &catalog);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("not a valid Integer"));
        assert!(report.errors[1].contains("unknown type 'Decimal'"));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("empty"));
    }

    #[test]
    fn test_reference_vocabulary_and_target() {
        let catalog = single(
            ClassDescription::new("a.Impl")
                .with_method(MethodDescription::new("bindLog", vec!["org.Log".to_string()]))
                .with_method(MethodDescription::new("unbindLog", vec!["org.Log".to_string()])),
        );
        let mut component = Component::new("a.Impl");
        let mut reference = Reference::new("log", "org.Log");
        reference.cardinality = "many".to_string();
        reference.policy = "lazy".to_string();
        reference.target = Some("name=x".to_string());
        component.add_reference(reference);

        let report = run(&ReferenceRule, &component, &catalog);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("parentheses"));
    }

    #[test]
    fn test_missing_accessors_are_warnings_for_abstract_components() {
        let catalog = single(ClassDescription::new("a.Impl"));
        let mut component = Component::new("a.Impl");
        component.add_reference(Reference::new("log", "org.Log"));

        let report = run(&ReferenceRule, &component, &catalog);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("Missing method bindLog"));

        component.set_abstract(true);
        let report = run(&ReferenceRule, &component, &catalog);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_standard_rules_order() {
        let names: Vec<_> = standard_rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "identity",
                "implementation",
                "immediate",
                "service-factory",
                "service",
                "property",
                "reference"
            ]
        );
    }
}
