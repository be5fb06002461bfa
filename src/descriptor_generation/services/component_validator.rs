use crate::descriptor_generation::domain::Component;
use crate::descriptor_generation::policies::{
    standard_rules, ValidationContext, ValidationReport, ValidationRule,
};

/// ComponentValidator runs an ordered, pluggable set of rules over a merged component
///
/// Rules only append to the report; a component passes when the report holds
/// no errors after every rule ran.
pub struct ComponentValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Default for ComponentValidator {
    fn default() -> Self {
        Self::standard()
    }
}

impl ComponentValidator {
    /// A validator without rules; everything passes
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn validate(&self, component: &Component, context: &ValidationContext<'_>) -> ValidationReport {
        let mut report = ValidationReport::new();
        for rule in &self.rules {
            rule.check(component, context, &mut report);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor_generation::domain::{ClassCatalog, ClassDescription};

    struct NoDashes;

    impl ValidationRule for NoDashes {
        fn name(&self) -> &'static str {
            "no-dashes"
        }

        fn check(
            &self,
            component: &Component,
            _context: &ValidationContext<'_>,
            report: &mut ValidationReport,
        ) {
            if component.name().contains('-') {
                report.error(component, "dashes are not allowed");
            }
        }
    }

    #[test]
    fn test_empty_validator_accepts_everything() {
        let catalog = ClassCatalog::from_descriptions(vec![ClassDescription::new("a.Impl").interface(true)]);
        let class = catalog.get("a.Impl").unwrap();
        let context = ValidationContext { catalog: &catalog, class };

        let report = ComponentValidator::new().validate(&Component::new("a.Impl"), &context);
        assert!(report.is_valid());
    }

    #[test]
    fn test_custom_rule_runs_after_standard_rules() {
        let catalog = ClassCatalog::from_descriptions(vec![ClassDescription::new("a.Impl")]);
        let class = catalog.get("a.Impl").unwrap();
        let context = ValidationContext { catalog: &catalog, class };
        let validator = ComponentValidator::standard().with_rule(NoDashes);

        assert_eq!(validator.rule_names().last(), Some(&"no-dashes"));

        let mut component = Component::new("a.Impl");
        component.set_name("my-component");
        let report = validator.validate(&component, &context);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("dashes"));
    }

    #[test]
    fn test_standard_validator_rejects_interface_implementation() {
        let catalog = ClassCatalog::from_descriptions(vec![ClassDescription::new("a.Api").interface(true)]);
        let class = catalog.get("a.Api").unwrap();
        let context = ValidationContext { catalog: &catalog, class };

        let report = ComponentValidator::standard().validate(&Component::new("a.Api"), &context);
        assert!(!report.is_valid());
    }
}
