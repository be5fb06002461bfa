mod validation_rules;

pub use validation_rules::{
    standard_rules, IdentityRule, ImmediateRule, ImplementationRule, PropertyRule, ReferenceRule,
    ServiceFactoryRule, ServiceRule, ValidationContext, ValidationReport, ValidationRule,
};
