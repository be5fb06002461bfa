use super::accessor_generator::{AccessorGenerator, AccessorStub};
use super::ancestry_orderer::AncestryOrderer;
use super::component_assembler::{AssemblyOptions, ComponentAssembler};
use super::component_validator::ComponentValidator;
use super::output_collector::{CollectedOutput, Disposition, OutputCollector};
use crate::descriptor_generation::domain::tag;
use crate::descriptor_generation::domain::{AssemblyError, ClassCatalog, Components, MetaData};
use crate::descriptor_generation::policies::ValidationContext;

/// Tri-state result of one compiler run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationOutcome {
    /// At least one component was produced and none failed
    Generated,
    /// No component declarations were found (or none survived `ds=false`)
    NoComponents,
    /// At least one component failed assembly or validation
    Failed,
}

/// Everything reported for one component class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDiagnostics {
    pub class_name: String,
    /// Name of the assembled component, if assembly got that far
    pub component_name: Option<String>,
    /// Set for components that passed validation
    pub disposition: Option<Disposition>,
    pub warnings: Vec<String>,
    pub failure: Option<AssemblyError>,
}

impl ClassDiagnostics {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn errors(&self) -> Vec<String> {
        self.failure
            .as_ref()
            .map(AssemblyError::messages)
            .unwrap_or_default()
    }
}

/// The output collections of a run plus per-class diagnostics
#[derive(Debug, Clone, Default)]
pub struct CompilationResult {
    pub components: Components,
    pub abstract_components: Components,
    pub metadata: MetaData,
    /// One entry per processed class, in processing order
    pub diagnostics: Vec<ClassDiagnostics>,
    /// Accessor stubs registered on the class catalog during the run
    pub generated_accessors: Vec<AccessorStub>,
}

impl CompilationResult {
    pub fn has_failures(&self) -> bool {
        self.diagnostics.iter().any(ClassDiagnostics::is_failure)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ClassDiagnostics> {
        self.diagnostics.iter().filter(|d| d.is_failure())
    }

    pub fn outcome(&self) -> CompilationOutcome {
        if self.has_failures() {
            CompilationOutcome::Failed
        } else if self.components.is_empty() && self.abstract_components.is_empty() {
            CompilationOutcome::NoComponents
        } else {
            CompilationOutcome::Generated
        }
    }
}

/// DescriptorCompiler drives one full pass over a class catalog
///
/// Classes are processed in [`AncestryOrderer`] order. A failing component is
/// recorded and skipped; the remaining classes are still processed.
pub struct DescriptorCompiler {
    options: AssemblyOptions,
    validator: ComponentValidator,
}

impl DescriptorCompiler {
    pub fn new(options: AssemblyOptions) -> Self {
        Self {
            options,
            validator: ComponentValidator::standard(),
        }
    }

    pub fn with_validator(mut self, validator: ComponentValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn compile(&self, catalog: &mut ClassCatalog) -> CompilationResult {
        self.compile_with_progress(catalog, |_, _, _| {})
    }

    /// Like [`compile`](Self::compile), calling `on_class(index, total, class_name)`
    /// before each component class is processed
    pub fn compile_with_progress<F>(&self, catalog: &mut ClassCatalog, mut on_class: F) -> CompilationResult
    where
        F: FnMut(usize, usize, &str),
    {
        let order: Vec<String> = AncestryOrderer::order(catalog)
            .iter()
            .map(|class| class.name().to_string())
            .collect();

        let mut collector = OutputCollector::new();
        let mut diagnostics = Vec::with_capacity(order.len());
        let mut generated_accessors = Vec::new();

        for (index, class_name) in order.iter().enumerate() {
            on_class(index, order.len(), class_name.as_str());
            let diagnostic = self.process_class(
                catalog,
                class_name,
                &mut collector,
                &mut generated_accessors,
            );
            diagnostics.push(diagnostic);
        }

        let CollectedOutput {
            components,
            abstract_components,
            metadata,
        } = collector.finish();

        CompilationResult {
            components,
            abstract_components,
            metadata,
            diagnostics,
            generated_accessors,
        }
    }

    fn process_class(
        &self,
        catalog: &mut ClassCatalog,
        class_name: &str,
        collector: &mut OutputCollector,
        generated_accessors: &mut Vec<AccessorStub>,
    ) -> ClassDiagnostics {
        let mut diagnostic = ClassDiagnostics {
            class_name: class_name.to_string(),
            component_name: None,
            disposition: None,
            warnings: Vec::new(),
            failure: None,
        };

        let assembled = {
            let Some(class) = catalog.get(class_name) else {
                return diagnostic;
            };
            let Some(component_tag) = class.tag_by_name(tag::COMPONENT) else {
                return diagnostic;
            };
            ComponentAssembler::new(catalog, self.options).assemble(class, component_tag)
        };

        let assembled = match assembled {
            Ok(assembled) => assembled,
            Err(error) => {
                diagnostic.failure = Some(error);
                return diagnostic;
            }
        };
        diagnostic.component_name = Some(assembled.component.name().to_string());
        diagnostic.warnings = assembled.warnings;

        // stubs are registered before validation so accessor checks can see them
        if AccessorGenerator::apply(catalog, &assembled.accessors) > 0 {
            generated_accessors.extend(assembled.accessors);
        }

        let Some(class) = catalog.get(class_name) else {
            return diagnostic;
        };
        let context = ValidationContext {
            catalog: &*catalog,
            class,
        };
        let report = self.validator.validate(&assembled.component, &context);
        diagnostic.warnings.extend(report.warnings);

        if report.errors.is_empty() {
            diagnostic.disposition = Some(collector.collect(assembled.component, assembled.metatype));
        } else {
            diagnostic.failure = Some(AssemblyError::Validation {
                component: assembled.component.name().to_string(),
                errors: report.errors,
            });
        }
        diagnostic
    }
}
