use crate::application::dto::{DescriptorRequest, DescriptorResponse};
use crate::descriptor_generation::domain::ClassCatalog;
use crate::descriptor_generation::services::{
    ClassFilter, CompilationOutcome, CompilationResult, DescriptorCompiler,
};
use crate::ports::outbound::{ClassModelReader, DescriptorReader, ProgressReporter};
use crate::shared::Result;

/// GenerateDescriptorsUseCase - Core use case for descriptor generation
///
/// This use case orchestrates one compiler run using generic dependency
/// injection for all infrastructure dependencies. Component-local failures do
/// not make `execute` fail; they are reported and returned in the response.
///
/// # Type Parameters
/// * `CR` - ClassModelReader implementation
/// * `DR` - DescriptorReader implementation (inherited abstract descriptors)
/// * `PR` - ProgressReporter implementation
pub struct GenerateDescriptorsUseCase<CR, DR, PR> {
    class_model_reader: CR,
    descriptor_reader: DR,
    progress_reporter: PR,
}

impl<CR, DR, PR> GenerateDescriptorsUseCase<CR, DR, PR>
where
    CR: ClassModelReader,
    DR: DescriptorReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateDescriptorsUseCase with injected dependencies
    pub fn new(class_model_reader: CR, descriptor_reader: DR, progress_reporter: PR) -> Self {
        Self {
            class_model_reader,
            descriptor_reader,
            progress_reporter,
        }
    }

    /// Executes the descriptor generation use case
    ///
    /// # Errors
    /// Returns an error if the class model or an inherited descriptor cannot
    /// be read, or if the exclusion patterns are invalid
    pub fn execute(&self, request: DescriptorRequest) -> Result<DescriptorResponse> {
        // Step 1: Load the class model
        let mut catalog = self.load_catalog(&request)?;

        // Step 2: Make earlier abstract descriptors available as ancestors
        self.register_inherited_descriptors(&mut catalog, &request)?;

        // Step 3: Apply exclusion filters
        self.apply_exclusion_filters(&mut catalog, &request)?;

        // Step 4: Compile
        let compiler = DescriptorCompiler::new(request.options);
        let result = compiler.compile_with_progress(&mut catalog, |index, total, class_name| {
            self.progress_reporter
                .report_progress(index + 1, total, Some(class_name));
        });

        // Step 5: Report diagnostics and build the response
        self.report_diagnostics(&result);
        self.report_summary(&result);

        Ok(DescriptorResponse::from(result))
    }

    fn load_catalog(&self, request: &DescriptorRequest) -> Result<ClassCatalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading class model from: {}",
            request.class_model_path.display()
        ));

        let catalog = self
            .class_model_reader
            .read_class_model(&request.class_model_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} class(es), {} from sources",
            catalog.len(),
            catalog.source_classes().count()
        ));
        Ok(catalog)
    }

    fn register_inherited_descriptors(
        &self,
        catalog: &mut ClassCatalog,
        request: &DescriptorRequest,
    ) -> Result<()> {
        for path in &request.inherited_descriptors {
            let components = self.descriptor_reader.read_components(path)?;
            let registered = catalog.register_inherited(&components);
            self.progress_reporter.report_debug(&format!(
                "Inherited {} of {} component(s) from {}",
                registered,
                components.len(),
                path.display()
            ));
        }
        Ok(())
    }

    fn apply_exclusion_filters(
        &self,
        catalog: &mut ClassCatalog,
        request: &DescriptorRequest,
    ) -> Result<()> {
        if request.exclude_patterns.is_empty() {
            return Ok(());
        }

        let filter = ClassFilter::new(request.exclude_patterns.clone())?;
        let excluded = filter.apply(catalog);
        if !excluded.is_empty() {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} class(es) based on filters",
                excluded.len()
            ));
            for name in &excluded {
                self.progress_reporter
                    .report_debug(&format!("Excluded {}", name));
            }
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "Exclude pattern '{}' did not match any class.",
                pattern
            ));
        }
        Ok(())
    }

    fn report_diagnostics(&self, result: &CompilationResult) {
        for diagnostic in &result.diagnostics {
            for warning in &diagnostic.warnings {
                self.progress_reporter.report_warning(warning);
            }
            for error in diagnostic.errors() {
                self.progress_reporter.report_error(&error);
            }
        }

        for stub in &result.generated_accessors {
            self.progress_reporter.report_debug(&format!(
                "Generated {} method {}({}) in {} for reference {}",
                stub.kind.as_str(),
                stub.method_name,
                stub.parameter_type,
                stub.class_name,
                stub.reference
            ));
        }
    }

    fn report_summary(&self, result: &CompilationResult) {
        match result.outcome() {
            CompilationOutcome::NoComponents => {
                self.progress_reporter
                    .report("ℹ️  No component declarations found.");
            }
            CompilationOutcome::Generated => {
                self.progress_reporter.report(&format!(
                    "✅ Compiled {} component(s), {} in the abstract descriptor",
                    result.components.len(),
                    result.abstract_components.len()
                ));
            }
            CompilationOutcome::Failed => {
                self.progress_reporter.report_error(&format!(
                    "{} component(s) failed assembly or validation",
                    result.failures().count()
                ));
            }
        }
    }
}
