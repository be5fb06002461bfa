use crate::application::dto::{DescriptorResponse, PublishReport, PublishRequest};
use crate::descriptor_generation::domain::{Components, MetaData};
use crate::ports::outbound::{DescriptorFormatter, DescriptorStore, ProgressReporter};
use crate::shared::error::DescriptorError;
use crate::shared::Result;
use std::path::PathBuf;

/// Directory of all generated documents inside the output directory
const OSGI_INF: &str = "OSGI-INF";
const METATYPE_DIRECTORY: &str = "OSGI-INF/metatype";
const ABSTRACT_DESCRIPTOR_DIRECTORY: &str = "OSGI-INF/scr-plugin";
const ABSTRACT_DESCRIPTOR_STEM: &str = "scrinfo";

/// PublishDescriptorsUseCase - Writes the output collections of a run
///
/// Each of the three documents (concrete descriptor, metatype document,
/// abstract descriptor) is written when its collection has content and
/// removed otherwise, so a stale document never outlives its components.
///
/// # Type Parameters
/// * `F` - DescriptorFormatter implementation
/// * `S` - DescriptorStore implementation
/// * `PR` - ProgressReporter implementation
pub struct PublishDescriptorsUseCase<F, S, PR> {
    formatter: F,
    store: S,
    progress_reporter: PR,
}

impl<F, S, PR> PublishDescriptorsUseCase<F, S, PR>
where
    F: DescriptorFormatter,
    S: DescriptorStore,
    PR: ProgressReporter,
{
    pub fn new(formatter: F, store: S, progress_reporter: PR) -> Self {
        Self {
            formatter,
            store,
            progress_reporter,
        }
    }

    /// Publishes a generation response
    ///
    /// A response with failures is not published unless the request allows it.
    ///
    /// # Errors
    /// Returns a configuration error when components exist but no descriptor
    /// name is configured, or any formatting/storage error.
    pub fn execute(
        &self,
        request: &PublishRequest,
        response: &DescriptorResponse,
    ) -> Result<PublishReport> {
        let mut report = PublishReport::default();

        if response.has_failures() && !request.write_on_failure {
            self.progress_reporter.report_warning(
                "Descriptor generation had failures; no documents were written.",
            );
            report.suppressed = true;
            return Ok(report);
        }

        let descriptor_name = request.descriptor_name.trim();
        if descriptor_name.is_empty() && !response.components.is_empty() {
            return Err(DescriptorError::ConfigurationError {
                message: "Descriptor file name must not be empty".to_string(),
                hint: "Set descriptor_name in the config file or pass --descriptor-name"
                    .to_string(),
            }
            .into());
        }

        self.publish_components(descriptor_name, &response.components, &mut report)?;
        self.publish_metadata(request.metatype_name.trim(), &response.metadata, &mut report)?;
        self.publish_abstract_components(&response.abstract_components, &mut report)?;

        if !report.written.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "✅ Wrote {} document(s)",
                report.written.len()
            ));
        }
        Ok(report)
    }

    fn publish_components(
        &self,
        descriptor_name: &str,
        components: &Components,
        report: &mut PublishReport,
    ) -> Result<()> {
        if descriptor_name.is_empty() {
            return Ok(());
        }
        let path = PathBuf::from(OSGI_INF).join(descriptor_name);

        if components.is_empty() {
            return self.remove_stale(path, report);
        }

        let content = self.formatter.format_components(components, false)?;
        self.write(path, &content, report)?;
        report.service_component_header = Some(format!("{}/{}", OSGI_INF, descriptor_name));
        Ok(())
    }

    fn publish_metadata(
        &self,
        metatype_name: &str,
        metadata: &MetaData,
        report: &mut PublishReport,
    ) -> Result<()> {
        if metatype_name.is_empty() {
            if !metadata.is_empty() {
                self.progress_reporter
                    .report("ℹ️  Metatype file name is not set; the metatype document is not written.");
            }
            return Ok(());
        }
        let path = PathBuf::from(METATYPE_DIRECTORY).join(metatype_name);

        if metadata.is_empty() {
            return self.remove_stale(path, report);
        }

        let content = self.formatter.format_metadata(metadata)?;
        self.write(path, &content, report)
    }

    fn publish_abstract_components(
        &self,
        components: &Components,
        report: &mut PublishReport,
    ) -> Result<()> {
        let path = PathBuf::from(ABSTRACT_DESCRIPTOR_DIRECTORY).join(format!(
            "{}.{}",
            ABSTRACT_DESCRIPTOR_STEM,
            self.formatter.file_extension()
        ));

        if components.is_empty() {
            return self.remove_stale(path, report);
        }

        let content = self.formatter.format_components(components, true)?;
        self.write(path, &content, report)
    }

    fn write(&self, path: PathBuf, content: &str, report: &mut PublishReport) -> Result<()> {
        let written = self.store.store(&path, content)?;
        self.progress_reporter
            .report(&format!("📝 Generated {}", written.display()));
        report.written.push(written);
        Ok(())
    }

    fn remove_stale(&self, path: PathBuf, report: &mut PublishReport) -> Result<()> {
        if self.store.remove(&path)? {
            self.progress_reporter
                .report_debug(&format!("Removed stale {}", path.display()));
            report.removed.push(path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::JsonFormatter;
    use crate::descriptor_generation::domain::{Component, Designate, MetatypeEntry, Ocd};
    use crate::descriptor_generation::services::{ClassDiagnostics, CompilationOutcome};
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::path::Path;

    #[derive(Default)]
    struct MemoryStore {
        files: RefCell<BTreeMap<PathBuf, String>>,
    }

    impl DescriptorStore for &MemoryStore {
        fn store(&self, relative_path: &Path, content: &str) -> Result<PathBuf> {
            self.files
                .borrow_mut()
                .insert(relative_path.to_path_buf(), content.to_string());
            Ok(relative_path.to_path_buf())
        }

        fn remove(&self, relative_path: &Path) -> Result<bool> {
            Ok(self.files.borrow_mut().remove(relative_path).is_some())
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_debug(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_warning(&self, _message: &str) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn response(components: Vec<Component>, abstract_components: Vec<Component>) -> DescriptorResponse {
        let mut metadata = MetaData::new();
        for component in &components {
            metadata.add(MetatypeEntry {
                ocd: Ocd::for_component(component.name(), None, None),
                designate: Designate::for_component(component.name()),
            });
        }
        DescriptorResponse {
            components: components.into_iter().collect(),
            abstract_components: abstract_components.into_iter().collect(),
            metadata,
            failures: Vec::new(),
            generated_accessors: Vec::new(),
            outcome: CompilationOutcome::Generated,
        }
    }

    fn publish(
        store: &MemoryStore,
        request: &PublishRequest,
        response: &DescriptorResponse,
    ) -> Result<PublishReport> {
        PublishDescriptorsUseCase::new(JsonFormatter::new(), store, SilentReporter)
            .execute(request, response)
    }

    fn request() -> PublishRequest {
        PublishRequest::new("serviceComponents.json", "metatype.json")
    }

    #[test]
    fn test_writes_all_three_documents() {
        let store = MemoryStore::default();
        let response = response(vec![Component::new("a.Impl")], vec![Component::new("a.Impl")]);

        let report = publish(&store, &request(), &response).unwrap();

        let files = store.files.borrow();
        assert!(files.contains_key(Path::new("OSGI-INF/serviceComponents.json")));
        assert!(files.contains_key(Path::new("OSGI-INF/metatype/metatype.json")));
        assert!(files.contains_key(Path::new("OSGI-INF/scr-plugin/scrinfo.json")));
        assert_eq!(report.written.len(), 3);
        assert_eq!(
            report.service_component_header.as_deref(),
            Some("OSGI-INF/serviceComponents.json")
        );
    }

    #[test]
    fn test_empty_collections_remove_previous_output() {
        let store = MemoryStore::default();
        publish(
            &store,
            &request(),
            &response(vec![Component::new("a.Impl")], vec![Component::new("a.Impl")]),
        )
        .unwrap();

        let report = publish(&store, &request(), &response(vec![], vec![])).unwrap();

        assert!(store.files.borrow().is_empty());
        assert_eq!(report.removed.len(), 3);
        assert!(report.written.is_empty());
        assert_eq!(report.service_component_header, None);
    }

    #[test]
    fn test_abstract_only_run_writes_only_abstract_descriptor() {
        let mut base = Component::new("a.Base");
        base.set_abstract(true);
        let store = MemoryStore::default();

        let report = publish(&store, &request(), &response(vec![], vec![base])).unwrap();

        assert_eq!(report.written, vec![PathBuf::from("OSGI-INF/scr-plugin/scrinfo.json")]);
        assert_eq!(report.service_component_header, None);
    }

    #[test]
    fn test_empty_descriptor_name_with_components_is_a_configuration_error() {
        let store = MemoryStore::default();
        let request = PublishRequest::new("  ", "metatype.json");

        let error = publish(&store, &request, &response(vec![Component::new("a.Impl")], vec![]))
            .unwrap_err();

        let error = error.downcast_ref::<DescriptorError>().unwrap();
        assert!(matches!(error, DescriptorError::ConfigurationError { .. }));
        assert!(store.files.borrow().is_empty());
    }

    #[test]
    fn test_empty_descriptor_name_without_components_is_fine() {
        let store = MemoryStore::default();
        let request = PublishRequest::new("", "metatype.json");

        assert!(publish(&store, &request, &response(vec![], vec![])).is_ok());
    }

    #[test]
    fn test_empty_metatype_name_skips_metatype_document() {
        let store = MemoryStore::default();
        let request = PublishRequest::new("serviceComponents.json", "");

        let report = publish(&store, &request, &response(vec![Component::new("a.Impl")], vec![]))
            .unwrap();

        assert_eq!(report.written.len(), 1);
        assert!(!store
            .files
            .borrow()
            .keys()
            .any(|path| path.starts_with("OSGI-INF/metatype")));
    }

    fn failing_response() -> DescriptorResponse {
        let mut response = response(vec![Component::new("a.Impl")], vec![Component::new("a.Impl")]);
        response.outcome = CompilationOutcome::Failed;
        response.failures.push(ClassDiagnostics {
            class_name: "a.Broken".to_string(),
            component_name: None,
            disposition: None,
            warnings: Vec::new(),
            failure: None,
        });
        response
    }

    #[test]
    fn test_failures_suppress_publishing_by_default() {
        let store = MemoryStore::default();

        let report = publish(&store, &request(), &failing_response()).unwrap();

        assert!(report.suppressed);
        assert!(store.files.borrow().is_empty());
    }

    #[test]
    fn test_write_on_failure_publishes_successful_components() {
        let store = MemoryStore::default();
        let request = request().with_write_on_failure(true);

        let report = publish(&store, &request, &failing_response()).unwrap();

        assert!(!report.suppressed);
        assert_eq!(report.written.len(), 3);
    }
}
