use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DescriptorFormatter;

/// Factory for creating descriptor formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use scr_descriptor::application::dto::OutputFormat;
    /// use scr_descriptor::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Yaml);
    /// assert_eq!(formatter.file_extension(), "yml");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DescriptorFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Yaml => Box::new(YamlFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Writing JSON descriptors...",
            OutputFormat::Yaml => "📝 Writing YAML descriptors...",
        }
    }
}
