/// Output format enumeration for descriptor documents
///
/// This enum represents the supported document formats. It belongs in the
/// application layer as both the CLI (inbound side) and formatters (outbound
/// adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// File extension of documents written in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yml",
        }
    }

    /// Descriptor file name used when none is configured
    pub fn default_descriptor_name(&self) -> String {
        format!("serviceComponents.{}", self.extension())
    }

    /// Metatype file name used when none is configured
    pub fn default_metatype_name(&self) -> String {
        format!("metatype.{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'yaml'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
