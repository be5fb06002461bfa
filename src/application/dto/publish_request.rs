use std::path::PathBuf;

/// PublishRequest - Names and policy for writing the generated documents
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// File name of the concrete descriptor below `OSGI-INF/`
    pub descriptor_name: String,
    /// File name of the metatype document below `OSGI-INF/metatype/`; empty disables it
    pub metatype_name: String,
    /// Publish the successful components even when others failed
    pub write_on_failure: bool,
}

impl PublishRequest {
    pub fn new(descriptor_name: impl Into<String>, metatype_name: impl Into<String>) -> Self {
        Self {
            descriptor_name: descriptor_name.into(),
            metatype_name: metatype_name.into(),
            write_on_failure: false,
        }
    }

    pub fn with_write_on_failure(mut self, write_on_failure: bool) -> Self {
        self.write_on_failure = write_on_failure;
        self
    }
}

/// PublishReport - What publishing did to the output directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub written: Vec<PathBuf>,
    /// Stale documents removed because their collection was empty
    pub removed: Vec<PathBuf>,
    /// `Service-Component` manifest entry, set when the concrete descriptor was written
    pub service_component_header: Option<String>,
    /// Set when failures suppressed publishing entirely
    pub suppressed: bool,
}
