//! Configuration file support for scr-descriptor.
//!
//! Provides YAML-based configuration through `scr-descriptor.config.yml` files,
//! and merges it with the command line into the settings of one run.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Args;
use scr_descriptor::application::dto::OutputFormat;
use scr_descriptor::descriptor_generation::services::AssemblyOptions;
use scr_descriptor::shared::error::DescriptorError;
use scr_descriptor::shared::Result;

pub const CONFIG_FILENAME: &str = "scr-descriptor.config.yml";

const DEFAULT_CLASS_MODEL: &str = "classes.json";
const DEFAULT_OUTPUT_DIRECTORY: &str = "target/scr-plugin-generated";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub class_model: Option<String>,
    pub output_directory: Option<String>,
    pub format: Option<String>,
    pub descriptor_name: Option<String>,
    pub metatype_name: Option<String>,
    pub generate_accessors: Option<bool>,
    pub create_pid: Option<bool>,
    pub inherit_default: Option<bool>,
    pub exclude: Option<Vec<String>>,
    pub inherited_descriptors: Option<Vec<String>>,
    pub write_on_failure: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|message| DescriptorError::ConfigurationError {
            message,
            hint: "Use 'format: json' or 'format: yaml'".to_string(),
        })?;
    }
    if let Some(patterns) = &config.exclude {
        if let Some(index) = patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(DescriptorError::ConfigurationError {
                message: format!("exclude[{}] must not be empty", index),
                hint: "Remove the empty entry or give it a class name pattern".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Settings of one run after merging CLI > config file > defaults
#[derive(Debug, Clone)]
pub struct Settings {
    pub class_model: PathBuf,
    pub output_directory: PathBuf,
    pub format: OutputFormat,
    pub descriptor_name: String,
    pub metatype_name: String,
    pub options: AssemblyOptions,
    pub exclude: Vec<String>,
    pub inherited_descriptors: Vec<PathBuf>,
    pub write_on_failure: bool,
    pub verbose: bool,
}

impl Settings {
    /// Merges the command line over the config file; relative paths are taken
    /// relative to the project directory
    pub fn resolve(args: &Args, config: Option<ConfigFile>, project_dir: &Path) -> Result<Self> {
        let config = config.unwrap_or_default();
        let in_project = |value: &str| project_dir.join(value);

        let format = match (args.format, &config.format) {
            (Some(format), _) => format,
            (None, Some(format)) => {
                OutputFormat::from_str(format).map_err(|message| {
                    DescriptorError::ConfigurationError {
                        message,
                        hint: "Use 'format: json' or 'format: yaml'".to_string(),
                    }
                })?
            }
            (None, None) => OutputFormat::default(),
        };

        let class_model = args
            .class_model
            .as_deref()
            .or(config.class_model.as_deref())
            .unwrap_or(DEFAULT_CLASS_MODEL);
        let output_directory = args
            .output_directory
            .as_deref()
            .or(config.output_directory.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_DIRECTORY);

        let descriptor_name = args
            .descriptor_name
            .clone()
            .or(config.descriptor_name)
            .unwrap_or_else(|| format.default_descriptor_name());
        let metatype_name = args
            .metatype_name
            .clone()
            .or(config.metatype_name)
            .unwrap_or_else(|| format.default_metatype_name());

        let defaults = AssemblyOptions::default();
        let options = AssemblyOptions {
            generate_accessors: !args.no_accessors
                && config.generate_accessors.unwrap_or(defaults.generate_accessors),
            create_pid: !args.no_pid && config.create_pid.unwrap_or(defaults.create_pid),
            inherit_default: !args.no_inherit
                && config.inherit_default.unwrap_or(defaults.inherit_default),
        };

        let exclude = if args.exclude.is_empty() {
            config.exclude.unwrap_or_default()
        } else {
            args.exclude.clone()
        };
        let inherited = if args.inherited.is_empty() {
            config.inherited_descriptors.unwrap_or_default()
        } else {
            args.inherited.clone()
        };

        Ok(Self {
            class_model: in_project(class_model),
            output_directory: in_project(output_directory),
            format,
            descriptor_name,
            metatype_name,
            options,
            exclude,
            inherited_descriptors: inherited.iter().map(|p| in_project(p.as_str())).collect(),
            write_on_failure: args.write_on_failure || config.write_on_failure.unwrap_or(false),
            verbose: args.verbose,
        })
    }
}
