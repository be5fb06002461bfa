use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Build scripts can tell a broken component declaration apart from a broken
/// invocation or environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Descriptors were generated, or there was nothing to generate
    Success = 0,
    /// At least one component failed assembly or validation
    CompilationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, class model, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CompilationFailed => write!(f, "Compilation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for descriptor generation.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Configuration error: {message}\n\n💡 Hint: {hint}")]
    ConfigurationError { message: String, hint: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Pass an existing project directory with --path")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Class model not found: {path}\n\n💡 Hint: {suggestion}")]
    ClassModelNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse class model: {path}\nDetails: {details}\n\n💡 Hint: Class models must be JSON, YAML or TOML documents with a top-level 'classes' list")]
    ClassModelParseError { path: PathBuf, details: String },

    #[error("Failed to parse descriptor: {path}\nDetails: {details}\n\n💡 Hint: Inherited descriptors must be abstract descriptors written by a previous run")]
    DescriptorParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output path: {path}\nReason: {reason}\n\n💡 Hint: Descriptor names must be relative file names without '..' segments")]
    InvalidOutputPath { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Descriptor compilation had {failures} failing component(s) (see log)")]
    CompilationFailed { failures: usize },
}

impl DescriptorError {
    /// Exit code the CLI reports for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DescriptorError::CompilationFailed { .. } => ExitCode::CompilationFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}
