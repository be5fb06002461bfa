mod cli;
mod config;

use clap::Parser;
use cli::Args;
use config::Settings;
use scr_descriptor::adapters::outbound::console::StderrProgressReporter;
use scr_descriptor::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use scr_descriptor::application::dto::{DescriptorRequest, PublishRequest};
use scr_descriptor::application::factories::FormatterFactory;
use scr_descriptor::application::use_cases::{
    GenerateDescriptorsUseCase, PublishDescriptorsUseCase,
};
use scr_descriptor::ports::outbound::ProgressReporter;
use scr_descriptor::shared::error::{DescriptorError, ExitCode};
use scr_descriptor::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            // help and version output end up here as well
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        let code = e
            .downcast_ref::<DescriptorError>()
            .map(DescriptorError::exit_code)
            .unwrap_or(ExitCode::ApplicationError);
        process::exit(code.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load config file: explicit path, else auto-discovery
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(&project_path)?,
    };
    let settings = Settings::resolve(&args, config_file, &project_path)?;

    // Create adapters (Dependency Injection)
    let use_case = GenerateDescriptorsUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(settings.verbose),
    );

    let request = DescriptorRequest::new(settings.class_model.clone())
        .with_inherited_descriptors(settings.inherited_descriptors.clone())
        .with_exclude_patterns(settings.exclude.clone())
        .with_options(settings.options);

    let response = use_case.execute(request)?;

    let progress_reporter = StderrProgressReporter::new(settings.verbose);
    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let publisher = PublishDescriptorsUseCase::new(
        FormatterFactory::create(settings.format),
        FileSystemWriter::new(settings.output_directory.clone()),
        progress_reporter,
    );
    let publish_request = PublishRequest::new(
        settings.descriptor_name.clone(),
        settings.metatype_name.clone(),
    )
    .with_write_on_failure(settings.write_on_failure);

    let report = publisher.execute(&publish_request, &response)?;

    // The manifest entry goes to stdout for build scripts to pick up
    if let Some(header) = report.service_component_header {
        println!("Service-Component: {}", header);
    }

    if response.has_failures() {
        return Err(DescriptorError::CompilationFailed {
            failures: response.failures.len(),
        }
        .into());
    }

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DescriptorError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| DescriptorError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(DescriptorError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DescriptorError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
