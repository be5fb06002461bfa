use clap::Parser;
use scr_descriptor::application::dto::OutputFormat;

/// Compile component tags from a class model into service component descriptors
#[derive(Parser, Debug)]
#[command(name = "scr-descriptor")]
#[command(version)]
#[command(
    about = "Compile component tags from a class model into service component descriptors",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Class model document written by the source scanner (.json, .yml or .toml)
    #[arg(short = 'i', long = "class-model", value_name = "FILE")]
    pub class_model: Option<String>,

    /// Directory receiving the OSGI-INF tree (default: target/scr-plugin-generated)
    #[arg(short, long = "output-directory", value_name = "DIR")]
    pub output_directory: Option<String>,

    /// Output format: json or yaml
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// File name of the component descriptor below OSGI-INF/
    #[arg(long = "descriptor-name", value_name = "NAME")]
    pub descriptor_name: Option<String>,

    /// File name of the metatype document below OSGI-INF/metatype/ (empty disables it)
    #[arg(long = "metatype-name", value_name = "NAME")]
    pub metatype_name: Option<String>,

    /// Do not synthesize bind/unbind methods for field references
    #[arg(long = "no-accessors")]
    pub no_accessors: bool,

    /// Do not add the service.pid property to components
    #[arg(long = "no-pid")]
    pub no_pid: bool,

    /// Components inherit from superclasses only when their tag says so
    #[arg(long = "no-inherit")]
    pub no_inherit: bool,

    /// Exclude source classes matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "com.example.*Test" -e "*.internal.*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Abstract descriptor of an earlier build to inherit components from
    /// Can be specified multiple times
    #[arg(long = "inherited", value_name = "FILE")]
    pub inherited: Vec<String>,

    /// Path to a config file (default: scr-descriptor.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Write the successful components even when others failed
    #[arg(long = "write-on-failure")]
    pub write_on_failure: bool,

    /// Print per-class progress and details
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("scr-descriptor").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.path.is_none());
        assert!(args.class_model.is_none());
        assert!(args.format.is_none());
        assert!(!args.no_accessors);
        assert!(!args.no_pid);
        assert!(!args.no_inherit);
        assert!(!args.write_on_failure);
        assert!(args.exclude.is_empty());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "-p",
            "project",
            "-i",
            "classes.yml",
            "-o",
            "out",
            "-f",
            "yaml",
            "--descriptor-name",
            "components.yml",
            "--metatype-name",
            "",
            "--no-accessors",
            "--no-pid",
            "--no-inherit",
            "-e",
            "*Test",
            "-e",
            "*.internal.*",
            "--inherited",
            "lib/scrinfo.json",
            "--write-on-failure",
            "-v",
        ]);

        assert_eq!(args.path.as_deref(), Some("project"));
        assert_eq!(args.class_model.as_deref(), Some("classes.yml"));
        assert_eq!(args.output_directory.as_deref(), Some("out"));
        assert_eq!(args.format, Some(OutputFormat::Yaml));
        assert_eq!(args.descriptor_name.as_deref(), Some("components.yml"));
        assert_eq!(args.metatype_name.as_deref(), Some(""));
        assert!(args.no_accessors && args.no_pid && args.no_inherit);
        assert_eq!(args.exclude, vec!["*Test", "*.internal.*"]);
        assert_eq!(args.inherited, vec!["lib/scrinfo.json"]);
        assert!(args.write_on_failure);
        assert!(args.verbose);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["scr-descriptor", "--format", "xml"]);
        assert!(result.is_err());
    }
}
