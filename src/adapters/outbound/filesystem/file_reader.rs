use super::class_model_document::ClassModelDocument;
use crate::adapters::outbound::formatters::ComponentsDocument;
use crate::descriptor_generation::domain::{ClassCatalog, Components};
use crate::ports::outbound::{ClassModelReader, DescriptorReader};
use crate::shared::error::DescriptorError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Document syntaxes recognized by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentSyntax {
    Json,
    Yaml,
    Toml,
}

impl DocumentSyntax {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// FileSystemReader adapter for reading documents from the file system
///
/// This adapter implements both ClassModelReader and DescriptorReader ports,
/// providing file system access for class model documents and the abstract
/// descriptors of earlier builds.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl ClassModelReader for FileSystemReader {
    fn read_class_model(&self, path: &Path) -> Result<ClassCatalog> {
        if !path.exists() {
            return Err(DescriptorError::ClassModelNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Class model \"{}\" does not exist.\n   \
                     Run the source scanner first, or specify the correct file with the --class-model option.",
                    path.display()
                ),
            }
            .into());
        }

        let content =
            self.safe_read_file(path, "class model")
                .map_err(|e| DescriptorError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })?;

        let parse_error = |details: String| DescriptorError::ClassModelParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: ClassModelDocument = match DocumentSyntax::from_path(path) {
            Some(DocumentSyntax::Json) => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            Some(DocumentSyntax::Yaml) => {
                serde_yaml_ng::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            Some(DocumentSyntax::Toml) => {
                toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            None => {
                return Err(parse_error(
                    "unsupported file extension (expected .json, .yml, .yaml or .toml)".to_string(),
                )
                .into())
            }
        };

        Ok(document.into_catalog())
    }
}

impl DescriptorReader for FileSystemReader {
    fn read_components(&self, path: &Path) -> Result<Components> {
        let content = self
            .safe_read_file(path, "inherited descriptor")
            .map_err(|e| DescriptorError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let parse_error = |details: String| DescriptorError::DescriptorParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: ComponentsDocument = match DocumentSyntax::from_path(path) {
            Some(DocumentSyntax::Json) => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            Some(DocumentSyntax::Yaml) => {
                serde_yaml_ng::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            _ => {
                return Err(parse_error(
                    "unsupported file extension (expected .json, .yml or .yaml)".to_string(),
                )
                .into())
            }
        };

        Ok(document.into_components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::JsonFormatter;
    use crate::descriptor_generation::domain::Component;
    use crate::ports::outbound::DescriptorFormatter;
    use tempfile::TempDir;

    #[test]
    fn test_read_class_model_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("classes.json");
        fs::write(&path, r#"{"classes": [{"name": "a.Impl"}]}"#).unwrap();

        let catalog = FileSystemReader::new().read_class_model(&path).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("a.Impl").is_some());
    }

    #[test]
    fn test_read_class_model_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("classes.yml");
        fs::write(
            &path,
            "classes:\n  - name: a.Impl\n    tags:\n      - name: scr.component\n",
        )
        .unwrap();

        let catalog = FileSystemReader::new().read_class_model(&path).unwrap();
        assert_eq!(catalog.source_classes().count(), 1);
    }

    #[test]
    fn test_read_class_model_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = FileSystemReader::new().read_class_model(&path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Class model not found"));
        assert!(err_string.contains("--class-model"));
    }

    #[test]
    fn test_read_class_model_invalid_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("classes.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileSystemReader::new().read_class_model(&path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse class model"));
    }

    #[test]
    fn test_read_class_model_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("classes.txt");
        fs::write(&path, "classes: []").unwrap();

        let result = FileSystemReader::new().read_class_model(&path);
        assert!(format!("{}", result.unwrap_err()).contains("unsupported file extension"));
    }

    #[test]
    #[cfg(unix)]
    fn test_read_class_model_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, r#"{"classes": []}"#).unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_class_model(&link);
        assert!(format!("{}", result.unwrap_err()).contains("symbolic link"));
    }

    #[test]
    fn test_read_components_from_abstract_descriptor() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scrinfo.json");
        let mut component = Component::new("lib.Base");
        component.set_abstract(true);
        let components: Components = vec![component].into_iter().collect();
        let content = JsonFormatter::new()
            .format_components(&components, true)
            .unwrap();
        fs::write(&path, content).unwrap();

        let components = FileSystemReader::new().read_components(&path).unwrap();

        assert_eq!(components.len(), 1);
        assert!(components.components()[0].is_abstract());
    }

    #[test]
    fn test_read_components_invalid_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scrinfo.yml");
        fs::write(&path, "components: 42").unwrap();

        let result = FileSystemReader::new().read_components(&path);
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse descriptor"));
    }
}
