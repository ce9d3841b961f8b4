//! Module file discovery and parsing.
//!
//! A module path may name a single file, a directory (every supported file
//! directly inside it) or a glob pattern. Each file is parsed by extension.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::record::HelpRecord;

/// File extensions recognized as module files.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["yaml", "yml", "json", "toml"];

/// Error loading module files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Module path does not exist.
    #[error("Module not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Module file could not be read.
    #[error("Failed to read module {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Module file content is malformed.
    #[error("Failed to parse module {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    /// File extension is not one of [`SUPPORTED_EXTENSIONS`].
    #[error("Unsupported module format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Glob pattern is invalid.
    #[error("Invalid module pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    /// Glob pattern matched no module files.
    #[error("Module pattern matched no files: {0}")]
    NoMatch(String),
}

/// Parsed content of one module file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModuleFile {
    /// Module name. Defaults to the file stem when absent.
    pub module: Option<String>,
    /// Commands declared by the module.
    pub commands: Vec<HelpRecord>,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl ModuleFile {
    /// Read and parse a module file.
    ///
    /// When the file does not name its module, the file stem is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, the file cannot be
    /// read, or its content does not parse.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let format =
            Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut module = parse(&content, format).map_err(|message| LoadError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        if module.module.is_none() {
            module.module = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(module)
    }

    /// Module name, or an empty string if unknown.
    #[must_use]
    pub fn name(&self) -> &str {
        self.module.as_deref().unwrap_or_default()
    }
}

fn parse(content: &str, format: Format) -> Result<ModuleFile, String> {
    if content.trim().is_empty() {
        return Ok(ModuleFile::default());
    }
    match format {
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Expand a module path into the module files it names.
///
/// Directories yield their supported files sorted by name. Glob patterns
/// yield every matching supported file in pattern order.
pub(crate) fn expand_module_path(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let raw = path.to_string_lossy();
    if raw.contains(['*', '?', '[']) {
        return expand_glob(&raw);
    }

    if path.is_dir() {
        let entries = fs::read_dir(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && is_supported(p))
            .collect();
        files.sort();
        if files.is_empty() {
            tracing::warn!(path = %path.display(), "Module directory contains no module files");
        }
        return Ok(files);
    }

    if path.exists() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(LoadError::NotFound(path.to_path_buf()))
    }
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    let paths = glob::glob(pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_owned(),
        source,
    })?;
    let files: Vec<PathBuf> = paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file() && is_supported(p))
        .collect();
    if files.is_empty() {
        return Err(LoadError::NoMatch(pattern.to_owned()));
    }
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_supported_extensions_all_parse() {
        for ext in SUPPORTED_EXTENSIONS {
            let path = PathBuf::from(format!("module.{ext}"));
            assert!(is_supported(&path), "{ext}");
            assert!(Format::from_path(&path).is_some(), "{ext}");
        }
        assert!(is_supported(Path::new("MODULE.YML")));
        assert!(!is_supported(Path::new("module.xml")));
        assert!(!is_supported(Path::new("module")));
    }

    #[test]
    fn test_parse_yaml_module() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "widgets.yaml",
            "module: WidgetTools\ncommands:\n  - name: Get-Widget\n    synopsis: Gets a widget.\n",
        );

        let module = ModuleFile::from_path(&path).unwrap();
        assert_eq!(module.name(), "WidgetTools");
        assert_eq!(module.commands.len(), 1);
        assert_eq!(module.commands[0].synopsis, "Gets a widget.");
    }

    #[test]
    fn test_parse_json_module_defaults_name_to_stem() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "Storage.json",
            r#"{"commands": [{"name": "Get-Disk", "parameters": [{"name": "Id", "type": "Int32", "description": "Disk id."}]}]}"#,
        );

        let module = ModuleFile::from_path(&path).unwrap();
        assert_eq!(module.name(), "Storage");
        assert_eq!(module.commands[0].parameters[0].type_name, "Int32");
    }

    #[test]
    fn test_parse_toml_module() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "net.toml",
            "module = \"Net\"\n\n[[commands]]\nname = \"Test-Port\"\nsyntax = \"Test-Port -Port <Int32>\"\n",
        );

        let module = ModuleFile::from_path(&path).unwrap();
        assert_eq!(module.name(), "Net");
        assert_eq!(module.commands[0].syntax, "Test-Port -Port <Int32>");
    }

    #[test]
    fn test_empty_file_is_empty_module() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "empty.yaml", "  \n");
        let module = ModuleFile::from_path(&path).unwrap();
        assert!(module.commands.is_empty());
        assert_eq!(module.name(), "empty");
    }

    #[test]
    fn test_malformed_module_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "bad.json", "{ not json");
        let err = ModuleFile::from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "help.txt", "text");
        let err = ModuleFile::from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_expand_directory_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.yaml", "");
        write(dir.path(), "a.json", "");
        write(dir.path(), "notes.md", "");

        let files = expand_module_path(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.yaml"]);
    }

    #[test]
    fn test_expand_glob() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "one.yaml", "");
        write(dir.path(), "two.yaml", "");
        write(dir.path(), "three.toml", "");

        let pattern = dir.path().join("*.yaml");
        let files = expand_module_path(&pattern).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_expand_glob_no_match() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.yaml");
        let err = expand_module_path(&pattern).unwrap_err();
        assert!(matches!(err, LoadError::NoMatch(_)));
    }

    #[test]
    fn test_expand_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = expand_module_path(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }
}
