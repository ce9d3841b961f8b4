//! Configuration management for cmdoc.
//!
//! Parses `cmdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [modules]
//! paths = ["modules", "${SHARED_HELP:-/usr/share/help}/*.yaml"]
//!
//! [output]
//! line_ending = "lf"
//! code_language = "powershell"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Every entry of `modules.paths` supports `${VAR}` and `${VAR:-default}`.
//! Relative module paths are resolved against the config file's directory.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use cmdoc_render::LineEnding;

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Extra module paths, loaded after the configured ones.
    pub modules: Vec<PathBuf>,
    /// Override output line ending.
    pub line_ending: Option<LineEnding>,
    /// Override syntax block fence language.
    pub code_language: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cmdoc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Module configuration (paths are raw strings from TOML).
    modules: ModulesConfigRaw,
    /// Output formatting configuration.
    pub output: OutputConfig,

    /// Module paths after expansion and resolution (set after loading).
    #[serde(skip)]
    pub modules_resolved: Vec<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw module configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModulesConfigRaw {
    paths: Vec<String>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Line ending for generated fragments and output lines.
    pub line_ending: LineEnding,
    /// Info string for the syntax code fence (empty for none).
    pub code_language: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`modules.paths`").
        field: String,
        /// Error message (e.g., "${`HELP_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cmdoc.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        self.modules_resolved
            .extend(settings.modules.iter().cloned());
        if let Some(line_ending) = settings.line_ending {
            self.output.line_ending = line_ending;
        }
        if let Some(language) = &settings.code_language {
            self.output.code_language.clone_from(language);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a module path is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.modules.paths.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "modules.paths[{index}] cannot be empty"
            )));
        }
        Ok(())
    }

    /// Expand environment variables in module paths and resolve them against
    /// the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        self.modules_resolved = self
            .modules
            .paths
            .iter()
            .map(|raw| expand::expand_env(raw, "modules.paths").map(|p| config_dir.join(p)))
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}
