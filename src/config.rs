//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mrsolve/mrsolve.toml`
//! 3. Local config: `<work_dir>/.mrsolve.toml`
//! 4. Environment variables: `MRSOLVE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::util::path::expand_env_vars;

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored tables and trees
    #[default]
    Text,
    /// Machine readable TOML
    Toml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Toml => f.write_str("toml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(ApplicationError::Config {
                message: format!("unknown output format: {other}"),
            }),
        }
    }
}

/// What `solve` prints besides the stage tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print reachable states per decision year
    pub show_state_space: bool,
    /// Print optimal decision chains
    pub show_chains: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_state_space: false,
            show_chains: true,
        }
    }
}

/// Raw output config for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputConfig {
    pub format: Option<OutputFormat>,
    pub show_state_space: Option<bool>,
    pub show_chains: Option<bool>,
}

impl OutputConfig {
    /// Overlay wins where it specifies a value.
    pub fn merge(&self, overlay: &RawOutputConfig) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            show_state_space: overlay.show_state_space.unwrap_or(self.show_state_space),
            show_chains: overlay.show_chains.unwrap_or(self.show_chains),
        }
    }
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub model_dir: Option<PathBuf>,
    #[serde(default)]
    pub output: RawOutputConfig,
}

/// Unified configuration for mrsolve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory searched for model files given by relative path (default: ~/.mrsolve/models)
    pub model_dir: PathBuf,
    /// Report output settings
    pub output: OutputConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
            output: OutputConfig::default(),
        }
    }
}

/// Get the default model directory (~/.mrsolve/models).
fn default_model_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".mrsolve").join("models"))
        .unwrap_or_else(|| PathBuf::from("~/.mrsolve/models"))
}

/// Get the XDG config directory for mrsolve.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mrsolve").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mrsolve.toml"))
}

/// Get the path to the local config file in a working directory.
pub fn local_config_path(work_dir: &Path) -> PathBuf {
    work_dir.join(".mrsolve.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.model_dir.to_string_lossy().as_ref());
        self.model_dir = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            model_dir: overlay
                .model_dir
                .clone()
                .unwrap_or_else(|| self.model_dir.clone()),
            output: self.output.merge(&overlay.output),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `work_dir` - Optional directory holding a local `.mrsolve.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/mrsolve/mrsolve.toml`
    /// 3. Local config: `<work_dir>/.mrsolve.toml`
    /// 4. Environment variables: `MRSOLVE_*` prefix
    pub fn load(work_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = work_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply MRSOLVE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("MRSOLVE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("model_dir") {
            settings.model_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("output.format") {
            settings.output.format = val.parse()?;
        }
        if let Ok(val) = config.get_bool("output.show_state_space") {
            settings.output.show_state_space = val;
        }
        if let Ok(val) = config.get_bool("output.show_chains") {
            settings.output.show_chains = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Serialize {
            what: "config",
            message: e.to_string(),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mrsolve configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mrsolve/mrsolve.toml  (your baseline)
#   Local:  ./.mrsolve.toml                 (per working directory)
#   Env:    MRSOLVE_* environment variables (explicit overrides,
#           e.g. MRSOLVE_OUTPUT__FORMAT=toml)

# Directory searched for model files given by relative path
# model_dir = "~/.mrsolve/models"

[output]
# Report format: "text" or "toml"
# format = "text"

# Print reachable states per decision year
# show_state_space = false

# Print optimal decision chains
# show_chains = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
