use crate::cli::output::OutputFormat;
use crate::convention::Convention;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".nameconv.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target for `convert` and expectation for `check` when no flag is given.
    pub default_convention: Convention,

    pub format: OutputFormat,

    pub color: bool,

    /// Identifiers matching any of these regexes are skipped by `check`.
    pub ignore_patterns: Vec<String>,

    /// Identifiers shorter than this (in characters) are skipped by `check`.
    pub min_length: usize,
}

fn default_min_length() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_convention: Convention::Snake,
            format: OutputFormat::Text,
            color: true,
            ignore_patterns: vec![
                r"^https?$".to_string(), // URL schemes
                r"^[0-9a-fA-F]{32,}$".to_string(), // Hashes
            ],
            min_length: default_min_length(),
        }
    }
}

/// One config file. Keys missing from the file stay `None` and leave the
/// lower layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub default_convention: Option<Convention>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub ignore_patterns: Option<Vec<String>>,
    pub min_length: Option<usize>,
}

/// Values given on the command line; `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub convention: Option<Convention>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub ignore_patterns: Vec<String>,
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global); an explicit file replaces it
        let local_path = overrides
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        } else if overrides.config_file.is_some() {
            anyhow::bail!("Config file not found: {}", local_path.display());
        }

        // Apply CLI overrides
        if let Some(convention) = overrides.convention {
            config.default_convention = convention;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.no_color {
            config.color = false;
        }
        if !overrides.ignore_patterns.is_empty() {
            config.ignore_patterns.extend(overrides.ignore_patterns);
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply every key the layer sets, whatever its value.
    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(convention) = layer.default_convention {
            self.default_convention = convention;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(patterns) = layer.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        if let Some(min_length) = layer.min_length {
            self.min_length = min_length;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "nameconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
