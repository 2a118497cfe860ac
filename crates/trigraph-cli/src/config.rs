//! Configuration management for the trigraph CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trigraph::prelude::{MergeStrategy, TrigraphError, TripleFormat};

pub const CONFIG_FILE: &str = "trigraph.toml";

/// trigraph project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub components: ComponentsConfig,
    #[serde(default)]
    pub prune: PruneConfig,
    #[serde(default)]
    pub centrality: CentralityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input layout selection. `Auto` decides by file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Auto,
    Json,
    Jsonl,
}

impl InputFormat {
    pub fn resolve(self, path: &Path) -> TripleFormat {
        match self {
            InputFormat::Auto => TripleFormat::from_path(path),
            InputFormat::Json => TripleFormat::Json,
            InputFormat::Jsonl => TripleFormat::Jsonl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub format: InputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentsConfig {
    #[serde(default)]
    pub strategy: MergeStrategy,
    #[serde(default = "default_show")]
    pub show: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PruneConfig {
    #[serde(default = "default_max_layers")]
    pub max_layers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityConfig {
    #[serde(default = "default_top")]
    pub top: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

// Default value functions
fn default_show() -> usize { 10 }
fn default_max_layers() -> usize { 1 }
fn default_top() -> usize { 10 }
fn default_pretty() -> bool { true }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::default(),
        }
    }
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            strategy: MergeStrategy::default(),
            show: default_show(),
        }
    }
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            max_layers: default_max_layers(),
        }
    }
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Load config from trigraph.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> std::result::Result<(), TrigraphError> {
        if self.components.show == 0 {
            return Err(TrigraphError::invalid_config("components.show", "must be at least 1"));
        }
        if self.prune.max_layers == 0 {
            return Err(TrigraphError::invalid_config("prune.max_layers", "must be at least 1"));
        }
        if self.centrality.top == 0 {
            return Err(TrigraphError::invalid_config("centrality.top", "must be at least 1"));
        }
        Ok(())
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find trigraph.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
