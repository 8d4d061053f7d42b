//! Configuration file support for depth.
//!
//! Provides YAML-based defaults through `depth.config.yml` files,
//! including data structures, file loading, and validation.
//! Command-line flags always take precedence over these values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::security::read_regular_file;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "depth.config.yml";

/// Package index used when neither the command line nor a config file names one.
pub const DEFAULT_INDEX_FILENAME: &str = "depth.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Resolve dependencies of internal packages
    pub internal: Option<bool>,
    /// Follow test-only dependency edges
    pub test: Option<bool>,
    /// Maximum resolution depth, 0 for unbounded
    pub max_depth: Option<usize>,
    /// Emit JSON instead of the tree view
    pub json: Option<bool>,
    /// Path of the package index
    pub index: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// One warning per unknown field, sorted for stable output.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
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
    if let Some(ref index) = config.index {
        if index.as_os_str().is_empty() {
            bail!(
                "Invalid config: index must not be empty.\n\n\
                 💡 Hint: Remove the 'index' key or set it to the path of a package index (e.g., \"{}\").",
                DEFAULT_INDEX_FILENAME
            );
        }
    }
    Ok(())
}
