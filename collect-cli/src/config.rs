//! Output settings loaded from an optional TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// CLI configuration (TOML).
///
/// Missing fields fall back to [`CliConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Pretty-print the output array.
    pub pretty: bool,

    /// Spaces per indentation level when `pretty` is set.
    pub indent: usize,

    /// Sort `keys`/`values` output so repeated runs print identically.
    /// Values are ordered by their JSON text.
    pub sort_extracted: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            sort_extracted: true,
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 || self.indent > 8 {
            return Err(anyhow!("indent must be between 1 and 8"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// With no path, returns `CliConfig::default()`. A path that was given but
/// cannot be read is an error.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        debug!("no config given, using defaults");
        return Ok(CliConfig::default());
    };
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CliConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}
