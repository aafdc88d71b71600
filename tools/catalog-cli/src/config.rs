//! CLI configuration.

use anyhow::{Context, Result};
use brand_catalog::bebe::DEFAULT_SOURCE_PATH;
use brand_catalog::patch::PatchOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Brand module location.
    #[serde(default)]
    pub source: SourceConfig,

    /// Patch behavior.
    #[serde(default)]
    pub patch: PatchConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Patch options from config alone.
    pub fn patch_options(&self) -> Result<PatchOptions> {
        Ok(PatchOptions {
            require_anchor: self.patch.require_anchor,
            updated_at: self
                .patch
                .updated_at
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
        })
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .with_context(|| format!("Invalid RFC 3339 timestamp: {}", text))
}

/// Brand module location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the brand module, relative to the working directory.
    #[serde(default = "default_source_path")]
    pub path: String,
}

fn default_source_path() -> String {
    DEFAULT_SOURCE_PATH.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

/// Patch behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Fail when the anchor entry is missing (default: true).
    #[serde(default = "default_true")]
    pub require_anchor: bool,

    /// Keep a `.bak` copy of the module before writing.
    #[serde(default)]
    pub backup: bool,

    /// Override for the updatedAt timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            require_anchor: true,
            backup: false,
            updated_at: None,
        }
    }
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Catalog patch configuration

[source]
path = "{path}"

[patch]
require_anchor = true
backup = false
# updated_at = "2025-01-05T00:30:00Z"
"#,
        path = DEFAULT_SOURCE_PATH
    )
}
