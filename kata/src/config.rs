//! CLI settings stored in `kata.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config location, relative to the working directory.
pub const CONFIG_FILE: &str = "kata.toml";

/// How `kata run` and `kata isbn` print their results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare text, one result per line.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Kata configuration (TOML).
///
/// Every field is optional; missing fields take their defaults and unknown
/// keys are rejected so typos surface early.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct KataConfig {
    pub format: OutputFormat,
    pub isbn: IsbnConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct IsbnConfig {
    /// Print the reason next to every rejected candidate.
    pub explain: bool,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `KataConfig::default()`.
pub fn load_config(path: &Path) -> Result<KataConfig> {
    if !path.exists() {
        return Ok(KataConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &KataConfig) -> Result<()> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    let tmp_path = path.with_extension("toml.tmp");
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
