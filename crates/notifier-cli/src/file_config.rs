//! TOML configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use notifier_render::RenderConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlackFileConfig {
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotifierFileConfig {
    pub slack: SlackFileConfig,
    #[serde(flatten)]
    pub render: RenderConfig,
}

/// Loads `path`, or returns defaults when no path was given.
pub fn load_file_config(path: Option<&Path>) -> Result<NotifierFileConfig> {
    let Some(path) = path else {
        return Ok(NotifierFileConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}
