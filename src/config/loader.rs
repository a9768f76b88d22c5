//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const NESTED_SECTION: &str = "depsync";

pub fn load_config(project_root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(project_root),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("No config file found in {}, using defaults", project_root.display());
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    // An explicit --config must parse; a discovered file that does not is
    // skipped with a warning.
    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Parse TOML config, supporting a nested [depsync] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(NESTED_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested depsync section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(NESTED_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(project_root: &Path) -> Option<std::path::PathBuf> {
    let candidates = [
        "depsync.toml",
        ".depsync.toml",
        "depsync.yml",
        ".depsync.yml",
        "depsync.yaml",
        ".depsync.yaml",
    ];

    for candidate in candidates {
        let path = project_root.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
