//! CLI overrides on top of the loaded config file

use crate::domain::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Values given on the command line. `None` leaves the file/default value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub registry: Option<PathBuf>,
    pub project_name: Option<String>,
}

/// Apply CLI overrides and fill in values derived from the project root.
pub fn merge_cli_with_config(
    mut config: Config,
    overrides: CliOverrides,
    project_root: &Path,
) -> Result<Config> {
    if let Some(registry) = overrides.registry {
        config.registry = registry;
    }
    if let Some(name) = overrides.project_name {
        config.project.name = name;
    }

    if config.project.name.trim().is_empty() {
        let dir_name = project_root.file_name().and_then(|n| n.to_str()).unwrap_or("");
        config.project.name = dir_name.to_string();
    }
    if config.project.name.is_empty() {
        anyhow::bail!("Project name is empty; set [project] name in the config file");
    }
    for field in blank_project_fields(&config) {
        tracing::warn!("[project] {} is empty; generated files will carry a blank value", field);
    }

    let runtime = &config.runtime;
    if runtime.primary.token.is_empty() || runtime.secondary.token.is_empty() {
        anyhow::bail!("Runtime tokens must not be empty");
    }
    if runtime.primary.token == runtime.secondary.token {
        tracing::warn!(
            "Primary and secondary runtime share the token '{}'; both package blocks will be identical",
            runtime.primary.token
        );
    }

    Ok(config)
}

/// Project metadata fields rendered verbatim that are still blank.
fn blank_project_fields(config: &Config) -> Vec<&'static str> {
    let project = &config.project;
    [
        ("maintainer", &project.maintainer),
        ("homepage", &project.homepage),
        ("summary", &project.summary),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}
