//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;
use crate::source::Registry;

/// Options locating the project, its config and its registry.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project root directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Path to config file (depsync.toml or .depsync.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dependency registry file, relative to the project root
    #[arg(short = 'r', long, value_name = "FILE", env = "DEPSYNC_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Project name (defaults to the config value, then the root directory name)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub registry: Registry,
}

impl ProjectArgs {
    pub fn load(self) -> Result<Project> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", self.root.display()))?;
        if !root.is_dir() {
            anyhow::bail!("Path is not a directory: {}", root.display());
        }

        let config = load_config(&root, self.config.as_deref())?;
        let config = merge_cli_with_config(
            config,
            CliOverrides { registry: self.registry, project_name: self.name },
            &root,
        )?;

        let registry_path = root.join(&config.registry);
        let registry = Registry::load(&registry_path)?;
        tracing::debug!("Project {} with {} dependencies", config.project.name, registry.len());

        Ok(Project { root, config, registry })
    }
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}
