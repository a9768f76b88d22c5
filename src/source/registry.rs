//! File-backed dependency registry.

use crate::domain::Dependency;
use crate::error::SourceError;
use crate::source::{check, CheckReport, DependencySource};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    dependency: Vec<Dependency>,
}

/// Ordered dependency list. Order is preserved exactly as declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    dependencies: Vec<Dependency>,
}

impl Registry {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }

    /// Load a registry from a `.toml`, `.yml` or `.yaml` file.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path)
            .map_err(|source| SourceError::Unavailable { path: path.to_path_buf(), source })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        let parsed: RegistryFile = match ext.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| malformed(path, e))?,
            "yaml" | "yml" => {
                // An empty YAML document deserializes to unit, not a map.
                if content.trim().is_empty() {
                    RegistryFile::default()
                } else {
                    serde_yaml::from_str(&content).map_err(|e| malformed(path, e))?
                }
            }
            other => {
                return Err(SourceError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension: other.to_string(),
                })
            }
        };

        tracing::debug!(
            "Loaded {} dependencies from {}",
            parsed.dependency.len(),
            path.display()
        );
        Ok(Self::new(parsed.dependency))
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> SourceError {
    SourceError::Malformed { path: PathBuf::from(path), reason: err.to_string() }
}

impl DependencySource for Registry {
    fn dpkg_depends(&self, exclude_version: bool) -> Result<Vec<String>, SourceError> {
        Ok(self
            .dependencies
            .iter()
            .map(|dep| match &dep.minimum_version {
                Some(version) if !exclude_version => {
                    format!("{} (>= {})", dep.dpkg_package(), version)
                }
                _ => dep.dpkg_package().to_string(),
            })
            .collect())
    }

    fn rpm_requires(&self) -> Result<Vec<String>, SourceError> {
        Ok(self
            .dependencies
            .iter()
            .map(|dep| match &dep.minimum_version {
                Some(version) => format!("{} >= {}", dep.rpm_package(), version),
                None => dep.rpm_package().to_string(),
            })
            .collect())
    }

    fn install_requires(&self) -> Result<Vec<String>, SourceError> {
        Ok(self
            .dependencies
            .iter()
            .map(|dep| match &dep.minimum_version {
                Some(version) => format!("{}>={}", dep.pypi_package(), version),
                None => dep.pypi_package().to_string(),
            })
            .collect())
    }

    fn check_report(&self) -> CheckReport {
        check::check_dependencies(&self.dependencies)
    }
}
