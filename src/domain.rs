//! Core data types shared by the registry, renderers and CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A required external package with optional version bounds.
///
/// Only `name` and `minimum_version` take part in rendering. The remaining
/// fields feed per-format package naming and the availability checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_version: Option<String>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpkg_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pypi_name: Option<String>,
    /// Command whose output reports the installed version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_command: Option<Vec<String>>,
}

fn default_required() -> bool {
    true
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimum_version: None,
            maximum_version: None,
            required: true,
            dpkg_name: None,
            rpm_name: None,
            pypi_name: None,
            version_command: None,
        }
    }

    pub fn minimum_version(mut self, version: impl Into<String>) -> Self {
        self.minimum_version = Some(version.into());
        self
    }

    pub fn maximum_version(mut self, version: impl Into<String>) -> Self {
        self.maximum_version = Some(version.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn dpkg_name(mut self, name: impl Into<String>) -> Self {
        self.dpkg_name = Some(name.into());
        self
    }

    pub fn rpm_name(mut self, name: impl Into<String>) -> Self {
        self.rpm_name = Some(name.into());
        self
    }

    pub fn pypi_name(mut self, name: impl Into<String>) -> Self {
        self.pypi_name = Some(name.into());
        self
    }

    pub fn version_command<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.version_command = Some(argv.into_iter().map(Into::into).collect());
        self
    }

    pub fn dpkg_package(&self) -> &str {
        self.dpkg_name.as_deref().unwrap_or(&self.name)
    }

    pub fn rpm_package(&self) -> &str {
        self.rpm_name.as_deref().unwrap_or(&self.name)
    }

    pub fn pypi_package(&self) -> &str {
        self.pypi_name.as_deref().unwrap_or(&self.name)
    }
}

/// The four generated files, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Control,
    Requirements,
    SetupCfg,
    InstallScript,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Control,
        ArtifactKind::Requirements,
        ArtifactKind::SetupCfg,
        ArtifactKind::InstallScript,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Control => "control",
            ArtifactKind::Requirements => "requirements",
            ArtifactKind::SetupCfg => "setup-cfg",
            ArtifactKind::InstallScript => "install-script",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "control" => Ok(ArtifactKind::Control),
            "requirements" => Ok(ArtifactKind::Requirements),
            "setup-cfg" | "setup.cfg" => Ok(ArtifactKind::SetupCfg),
            "install-script" | "install.sh" => Ok(ArtifactKind::InstallScript),
            other => Err(format!(
                "Unknown artifact '{}'. Valid: control, requirements, setup-cfg, install-script",
                other
            )),
        }
    }
}

/// A fully rendered document, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Destination relative to the project root.
    pub target_path: PathBuf,
    pub content: String,
}

/// One of the two parallel package targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeVariant {
    /// Package-name token, e.g. `python` in `python-construct`.
    pub token: String,
    /// Shell variable prefix used by the install script.
    pub label: String,
}

impl RuntimeVariant {
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self { token: token.into(), label: label.into() }
    }

    pub fn package_name(&self, project: &str) -> String {
        format!("{}-{}", self.token, project)
    }

    pub fn dependencies_variable(&self) -> String {
        format!("{}_DEPENDENCIES", self.label)
    }
}

/// Project configuration. Every field has a default so partial files work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry file, relative to the project root.
    pub registry: PathBuf,
    pub project: ProjectConfig,
    pub runtime: RuntimeConfig,
    pub dpkg: DpkgConfig,
    pub requirements: RequirementsConfig,
    pub rpm: RpmConfig,
    pub ci: CiConfig,
    pub paths: OutputPaths,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: PathBuf::from("dependencies.toml"),
            project: ProjectConfig::default(),
            runtime: RuntimeConfig::default(),
            dpkg: DpkgConfig::default(),
            requirements: RequirementsConfig::default(),
            rpm: RpmConfig::default(),
            ci: CiConfig::default(),
            paths: OutputPaths::default(),
        }
    }
}

impl Config {
    /// Build-time preset name passed to the CI tooling.
    pub fn ci_preset(&self) -> &str {
        self.ci.preset.as_deref().unwrap_or(&self.project.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub maintainer: String,
    pub homepage: String,
    pub summary: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub primary: RuntimeVariant,
    pub secondary: RuntimeVariant,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            primary: RuntimeVariant::new("python", "PYTHON2"),
            secondary: RuntimeVariant::new("python3", "PYTHON3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DpkgConfig {
    pub section: String,
    pub priority: String,
    pub build_depends: String,
    pub standards_version: String,
    pub extra_fields: Vec<String>,
    pub architecture: String,
    /// Placeholders resolved later by debhelper, appended to every `Depends:` line.
    pub substvars: Vec<String>,
}

impl Default for DpkgConfig {
    fn default() -> Self {
        Self {
            section: "python".to_string(),
            priority: "extra".to_string(),
            build_depends: "debhelper (>= 7), python-all (>= 2.7~), python-setuptools, \
                            python3-all (>= 3.4~), python3-setuptools"
                .to_string(),
            standards_version: "3.9.5".to_string(),
            extra_fields: vec![
                "X-Python-Version: >= 2.7".to_string(),
                "X-Python3-Version: >= 3.4".to_string(),
            ],
            architecture: "all".to_string(),
            substvars: vec!["${python:Depends}".to_string(), "${misc:Depends}".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsConfig {
    pub preamble: Vec<String>,
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self { preamble: vec!["pip >= 7.0.0".to_string(), "pytest".to_string()] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpmConfig {
    pub release: u32,
    pub doc_files: Vec<String>,
    pub build_requires: String,
}

impl Default for RpmConfig {
    fn default() -> Self {
        Self {
            release: 1,
            doc_files: ["ACKNOWLEDGEMENTS", "AUTHORS", "LICENSE", "README"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            build_requires: "python-setuptools".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    pub coverage_dependencies: Vec<String>,
    pub tools_repository: String,
    pub package_repository: String,
    pub preset: Option<String>,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            coverage_dependencies: ["python-coverage", "python-coveralls", "python-docopt"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tools_repository: "https://github.com/log2timeline/l2tdevtools.git".to_string(),
            package_repository: "ppa:gift/dev".to_string(),
            preset: None,
        }
    }
}

impl CiConfig {
    /// Checkout directory name of the tooling repository.
    pub fn tools_dir_name(&self) -> &str {
        let last = self.tools_repository.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        last.strip_suffix(".git").unwrap_or(last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub control: PathBuf,
    pub requirements: PathBuf,
    pub setup_cfg: PathBuf,
    pub install_script: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            control: ["config", "dpkg", "control"].iter().collect(),
            requirements: PathBuf::from("requirements.txt"),
            setup_cfg: PathBuf::from("setup.cfg"),
            install_script: ["config", "travis", "install.sh"].iter().collect(),
        }
    }
}

impl OutputPaths {
    pub fn for_kind(&self, kind: ArtifactKind) -> &PathBuf {
        match kind {
            ArtifactKind::Control => &self.control,
            ArtifactKind::Requirements => &self.requirements,
            ArtifactKind::SetupCfg => &self.setup_cfg,
            ArtifactKind::InstallScript => &self.install_script,
        }
    }
}
