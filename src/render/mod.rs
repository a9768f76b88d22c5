//! Artifact rendering (dpkg control, requirements, setup.cfg, install script)

pub mod control;
pub mod document;
pub mod install_script;
pub mod requirements;
pub mod setup_cfg;
pub mod variant;

use crate::domain::{Artifact, ArtifactKind};
use crate::error::RenderError;
use crate::source::DependencySource;
use std::path::Path;

pub use control::ControlFileRenderer;
pub use document::{assemble, Document};
pub use install_script::InstallScriptRenderer;
pub use requirements::RequirementsRenderer;
pub use setup_cfg::SetupCfgRenderer;
pub use variant::VariantSubstitution;

/// Turns the current dependency set plus a fixed template into one artifact.
pub trait Renderer {
    fn kind(&self) -> ArtifactKind;

    /// Destination relative to the project root.
    fn target_path(&self) -> &Path;

    fn render(&self, source: &dyn DependencySource) -> Result<Artifact, RenderError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::{Config, Dependency};
    use crate::source::Registry;

    /// The `foo (>= 1.0)`, `bar` scenario.
    pub fn scenario() -> Registry {
        Registry::new(vec![Dependency::new("foo").minimum_version("1.0"), Dependency::new("bar")])
    }

    pub fn python_registry() -> Registry {
        Registry::new(vec![
            Dependency::new("construct")
                .minimum_version("2.5.2")
                .dpkg_name("python-construct")
                .rpm_name("python-construct"),
            Dependency::new("six").dpkg_name("python-six").rpm_name("python-six"),
        ])
    }

    pub fn dfwinreg_config() -> Config {
        let mut config = Config::default();
        config.project.name = "dfwinreg".to_string();
        config.project.maintainer =
            "Log2Timeline maintainers <log2timeline-maintainers@googlegroups.com>".to_string();
        config.project.homepage = "https://github.com/log2timeline/dfwinreg".to_string();
        config.project.summary = "Digital Forensics Windows Registry (dfWinReg).".to_string();
        config.project.description = vec![
            "dfWinReg, or Digital Forensics Windows Registry, provides read-only access to"
                .to_string(),
            "Windows Registry objects.".to_string(),
        ];
        config
    }
}
