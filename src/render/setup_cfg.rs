//! setup.cfg `[bdist_rpm]` section.

use super::{Document, Renderer};
use crate::domain::{Artifact, ArtifactKind, Config};
use crate::error::RenderError;
use crate::source::DependencySource;
use std::path::Path;

pub struct SetupCfgRenderer<'a> {
    config: &'a Config,
}

impl<'a> SetupCfgRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn file_header(&self) -> Vec<String> {
        let rpm = &self.config.rpm;
        let mut lines = vec![
            "[bdist_rpm]".to_string(),
            format!("release = {}", rpm.release),
            format!("packager = {}", self.config.project.maintainer),
        ];
        lines.extend(aligned_field("doc_files", &rpm.doc_files));
        lines.push(format!("build_requires = {}", rpm.build_requires));
        lines
    }
}

/// Multi-line `key = value` field, continuation values aligned under the
/// first one. An empty list yields no lines at all.
fn aligned_field(key: &str, values: &[String]) -> Vec<String> {
    let Some((first, rest)) = values.split_first() else {
        return Vec::new();
    };
    let indent = key.len() + " = ".len();

    let mut lines = Vec::with_capacity(values.len());
    lines.push(format!("{} = {}", key, first));
    for value in rest {
        lines.push(format!("{:indent$}{}", "", value, indent = indent));
    }
    lines
}

impl Renderer for SetupCfgRenderer<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SetupCfg
    }

    fn target_path(&self) -> &Path {
        &self.config.paths.setup_cfg
    }

    fn render(&self, source: &dyn DependencySource) -> Result<Artifact, RenderError> {
        let requires = source.rpm_requires()?;

        let mut doc = Document::new();
        doc.extend(self.file_header());
        doc.extend(aligned_field("requires", &requires));

        Ok(Artifact {
            kind: self.kind(),
            target_path: self.target_path().to_path_buf(),
            content: doc.into_content(),
        })
    }
}
