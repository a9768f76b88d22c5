//! requirements.txt pin list.

use super::{assemble, Renderer};
use crate::domain::{Artifact, ArtifactKind, Config};
use crate::error::RenderError;
use crate::source::DependencySource;
use std::path::Path;

pub struct RequirementsRenderer<'a> {
    config: &'a Config,
}

impl<'a> RequirementsRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl Renderer for RequirementsRenderer<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Requirements
    }

    fn target_path(&self) -> &Path {
        &self.config.paths.requirements
    }

    fn render(&self, source: &dyn DependencySource) -> Result<Artifact, RenderError> {
        let body = source.install_requires()?;
        Ok(Artifact {
            kind: self.kind(),
            target_path: self.target_path().to_path_buf(),
            content: assemble(&self.config.requirements.preamble, &body, &[]),
        })
    }
}
