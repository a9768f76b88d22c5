//! Generation run: render every artifact and write it in a fixed order.

use crate::domain::{Artifact, ArtifactKind, Config};
use crate::error::GenerateError;
use crate::render::{
    ControlFileRenderer, InstallScriptRenderer, Renderer, RequirementsRenderer, SetupCfgRenderer,
};
use crate::source::DependencySource;
use crate::utils::{content_digest, normalize_path};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome for one artifact of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
    pub digest: String,
    pub written: bool,
}

/// Drives the renderers for one project root.
pub struct Generator<'a> {
    root: PathBuf,
    config: &'a Config,
    only: Option<BTreeSet<ArtifactKind>>,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    pub fn new(root: PathBuf, config: &'a Config) -> Self {
        Self { root, config, only: None, dry_run: false }
    }

    /// Restrict the run to these artifacts. Generation order is unaffected.
    pub fn only(mut self, kinds: impl IntoIterator<Item = ArtifactKind>) -> Self {
        self.only = Some(kinds.into_iter().collect());
        self
    }

    /// Render without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Renderers in generation order.
    pub fn renderers(&self) -> Vec<Box<dyn Renderer + 'a>> {
        let config = self.config;
        let all: Vec<Box<dyn Renderer + 'a>> = vec![
            Box::new(ControlFileRenderer::new(config)),
            Box::new(RequirementsRenderer::new(config)),
            Box::new(SetupCfgRenderer::new(config)),
            Box::new(InstallScriptRenderer::new(config)),
        ];
        all.into_iter()
            .filter(|r| self.only.as_ref().map_or(true, |only| only.contains(&r.kind())))
            .collect()
    }

    /// Render and write each artifact in turn.
    ///
    /// The first failure stops the run. Artifacts written before it are left
    /// in place.
    pub fn run(
        &self,
        source: &dyn DependencySource,
    ) -> Result<Vec<GeneratedArtifact>, GenerateError> {
        let mut results = Vec::new();
        for renderer in self.renderers() {
            let kind = renderer.kind();
            let artifact =
                renderer.render(source).map_err(|err| GenerateError::Render { kind, source: err })?;

            let path = self.root.join(&artifact.target_path);
            if self.dry_run {
                tracing::info!(
                    "Would write {} ({} bytes)",
                    normalize_path(&artifact.target_path),
                    artifact.content.len()
                );
            } else {
                write_artifact(&path, &artifact)?;
                tracing::info!("Wrote {}", normalize_path(&artifact.target_path));
            }

            results.push(GeneratedArtifact {
                kind,
                path,
                bytes: artifact.content.len(),
                digest: content_digest(&artifact.content),
                written: !self.dry_run,
            });
        }
        Ok(results)
    }
}

/// Overwrite `path` with the artifact content. Parent directories must exist.
pub fn write_artifact(path: &Path, artifact: &Artifact) -> Result<(), GenerateError> {
    tracing::debug!(
        "Writing {} bytes of {} to {}",
        artifact.content.len(),
        artifact.kind,
        path.display()
    );
    fs::write(path, artifact.content.as_bytes())
        .map_err(|source| GenerateError::Write { path: path.to_path_buf(), source })
}
