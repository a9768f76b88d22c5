//! Library error types.

use std::path::PathBuf;

/// The dependency source could not produce a dependency list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Dependency registry not readable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dependency registry malformed: {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Unsupported registry extension '.{extension}' for file {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },
}

/// Rendering failed before anything was written.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Runtime token must not be empty")]
    EmptyToken,

    #[error("Invalid runtime token '{token}': {source}")]
    Token {
        token: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

/// A generation run was aborted.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed rendering {kind}: {source}")]
    Render {
        kind: crate::domain::ArtifactKind,
        #[source]
        source: RenderError,
    },

    #[error("Failed writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
