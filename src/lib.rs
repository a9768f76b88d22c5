//! depsync: generate packaging and CI configuration from one dependency registry
//!
//! A single ordered dependency list feeds four derived files: a Debian
//! control file, a `requirements.txt` pin list, the `[bdist_rpm]` section of
//! `setup.cfg` and a CI bootstrap script. Each run overwrites them wholesale.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generate;
pub mod render;
pub mod source;
pub mod utils;

pub use domain::{Artifact, ArtifactKind, Config, Dependency, RuntimeVariant};
pub use error::{GenerateError, RenderError, SourceError};
pub use generate::{GeneratedArtifact, Generator};
pub use source::{DependencySource, Registry};
