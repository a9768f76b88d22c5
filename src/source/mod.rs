//! Dependency sources consumed by the renderers.
//!
//! Renderers never compute dependency facts themselves; they ask a
//! [`DependencySource`] for pre-rendered expressions in the form each target
//! format needs.

use crate::error::SourceError;

pub mod check;
pub mod registry;
pub mod version;

pub use check::{check_dependencies, CheckReport, CheckStatus};
pub use registry::Registry;

pub trait DependencySource {
    /// Debian `Depends:` expressions: `name (>= version)` or `name`.
    ///
    /// With `exclude_version` every entry is the bare package name.
    fn dpkg_depends(&self, exclude_version: bool) -> Result<Vec<String>, SourceError>;

    /// RPM `requires` expressions: `name >= version` or `name`.
    fn rpm_requires(&self) -> Result<Vec<String>, SourceError>;

    /// Requirement specifiers for a plain pin list: `name>=version` or `name`.
    fn install_requires(&self) -> Result<Vec<String>, SourceError>;

    /// Availability and version status of every dependency in this environment.
    fn check_report(&self) -> CheckReport;

    /// Whether every required dependency is available in this environment.
    fn check_dependencies(&self) -> bool {
        self.check_report().all_required_satisfied()
    }
}
