//! Dependency availability checks.

use crate::domain::Dependency;
use crate::source::version::{compare_versions, extract_version};
use console::style;
use std::cmp::Ordering;
use std::fmt;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Ok(String),
    /// No version command configured.
    Unchecked,
    /// The command ran but printed nothing resembling a version.
    Unknown,
    Missing(String),
    TooOld { found: String, minimum: String },
    TooNew { found: String, maximum: String },
}

impl CheckStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, CheckStatus::Ok(_) | CheckStatus::Unchecked | CheckStatus::Unknown)
    }
}

#[derive(Debug, Clone)]
pub struct CheckEntry {
    pub name: String,
    pub required: bool,
    pub status: CheckStatus,
}

impl fmt::Display for CheckEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.status.is_satisfied() {
            style(format!("{:<12}", "[OK]")).green()
        } else if self.required {
            style(format!("{:<12}", "[FAILURE]")).red()
        } else {
            style(format!("{:<12}", "[OPTIONAL]")).yellow()
        };
        let detail = match &self.status {
            CheckStatus::Ok(version) => format!("{} version: {}", self.name, version),
            CheckStatus::Unchecked => format!("{} (not checked)", self.name),
            CheckStatus::Unknown => format!("{} (version unknown)", self.name),
            CheckStatus::Missing(reason) => format!("missing: {} ({})", self.name, reason),
            CheckStatus::TooOld { found, minimum } => {
                format!(
                    "{} version: {} is too old, {} or later required",
                    self.name, found, minimum
                )
            }
            CheckStatus::TooNew { found, maximum } => {
                format!(
                    "{} version: {} is too recent, {} or earlier required",
                    self.name, found, maximum
                )
            }
        };
        write!(f, "{}{}", tag, detail)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn all_required_satisfied(&self) -> bool {
        self.entries.iter().all(|e| !e.required || e.status.is_satisfied())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.iter().filter(|e| e.required && !e.status.is_satisfied())
    }
}

/// Run each version command and classify the result.
pub fn check_dependencies(dependencies: &[Dependency]) -> CheckReport {
    let mut report = CheckReport::default();
    for dep in dependencies {
        let status = check_one(dep);
        match &status {
            CheckStatus::Unknown => {
                tracing::warn!("Unable to determine version of {}", dep.name)
            }
            s if !s.is_satisfied() => {
                tracing::debug!("Dependency {} not satisfied: {:?}", dep.name, s)
            }
            _ => {}
        }
        report.entries.push(CheckEntry { name: dep.name.clone(), required: dep.required, status });
    }
    report
}

fn check_one(dep: &Dependency) -> CheckStatus {
    let Some(argv) = dep.version_command.as_deref() else {
        return CheckStatus::Unchecked;
    };
    let Some((program, args)) = argv.split_first() else {
        return CheckStatus::Unchecked;
    };

    let program_path = match which::which(program) {
        Ok(path) => path,
        Err(e) => return CheckStatus::Missing(format!("{}: {}", program, e)),
    };

    let output = match Command::new(&program_path).args(args).output() {
        Ok(output) => output,
        Err(e) => return CheckStatus::Missing(format!("{}: {}", program, e)),
    };
    if !output.status.success() {
        return CheckStatus::Missing(format!("version command exited with {}", output.status));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    classify(dep, extract_version(&stdout))
}

fn classify(dep: &Dependency, found: Option<String>) -> CheckStatus {
    let Some(found) = found else {
        return CheckStatus::Unknown;
    };
    if let Some(minimum) = &dep.minimum_version {
        if compare_versions(&found, minimum) == Ordering::Less {
            return CheckStatus::TooOld { found, minimum: minimum.clone() };
        }
    }
    if let Some(maximum) = &dep.maximum_version {
        if compare_versions(&found, maximum) == Ordering::Greater {
            return CheckStatus::TooNew { found, maximum: maximum.clone() };
        }
    }
    CheckStatus::Ok(found)
}
