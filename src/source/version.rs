//! Loose version comparison.
//!
//! Installed versions come from arbitrary command output (`2.5.3`, `20160418`,
//! `1.0~rc1`), so strict semver parsing is not an option.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static VERSION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:[._\-~+]?[0-9A-Za-z]+)*").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Part {
    Number(u64),
    Text(String),
}

fn parts(version: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    for segment in version.split(['.', '-', '_', '~', '+']) {
        if segment.is_empty() {
            continue;
        }
        // Split "1rc2" into 1, "rc", 2.
        let mut current = String::new();
        let mut numeric = None;
        for c in segment.chars() {
            let is_digit = c.is_ascii_digit();
            if numeric.is_some_and(|n| n != is_digit) {
                parts.push(to_part(&current));
                current.clear();
            }
            numeric = Some(is_digit);
            current.push(c);
        }
        if !current.is_empty() {
            parts.push(to_part(&current));
        }
    }
    parts
}

fn to_part(s: &str) -> Part {
    match s.parse::<u64>() {
        Ok(n) => Part::Number(n),
        Err(_) => Part::Text(s.to_ascii_lowercase()),
    }
}

/// Compare two version strings component-wise.
///
/// Numeric components compare numerically and sort before textual ones;
/// a missing trailing component sorts first (`1.0 < 1.0.1`).
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    parts(a).cmp(&parts(b))
}

/// Extract the first version-looking token from version command output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_TOKEN.find(output).map(|m| m.as_str().to_string())
}
