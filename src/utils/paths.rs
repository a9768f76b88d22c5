//! Path normalization

use std::path::Path;

/// Forward-slash rendering of a relative path, for stable log and CLI output.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
