//! Small shared helpers.

pub mod hashing;
pub mod paths;

pub use hashing::content_digest;
pub use paths::normalize_path;
