mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{CommitInfo, LogQuery};

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or tags cannot be listed.
pub fn tag_names(path: &Path) -> Result<Vec<String>> {
    Repository::open(path)?.tag_names()
}

/// # Errors
///
/// Returns an error if the path is not a git repository or the range cannot be resolved.
pub fn log(path: &Path, query: &LogQuery) -> Result<Vec<CommitInfo>> {
    Repository::open(path)?.log(query)
}
