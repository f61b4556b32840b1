use std::path::Path;

use async_trait::async_trait;
use changeset_git::{CommitInfo, LogQuery};

use crate::Result;

#[async_trait]
pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or tags cannot be listed.
    async fn tag_names(&self, project_root: &Path) -> Result<Vec<String>>;

    /// Commits in `query`'s range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the range cannot be resolved.
    async fn log(&self, project_root: &Path, query: &LogQuery) -> Result<Vec<CommitInfo>>;
}
