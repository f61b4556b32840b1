use std::path::Path;

use async_trait::async_trait;
use changeset_git::{CommitInfo, LogQuery};

use crate::Result;
use crate::error::OperationError;
use crate::traits::GitProvider;

/// git2 is blocking, so every query runs on the blocking pool and opens the
/// repository afresh.
pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> changeset_git::Result<T> + Send + 'static,
{
    let value = tokio::task::spawn_blocking(f)
        .await
        .map_err(OperationError::TaskJoin)??;
    Ok(value)
}

#[async_trait]
impl GitProvider for Git2Provider {
    async fn tag_names(&self, project_root: &Path) -> Result<Vec<String>> {
        let root = project_root.to_path_buf();
        blocking(move || changeset_git::tag_names(&root)).await
    }

    async fn log(&self, project_root: &Path, query: &LogQuery) -> Result<Vec<CommitInfo>> {
        let root = project_root.to_path_buf();
        let query = query.clone();
        blocking(move || changeset_git::log(&root, &query)).await
    }
}
