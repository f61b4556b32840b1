use std::path::Path;

use async_trait::async_trait;

use crate::Result;

#[async_trait]
pub trait ChangesetWriter: Send + Sync {
    /// Writes `content` to `path`, creating parent directories and replacing
    /// any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    async fn write_changeset(&self, path: &Path, content: &str) -> Result<()>;
}
