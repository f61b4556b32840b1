use std::path::Path;

use async_trait::async_trait;

use crate::Result;
use crate::error::OperationError;
use crate::traits::ChangesetWriter;

pub struct FileSystemChangesetWriter;

impl FileSystemChangesetWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangesetWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChangesetWriter for FileSystemChangesetWriter {
    async fn write_changeset(&self, path: &Path, content: &str) -> Result<()> {
        let write_error = |source| OperationError::ChangesetFileWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(write_error)?;
        }
        tokio::fs::write(path, content).await.map_err(write_error)
    }
}
