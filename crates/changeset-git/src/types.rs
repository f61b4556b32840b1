use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    /// Subject line of the commit message.
    pub message: String,
}

/// Commits reachable from `head` but not from `base`, optionally restricted to
/// commits touching `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub base: String,
    pub head: String,
    pub path: Option<PathBuf>,
}

impl LogQuery {
    #[must_use]
    pub fn range(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
            path: None,
        }
    }

    #[must_use]
    pub fn since(base: impl Into<String>) -> Self {
        Self::range(base, "HEAD")
    }

    #[must_use]
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
}
