use std::path::Path;

use tracing::debug;

use crate::{CommitInfo, LogQuery, Result};

use super::Repository;

impl Repository {
    /// Walks `query.base..query.head` newest first (commit time, parents never
    /// before children). With a path, every commit whose tree at that path
    /// differs from at least one parent is kept, merges included; nothing is
    /// simplified away.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GitError::RefNotFound`] if either end of the range cannot be resolved.
    pub fn log(&self, query: &LogQuery) -> Result<Vec<CommitInfo>> {
        let head = self.resolve_commit(&query.head)?;
        let base = self.resolve_commit(&query.base)?;

        let mut walk = self.inner.revwalk()?;
        walk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        walk.push(head.id())?;
        walk.hide(base.id())?;

        let path = query.path.as_deref().map(|p| self.to_relative_path(p));

        let mut commits = Vec::new();
        for oid in walk {
            let commit = self.inner.find_commit(oid?)?;

            if let Some(path) = &path {
                if !touches_path(&commit, path)? {
                    continue;
                }
            }

            commits.push(CommitInfo {
                sha: commit.id().to_string(),
                message: commit.summary().unwrap_or_default().to_string(),
            });
        }

        debug!(
            base = %query.base,
            head = %query.head,
            path = ?path,
            count = commits.len(),
            "collected commit log"
        );

        Ok(commits)
    }
}

fn touches_path(commit: &git2::Commit<'_>, path: &Path) -> Result<bool> {
    let entry = entry_at(&commit.tree()?, path)?;

    if commit.parent_count() == 0 {
        return Ok(entry.is_some());
    }

    for parent in commit.parents() {
        if entry_at(&parent.tree()?, path)? != entry {
            return Ok(true);
        }
    }

    Ok(false)
}

fn entry_at(tree: &git2::Tree<'_>, path: &Path) -> Result<Option<git2::Oid>> {
    match tree.get_path(path) {
        Ok(entry) => Ok(Some(entry.id())),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
