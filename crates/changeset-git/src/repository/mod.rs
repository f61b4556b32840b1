mod log;
mod tag;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner.workdir().ok_or_else(|| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        // Use dunce to get a path without the \\?\ prefix on Windows
        let root = dunce::simplified(root).to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the work tree. Relative inputs resolve against the
    /// current directory.
    pub(crate) fn to_relative_path(&self, path: &Path) -> PathBuf {
        let absolute;
        let path = if path.is_absolute() {
            path
        } else {
            match std::env::current_dir() {
                Ok(cwd) => {
                    absolute = cwd.join(path);
                    absolute.as_path()
                }
                Err(_) => return path.to_path_buf(),
            }
        };

        let normalized = dunce::simplified(path);
        if let Ok(relative) = normalized.strip_prefix(&self.root) {
            return relative.to_path_buf();
        }

        // Symlinked temp dirs (macOS /var -> /private/var) only match once both sides are resolved.
        let canonical_root = dunce::canonicalize(&self.root).ok();
        let canonical_path = dunce::canonicalize(path).ok();
        match (canonical_root, canonical_path) {
            (Some(root), Some(full)) => full
                .strip_prefix(&root)
                .map_or_else(|_| path.to_path_buf(), Path::to_path_buf),
            _ => path.to_path_buf(),
        }
    }

    pub(crate) fn resolve_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        // Release tags such as `@scope/pkg@1.0.0` trip revparse's `@` syntax, so
        // tags are looked up by reference name first.
        if let Ok(reference) = self.inner.find_reference(&format!("refs/tags/{refspec}")) {
            if let Ok(commit) = reference.peel_to_commit() {
                return Ok(commit);
            }
        }

        self.inner
            .revparse_single(refspec)
            .and_then(|object| object.peel_to_commit())
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn setup_test_repo() -> anyhow::Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = git2::Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test")?;
        config.set_str("user.email", "test@example.com")?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = repo.index()?.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;

        let repository = Repository::open(dir.path())?;
        Ok((dir, repository))
    }

    pub(crate) fn commit_file(
        repo: &Repository,
        relative_path: &str,
        content: &str,
        message: &str,
    ) -> anyhow::Result<git2::Oid> {
        let full_path = repo.root().join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)?;

        let mut index = repo.inner.index()?;
        index.add_path(Path::new(relative_path))?;
        index.write()?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = index.write_tree()?;
        let tree = repo.inner.find_tree(tree_id)?;
        let parent = repo.inner.head()?.peel_to_commit()?;
        let oid = repo
            .inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])?;
        Ok(oid)
    }

    #[test]
    fn open_repository() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let expected = dir.path().canonicalize()?;
        let actual = repo.root().canonicalize()?;
        assert_eq!(actual, expected);
        Ok(())
    }

    #[test]
    fn open_from_subdirectory_finds_root() -> anyhow::Result<()> {
        let (dir, _repo) = setup_test_repo()?;
        let nested = dir.path().join("packages").join("pkg");
        std::fs::create_dir_all(&nested)?;

        let repo = Repository::open(&nested)?;

        assert_eq!(repo.root().canonicalize()?, dir.path().canonicalize()?);
        Ok(())
    }

    #[test]
    fn open_nonexistent_repository() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let result = Repository::open(dir.path());
        assert!(matches!(result, Err(GitError::NotARepository { .. })));
    }

    #[test]
    fn relative_path_strips_root() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let absolute = repo.root().join("packages").join("pkg");

        assert_eq!(
            repo.to_relative_path(&absolute),
            PathBuf::from("packages").join("pkg")
        );
        Ok(())
    }

    #[test]
    fn relative_input_resolves_against_current_dir() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        assert_eq!(
            repo.to_relative_path(Path::new("packages/pkg")),
            std::env::current_dir()?.join("packages").join("pkg")
        );
        Ok(())
    }

    #[test]
    fn resolve_commit_unknown_ref_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let result = repo.resolve_commit("does-not-exist");
        assert!(matches!(result, Err(GitError::RefNotFound { .. })));
        Ok(())
    }
}
