use std::path::{Path, PathBuf};

use changeset_core::changeset_filename;
use changeset_manifest::PACKAGE_JSON;

use crate::Result;
use crate::config::{ProjectConfig, load_config};

/// A JavaScript monorepo: packages live in `<root>/<packagesDir>/<dir>` and
/// changesets in `<root>/<changesetDir>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the root `package.json` holds an invalid configuration.
    pub fn load(root: &Path) -> Result<Self> {
        Ok(Self::new(root, load_config(root)?))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    #[must_use]
    pub fn package_dir(&self, dir_name: &str) -> PathBuf {
        self.root.join(self.config.packages_dir()).join(dir_name)
    }

    #[must_use]
    pub fn manifest_path(&self, dir_name: &str) -> PathBuf {
        self.package_dir(dir_name).join(PACKAGE_JSON)
    }

    #[must_use]
    pub fn changeset_dir(&self) -> PathBuf {
        self.root.join(self.config.changeset_dir())
    }

    /// Location of the changeset file for a release identifier.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::Naming` if the identifier yields no filename.
    pub fn changeset_path(&self, release_name: &str) -> Result<PathBuf> {
        Ok(self.changeset_dir().join(changeset_filename(release_name)?))
    }
}

#[cfg(test)]
mod tests {
    use changeset_core::NamingError;

    use super::*;
    use crate::ProjectError;

    fn project() -> Project {
        Project::new("/repo", ProjectConfig::default())
    }

    #[test]
    fn manifest_path_uses_packages_dir() {
        assert_eq!(
            project().manifest_path("ui"),
            PathBuf::from("/repo/packages/ui/package.json")
        );
    }

    #[test]
    fn changeset_path_is_snake_cased() -> anyhow::Result<()> {
        assert_eq!(
            project().changeset_path("@scope/my-pkg")?,
            PathBuf::from("/repo/.changeset/scope_my_pkg.md")
        );
        Ok(())
    }

    #[test]
    fn custom_layout_is_honoured() -> anyhow::Result<()> {
        let config = ProjectConfig::default()
            .with_packages_dir("libs")
            .with_changeset_dir("changes");
        let project = Project::new("/repo", config);

        assert_eq!(project.package_dir("core"), PathBuf::from("/repo/libs/core"));
        assert_eq!(
            project.changeset_path("core")?,
            PathBuf::from("/repo/changes/core.md")
        );
        Ok(())
    }

    #[test]
    fn unnamable_release_is_a_naming_error() {
        let result = project().changeset_path("@@/--");

        assert!(matches!(
            result,
            Err(ProjectError::Naming(NamingError::EmptyFilename { .. }))
        ));
    }
}
