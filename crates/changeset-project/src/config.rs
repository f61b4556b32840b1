use std::path::{Path, PathBuf};

use changeset_manifest::{PACKAGE_JSON, read_document};
use serde::Deserialize;
use tracing::debug;

use crate::error::ProjectError;
use crate::{DEFAULT_CHANGESET_DIR, DEFAULT_PACKAGES_DIR, Result};

/// Key of the root `package.json` holding the configuration.
pub const CONFIG_KEY: &str = "changeset";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    packages_dir: PathBuf,
    changeset_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            changeset_dir: PathBuf::from(DEFAULT_CHANGESET_DIR),
        }
    }
}

impl ProjectConfig {
    #[must_use]
    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }

    #[must_use]
    pub fn changeset_dir(&self) -> &Path {
        &self.changeset_dir
    }

    #[must_use]
    pub fn with_packages_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.packages_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_changeset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.changeset_dir = dir.into();
        self
    }

    fn validate(self, path: &Path) -> Result<Self> {
        for (field, value) in [
            ("packagesDir", &self.packages_dir),
            ("changesetDir", &self.changeset_dir),
        ] {
            if value.is_absolute() {
                return Err(ProjectError::AbsoluteDir {
                    path: path.to_path_buf(),
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(self)
    }
}

/// Builds the configuration from a parsed root `package.json`. A document
/// without the `changeset` key yields the defaults.
///
/// # Errors
///
/// Returns `ProjectError::Config` if the key holds something other than a
/// valid configuration object.
pub fn parse_config(document: &serde_json::Value, path: &Path) -> Result<ProjectConfig> {
    let Some(section) = document.get(CONFIG_KEY) else {
        return Ok(ProjectConfig::default());
    };

    let config = ProjectConfig::deserialize(section).map_err(|source| ProjectError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    config.validate(path)
}

/// Loads the configuration from `<root>/package.json`, falling back to the
/// defaults when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or holds an
/// invalid configuration.
pub fn load_config(root: &Path) -> Result<ProjectConfig> {
    let path = root.join(PACKAGE_JSON);

    let document = match read_document(&path) {
        Ok(document) => document,
        Err(err) if err.is_not_found() => {
            debug!(path = %path.display(), "no root manifest, using default configuration");
            return Ok(ProjectConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    let config = parse_config(&document, &path)?;
    debug!(
        packages_dir = %config.packages_dir.display(),
        changeset_dir = %config.changeset_dir.display(),
        "loaded project configuration"
    );
    Ok(config)
}
