use std::path::PathBuf;

use changeset_core::NamingError;
use changeset_manifest::ManifestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("invalid changeset configuration in '{path}'")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{field}' in '{path}' must be a relative path, got '{value}'")]
    AbsoluteDir {
        path: PathBuf,
        field: &'static str,
        value: PathBuf,
    },
}
