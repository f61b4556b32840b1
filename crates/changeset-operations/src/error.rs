use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Naming(#[from] changeset_core::NamingError),

    #[error(transparent)]
    Git(#[from] changeset_git::GitError),

    #[error(transparent)]
    Project(#[from] changeset_project::ProjectError),

    #[error(transparent)]
    Manifest(#[from] changeset_manifest::ManifestError),

    #[error(transparent)]
    Format(#[from] changeset_markdown::FormatError),

    #[error("failed to write changeset file '{path}'")]
    ChangesetFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("changeset for '{name}' would overwrite '{path}', which is written for '{kept}'")]
    FilenameCollision {
        name: String,
        path: PathBuf,
        kept: String,
    },

    #[error("background task failed")]
    TaskJoin(#[source] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, OperationError>;
