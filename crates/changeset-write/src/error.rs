use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("cannot resolve path '{}'", .path.display())]
    StartPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Operation(#[from] changeset_operations::OperationError),

    #[error("failed to read change description from '{}'", display_input(.path.as_deref()))]
    InputRead {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid change description in '{}'", display_input(.path.as_deref()))]
    InputParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid release format '{input}': expected '<package>:<bump>'")]
    InvalidPackageBumpFormat { input: String },

    #[error("invalid bump type '{input}': expected major, minor, or patch")]
    InvalidBumpType { input: String },

    #[error("no releases given; use --release or --input")]
    NoReleases,

    #[error("{failed} of {total} changeset(s) could not be written")]
    ReleasesFailed { failed: usize, total: usize },

    #[error("invalid log filter")]
    LogFilter(#[source] tracing_subscriber::filter::ParseError),

    #[error("failed to initialize logging")]
    LogInit(#[source] tracing_subscriber::util::TryInitError),
}

fn display_input(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}

pub type Result<T> = std::result::Result<T, CliError>;
