use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to read formatter config '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse formatter config '{path}'")]
    ConfigJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse formatter config '{path}'")]
    ConfigYaml {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("failed to parse formatter config '{path}'")]
    ConfigToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot build formatter search path from '{start}'")]
    SearchPath {
        start: PathBuf,
        #[source]
        source: std::env::JoinPathsError,
    },

    #[error("failed to locate formatter from '{start}'")]
    Locate {
        start: PathBuf,
        #[source]
        source: which::Error,
    },

    #[error("failed to run formatter '{program}'")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter '{program}' exited with {status}: {stderr}")]
    ExternalFailed {
        program: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("formatter '{program}' produced non UTF-8 output")]
    ExternalOutput {
        program: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_failure_includes_stderr() {
        let err = FormatError::ExternalFailed {
            program: PathBuf::from("/repo/node_modules/.bin/prettier"),
            status: "exit status: 2".to_string(),
            stderr: "SyntaxError: bad input".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.contains("prettier"));
        assert!(msg.contains("exit status: 2"));
        assert!(msg.contains("SyntaxError"));
    }

    #[test]
    fn config_read_error_has_source_chain() {
        let err = FormatError::ConfigRead {
            path: PathBuf::from("/repo/.prettierrc"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains(".prettierrc"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
