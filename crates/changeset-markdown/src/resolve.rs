use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::Result;
use crate::bundled::MarkdownFormatter;
use crate::error::FormatError;
use crate::external::ExternalFormatter;
use crate::options::FormatOptions;

pub const FORMATTER_BINARY: &str = "prettier";

const NODE_MODULES_BIN: [&str; 2] = ["node_modules", ".bin"];

/// Result of searching a project for a locally installed formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    Found(PathBuf),
    NotFound,
}

/// `start` made absolute, so that ancestor walks reach the real parents.
pub(crate) fn search_root(start: &Path) -> PathBuf {
    std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf())
}

/// Searches `node_modules/.bin` of `start` and each of its ancestors, nearest
/// first. Only project installs count; a formatter on `PATH` is ignored.
///
/// # Errors
///
/// Returns an error if the search path cannot be built or the lookup fails
/// for a reason other than the binary being absent.
pub fn locate_formatter(start: &Path) -> Result<Located> {
    let dirs: Vec<PathBuf> = search_root(start)
        .ancestors()
        .map(|dir| NODE_MODULES_BIN.iter().fold(dir.to_path_buf(), |p, s| p.join(s)))
        .filter(|dir| dir.is_dir())
        .collect();

    if dirs.is_empty() {
        return Ok(Located::NotFound);
    }

    let search_path: OsString =
        std::env::join_paths(&dirs).map_err(|source| FormatError::SearchPath {
            start: start.to_path_buf(),
            source,
        })?;

    match which::which_in(FORMATTER_BINARY, Some(search_path), start) {
        Ok(path) => Ok(Located::Found(path)),
        Err(which::Error::CannotFindBinaryPath) => Ok(Located::NotFound),
        Err(source) => Err(FormatError::Locate {
            start: start.to_path_buf(),
            source,
        }),
    }
}

/// The formatter a changeset is piped through.
#[derive(Debug, Clone)]
pub enum ResolvedFormatter {
    Local(ExternalFormatter),
    Bundled(MarkdownFormatter),
}

impl ResolvedFormatter {
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Local(external) => external.program().display().to_string(),
            Self::Bundled(_) => "bundled".to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the external formatter fails.
    pub async fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        match self {
            Self::Local(external) => external.format(source, options).await,
            Self::Bundled(bundled) => bundled.format(source, options).await,
        }
    }
}

/// Picks the project's own formatter when one is installed, otherwise the
/// bundled one.
///
/// # Errors
///
/// Returns an error if locating the formatter fails.
pub fn resolve_formatter(start: &Path) -> Result<ResolvedFormatter> {
    match locate_formatter(start)? {
        Located::Found(program) => {
            info!(program = %program.display(), "using project formatter");
            Ok(ResolvedFormatter::Local(ExternalFormatter::new(
                program, start,
            )))
        }
        Located::NotFound => {
            debug!(start = %start.display(), "no project formatter, using bundled formatter");
            Ok(ResolvedFormatter::Bundled(MarkdownFormatter))
        }
    }
}
