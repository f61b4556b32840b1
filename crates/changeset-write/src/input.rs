use std::io::Read;
use std::path::{Path, PathBuf};

use changeset_core::{BumpType, Changeset, PackageRelease};

use crate::error::{CliError, Result};

const STDIN_MARKER: &str = "-";

/// Builds the change description from an optional JSON document plus
/// command-line releases, which are appended after the document's.
pub(crate) fn build_changeset(
    input: Option<&Path>,
    summary: Option<String>,
    releases: &[String],
) -> Result<Changeset> {
    let mut changeset = match input {
        Some(path) if path == Path::new(STDIN_MARKER) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::InputRead { path: None, source })?;
            parse_changeset(&buffer, None)?
        }
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|source| CliError::InputRead {
                    path: Some(path.to_path_buf()),
                    source,
                })?;
            parse_changeset(&content, Some(path.to_path_buf()))?
        }
        None => Changeset::default(),
    };

    if let Some(summary) = summary {
        changeset.summary = summary;
    }
    for input in releases {
        changeset.releases.push(parse_release(input)?);
    }

    if changeset.releases.is_empty() {
        return Err(CliError::NoReleases);
    }
    Ok(changeset)
}

fn parse_changeset(content: &str, path: Option<PathBuf>) -> Result<Changeset> {
    serde_json::from_str(content).map_err(|source| CliError::InputParse { path, source })
}

/// Parses `<package>:<bump>`. The bump is taken after the last colon.
pub(crate) fn parse_release(input: &str) -> Result<PackageRelease> {
    let Some((name, bump_str)) = input.rsplit_once(':') else {
        return Err(CliError::InvalidPackageBumpFormat {
            input: input.to_string(),
        });
    };

    if name.is_empty() {
        return Err(CliError::InvalidPackageBumpFormat {
            input: input.to_string(),
        });
    }

    let bump_type = match bump_str.to_lowercase().as_str() {
        "major" => BumpType::Major,
        "minor" => BumpType::Minor,
        "patch" => BumpType::Patch,
        _ => {
            return Err(CliError::InvalidBumpType {
                input: bump_str.to_string(),
            });
        }
    };

    Ok(PackageRelease::new(name, bump_type))
}
