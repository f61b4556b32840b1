use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Result;
use crate::error::FormatError;
use crate::options::{EndOfLine, ProseWrap};
use crate::resolve::search_root;

const PACKAGE_JSON: &str = "package.json";
const PACKAGE_JSON_KEY: &str = "prettier";

/// Files searched in every directory, after the `prettier` key of `package.json`.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yaml",
    ".prettierrc.yml",
    ".prettierrc.toml",
];

/// Prettier-style formatter options. Keys without a dedicated field are kept
/// in file order so an external formatter still receives them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prose_wrap: Option<ProseWrap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_line: Option<EndOfLine>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy)]
enum Syntax {
    Json,
    Yaml,
    Toml,
}

fn syntax_for(file_name: &str) -> Syntax {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("json") => Syntax::Json,
        Some("toml") => Syntax::Toml,
        // A bare `.prettierrc` may hold JSON or YAML; YAML parses both.
        _ => Syntax::Yaml,
    }
}

/// Configuration in effect for `start`, or the default when no file exists.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be read or parsed.
pub fn resolve_config(start: &Path) -> Result<FormatterConfig> {
    Ok(find_config(start)?
        .map(|(_, config)| config)
        .unwrap_or_default())
}

/// Walks from `start` to the filesystem root and returns the first
/// configuration found together with the file it came from.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be read or parsed.
pub fn find_config(start: &Path) -> Result<Option<(PathBuf, FormatterConfig)>> {
    for dir in search_root(start).ancestors() {
        if let Some(config) = read_package_json_config(&dir.join(PACKAGE_JSON))? {
            return Ok(Some((dir.join(PACKAGE_JSON), config)));
        }

        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            let config = read_config_file(&path, syntax_for(name))?;
            debug!(path = %path.display(), "resolved formatter config");
            return Ok(Some((path, config)));
        }
    }

    debug!(start = %start.display(), "no formatter config found");
    Ok(None)
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| FormatError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_package_json_config(path: &Path) -> Result<Option<FormatterConfig>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = read_to_string(path)?;
    let mut manifest: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| FormatError::ConfigJson {
            path: path.to_path_buf(),
            source,
        })?;

    match manifest.get_mut(PACKAGE_JSON_KEY).map(serde_json::Value::take) {
        None => Ok(None),
        Some(value @ serde_json::Value::Object(_)) => {
            debug!(path = %path.display(), "resolved formatter config from package.json");
            serde_json::from_value(value)
                .map(Some)
                .map_err(|source| FormatError::ConfigJson {
                    path: path.to_path_buf(),
                    source,
                })
        }
        Some(other) => {
            // Shared configs are referenced by module name; there is no module
            // resolution here, so the reference is honoured as "defaults".
            warn!(
                path = %path.display(),
                reference = %other,
                "shared formatter config references are not supported, using defaults"
            );
            Ok(Some(FormatterConfig::default()))
        }
    }
}

fn read_config_file(path: &Path, syntax: Syntax) -> Result<FormatterConfig> {
    let content = read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(FormatterConfig::default());
    }

    match syntax {
        Syntax::Json => serde_json::from_str(&content).map_err(|source| FormatError::ConfigJson {
            path: path.to_path_buf(),
            source,
        }),
        Syntax::Yaml => serde_yml::from_str(&content).map_err(|source| FormatError::ConfigYaml {
            path: path.to_path_buf(),
            source,
        }),
        Syntax::Toml => toml::from_str(&content).map_err(|source| FormatError::ConfigToml {
            path: path.to_path_buf(),
            source,
        }),
    }
}
