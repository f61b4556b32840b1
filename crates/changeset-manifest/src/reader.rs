use std::path::Path;

use changeset_core::PackageManifest;
use serde_json::Value;

use crate::Result;
use crate::error::ManifestError;

pub const PACKAGE_JSON: &str = "package.json";

fn parse_document(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn string_field(doc: &Value, field: &str, path: &Path) -> Result<String> {
    let value = doc.get(field).ok_or_else(|| ManifestError::MissingField {
        path: path.to_path_buf(),
        field: field.to_string(),
    })?;

    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: format!("{field} (as string)"),
        })
}

/// Extracts `name` and `version` from `package.json` content. `path` is only
/// used for error reporting.
///
/// # Errors
///
/// Returns `ManifestError::Parse` if the content is not JSON, or
/// `ManifestError::MissingField` if `name` or `version` is absent or not a string.
pub fn parse_manifest(content: &str, path: &Path) -> Result<PackageManifest> {
    let doc = parse_document(content, path)?;

    Ok(PackageManifest {
        name: string_field(&doc, "name", path)?,
        version: string_field(&doc, "version", path)?,
    })
}

/// Reads a package manifest without blocking the runtime.
///
/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read, otherwise the
/// errors of [`parse_manifest`].
pub async fn read_manifest(path: &Path) -> Result<PackageManifest> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_manifest(&content, path)
}

/// Reads a whole `package.json` as a JSON document.
///
/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read, or
/// `ManifestError::Parse` if it is not JSON.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content, path)
}
