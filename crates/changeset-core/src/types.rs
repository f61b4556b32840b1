use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a change description: a package identifier and how its
/// version should move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRelease {
    pub name: String,
    #[serde(rename = "type", alias = "bump_type")]
    pub bump_type: BumpType,
}

impl PackageRelease {
    #[must_use]
    pub fn new(name: impl Into<String>, bump_type: BumpType) -> Self {
        Self {
            name: name.into(),
            bump_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changeset {
    #[serde(default)]
    pub summary: String,
    pub releases: Vec<PackageRelease>,
}

/// The fields of a `package.json` this tool cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
}

impl PackageManifest {
    /// Tag marking the commit this version was released from, `<name>@<version>`.
    #[must_use]
    pub fn release_tag(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_type_ordering_patch_is_smallest() {
        assert!(BumpType::Patch < BumpType::Minor);
        assert!(BumpType::Patch < BumpType::Major);
    }

    #[test]
    fn bump_type_ordering_major_is_largest() {
        assert!(BumpType::Major > BumpType::Patch);
        assert!(BumpType::Major > BumpType::Minor);
    }

    #[test]
    fn bump_type_displays_lowercase() {
        assert_eq!(BumpType::Patch.to_string(), "patch");
        assert_eq!(BumpType::Minor.to_string(), "minor");
        assert_eq!(BumpType::Major.to_string(), "major");
    }

    #[test]
    fn release_deserializes_type_field() {
        let release: PackageRelease =
            serde_json::from_str(r#"{"name": "@scope/pkg", "type": "minor"}"#)
                .expect("valid release");

        assert_eq!(release, PackageRelease::new("@scope/pkg", BumpType::Minor));
    }

    #[test]
    fn release_accepts_bump_type_alias() {
        let release: PackageRelease =
            serde_json::from_str(r#"{"name": "pkg", "bump_type": "major"}"#)
                .expect("valid release");

        assert_eq!(release.bump_type, BumpType::Major);
    }

    #[test]
    fn changeset_summary_defaults_to_empty() {
        let changeset: Changeset =
            serde_json::from_str(r#"{"releases": [{"name": "a", "type": "patch"}]}"#)
                .expect("valid changeset");

        assert!(changeset.summary.is_empty());
        assert_eq!(changeset.releases.len(), 1);
    }

    #[test]
    fn unknown_bump_type_is_rejected() {
        let result: Result<PackageRelease, _> =
            serde_json::from_str(r#"{"name": "a", "type": "huge"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn release_tag_joins_name_and_version() {
        let manifest = PackageManifest {
            name: "@scope/pkg".to_string(),
            version: "1.2.3".to_string(),
        };

        assert_eq!(manifest.release_tag(), "@scope/pkg@1.2.3");
    }
}
