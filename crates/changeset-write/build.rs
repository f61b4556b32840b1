use std::process::Command;

use chrono::Utc;

/// Releases are tagged the way this tool expects packages to be tagged.
const RELEASE_TAG_PREFIX: &str = "changeset-write@";

struct HeadCommit {
    short_hash: String,
    tags: Vec<String>,
}

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/tags");

    let version = env!("CARGO_PKG_VERSION");
    let build_date = Utc::now().format("%Y%m%d").to_string();

    let version_string = match head_commit() {
        Some(head) if head.is_release_of(version) => version.to_owned(),
        Some(head) => format!("{version}+{}.{build_date}", head.short_hash),
        None => format!("{version}+unknown.{build_date}"),
    };

    println!("cargo:rustc-env=CHANGESET_WRITE_VERSION={version_string}");
}

impl HeadCommit {
    fn is_release_of(&self, version: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.strip_prefix(RELEASE_TAG_PREFIX) == Some(version))
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|out| out.trim().to_owned())
}

fn head_commit() -> Option<HeadCommit> {
    let short_hash = git(&["rev-parse", "--short", "HEAD"])?;
    let tags = git(&["tag", "--points-at", "HEAD"])
        .map(|out| out.lines().map(str::to_owned).collect())
        .unwrap_or_default();

    Some(HeadCommit { short_hash, tags })
}
