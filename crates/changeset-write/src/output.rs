use std::error::Error;
use std::io::{self, Write};

use changeset_operations::operations::{ReleaseOutcome, WriteOutput, WrittenChangeset};

fn describe(written: &WrittenChangeset) -> String {
    if written.previous_release {
        format!(
            "{} ({} commit(s) since {})",
            written.path.display(),
            written.commits,
            written.release_tag
        )
    } else {
        format!("{} (no release tag {})", written.path.display(), written.release_tag)
    }
}

/// `error:` line followed by one `caused by:` line per source.
pub(crate) fn write_error_chain(
    out: &mut impl Write,
    headline: &str,
    error: &dyn Error,
) -> io::Result<()> {
    writeln!(out, "error: {headline}")?;
    let mut source = Some(error);
    while let Some(cause) = source {
        writeln!(out, "caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}

/// Writes one line per written changeset to `out` and one error chain per
/// failed release to `err`.
pub(crate) fn report(
    output: &WriteOutput,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    for ReleaseOutcome { release, result } in &output.releases {
        match result {
            Ok(written) => writeln!(out, "wrote {}", describe(written))?,
            Err(error) => write_error_chain(
                err,
                &format!("changeset for '{}' was not written", release.name),
                error,
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use changeset_core::{BumpType, PackageRelease};
    use changeset_operations::OperationError;

    use super::*;

    fn output() -> WriteOutput {
        WriteOutput {
            id: "temp",
            releases: vec![
                ReleaseOutcome {
                    release: PackageRelease::new("@acme/ui", BumpType::Patch),
                    result: Ok(WrittenChangeset {
                        path: PathBuf::from(".changeset/acme_ui.md"),
                        release_tag: "@acme/ui@1.0.0".to_string(),
                        previous_release: true,
                        commits: 2,
                    }),
                },
                ReleaseOutcome {
                    release: PackageRelease::new("core", BumpType::Minor),
                    result: Ok(WrittenChangeset {
                        path: PathBuf::from(".changeset/core.md"),
                        release_tag: "core@0.1.0".to_string(),
                        previous_release: false,
                        commits: 0,
                    }),
                },
                ReleaseOutcome {
                    release: PackageRelease::new("ghost", BumpType::Patch),
                    result: Err(OperationError::ChangesetFileWrite {
                        path: PathBuf::from(".changeset/ghost.md"),
                        source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
                    }),
                },
            ],
        }
    }

    #[test]
    fn report_lists_written_files_and_failures() -> io::Result<()> {
        let mut out = Vec::new();
        let mut err = Vec::new();

        report(&output(), &mut out, &mut err)?;

        let out = String::from_utf8_lossy(&out);
        let err = String::from_utf8_lossy(&err);
        assert_eq!(
            out,
            "wrote .changeset/acme_ui.md (2 commit(s) since @acme/ui@1.0.0)\n\
             wrote .changeset/core.md (no release tag core@0.1.0)\n"
        );
        assert_eq!(
            err,
            "error: changeset for 'ghost' was not written\n\
             caused by: failed to write changeset file '.changeset/ghost.md'\n\
             caused by: read-only\n"
        );
        Ok(())
    }
}
