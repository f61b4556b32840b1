use std::collections::HashMap;
use std::path::{Path, PathBuf};

use changeset_core::{Changeset, PackageRelease, package_dir_name};
use changeset_git::LogQuery;
use changeset_markdown::{FormatOptions, render_changeset, render_history};
use changeset_project::Project;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    ChangesetFormatter, ChangesetWriter, FormatterProvider, GitProvider, ProjectProvider,
};

/// Identifier reported for every write; changesets are keyed by package.
pub const CHANGESET_ID_PLACEHOLDER: &str = "temp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenChangeset {
    pub path: PathBuf,
    /// `<name>@<version>` from the package manifest.
    pub release_tag: String,
    /// Whether `release_tag` exists in the repository.
    pub previous_release: bool,
    pub commits: usize,
}

#[derive(Debug)]
pub struct ReleaseOutcome {
    pub release: PackageRelease,
    pub result: Result<WrittenChangeset>,
}

#[derive(Debug)]
pub struct WriteOutput {
    pub id: &'static str,
    /// One outcome per release, in input order.
    pub releases: Vec<ReleaseOutcome>,
}

impl WriteOutput {
    pub fn written(&self) -> impl Iterator<Item = &WrittenChangeset> {
        self.releases.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PackageRelease, &OperationError)> {
        self.releases
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.release, e)))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.releases.iter().all(|o| o.result.is_ok())
    }
}

pub struct WriteOperation<P, G, F, W> {
    project_provider: P,
    git_provider: G,
    formatter_provider: F,
    changeset_writer: W,
}

impl<P, G, F, W> WriteOperation<P, G, F, W>
where
    P: ProjectProvider,
    G: GitProvider,
    F: FormatterProvider,
    W: ChangesetWriter,
{
    pub fn new(
        project_provider: P,
        git_provider: G,
        formatter_provider: F,
        changeset_writer: W,
    ) -> Self {
        Self {
            project_provider,
            git_provider,
            formatter_provider,
            changeset_writer,
        }
    }

    /// Writes one changeset file per release. Every release is processed
    /// concurrently and reported on its own; a failing release does not stop
    /// the others.
    ///
    /// # Errors
    ///
    /// Returns an error if the project configuration, the formatter or its
    /// configuration cannot be resolved. Nothing is written in that case.
    pub async fn execute(&self, root: &Path, changeset: &Changeset) -> Result<WriteOutput> {
        let project = self.project_provider.load_project(root)?;
        let formatter = self.formatter_provider.resolve_formatter(root)?;
        let options = FormatOptions::markdown(self.formatter_provider.resolve_config(root)?);

        debug!(
            formatter = %formatter.name(),
            releases = changeset.releases.len(),
            "writing changesets"
        );

        let targets = plan_targets(&project, &changeset.releases);

        let tasks = changeset
            .releases
            .iter()
            .zip(targets)
            .map(|(release, target)| {
                let project = &project;
                let formatter = formatter.as_ref();
                let options = &options;
                async move {
                    let result = match target {
                        Ok(path) => {
                            self.write_release(project, formatter, options, release, path)
                                .await
                        }
                        Err(err) => Err(err),
                    };
                    ReleaseOutcome {
                        release: release.clone(),
                        result,
                    }
                }
            });

        let releases = join_all(tasks).await;

        Ok(WriteOutput {
            id: CHANGESET_ID_PLACEHOLDER,
            releases,
        })
    }

    async fn write_release(
        &self,
        project: &Project,
        formatter: &dyn ChangesetFormatter,
        options: &FormatOptions,
        release: &PackageRelease,
        path: PathBuf,
    ) -> Result<WrittenChangeset> {
        let dir_name = package_dir_name(&release.name)?;
        let manifest = self
            .project_provider
            .read_manifest(&project.manifest_path(dir_name))
            .await?;

        if package_dir_name(&manifest.name).ok() != Some(dir_name) {
            warn!(
                release = %release.name,
                manifest_name = %manifest.name,
                dir = dir_name,
                "package name does not match its directory; tag uses the manifest name"
            );
        }

        let release_tag = manifest.release_tag();
        let tags = self.git_provider.tag_names(project.root()).await?;
        let previous_release = tags.iter().any(|tag| *tag == release_tag);

        let commits = if previous_release {
            let query =
                LogQuery::since(release_tag.as_str()).with_path(project.package_dir(dir_name));
            self.git_provider.log(project.root(), &query).await?
        } else {
            debug!(
                release = %release.name,
                tag = %release_tag,
                "no release tag, nothing to summarize"
            );
            Vec::new()
        };

        let history = render_history(commits.iter().map(|commit| commit.message.as_str()));
        let rendered = render_changeset(release, &history);
        let formatted = formatter.format(&rendered, options).await?;

        self.changeset_writer
            .write_changeset(&path, &formatted)
            .await?;

        info!(
            release = %release.name,
            path = %path.display(),
            commits = commits.len(),
            "wrote changeset"
        );

        Ok(WrittenChangeset {
            path,
            release_tag,
            previous_release,
            commits: commits.len(),
        })
    }
}

/// Target file for every release. Releases sharing a file are resolved
/// before anything runs: the last one in input order keeps the file.
fn plan_targets(project: &Project, releases: &[PackageRelease]) -> Vec<Result<PathBuf>> {
    let paths: Vec<Result<PathBuf>> = releases
        .iter()
        .map(|release| {
            project
                .changeset_path(&release.name)
                .map_err(OperationError::from)
        })
        .collect();

    let mut owner: HashMap<PathBuf, usize> = HashMap::new();
    for (index, path) in paths.iter().enumerate() {
        if let Ok(path) = path {
            owner.insert(path.clone(), index);
        }
    }

    paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let path = path?;
            match owner.get(&path) {
                Some(&kept) if kept != index => {
                    warn!(
                        release = %releases[index].name,
                        kept = %releases[kept].name,
                        path = %path.display(),
                        "changeset filename collision"
                    );
                    Err(OperationError::FilenameCollision {
                        name: releases[index].name.clone(),
                        path,
                        kept: releases[kept].name.clone(),
                    })
                }
                _ => Ok(path),
            }
        })
        .collect()
}
