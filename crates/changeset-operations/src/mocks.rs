use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use changeset_core::PackageManifest;
use changeset_git::{CommitInfo, GitError, LogQuery};
use changeset_manifest::ManifestError;
use changeset_markdown::{FormatError, FormatOptions, FormatterConfig};
use changeset_project::{Project, ProjectConfig, ProjectError};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    ChangesetFormatter, ChangesetWriter, FormatterProvider, GitProvider, ProjectProvider,
};

pub const MOCK_ROOT: &str = "/mock/repo";

pub struct MockProjectProvider {
    project: Project,
    manifests: HashMap<PathBuf, PackageManifest>,
    reads: Mutex<Vec<PathBuf>>,
    invalid_config: bool,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ProjectConfig::default())
    }

    #[must_use]
    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            project: Project::new(MOCK_ROOT, config),
            manifests: HashMap::new(),
            reads: Mutex::new(Vec::new()),
            invalid_config: false,
        }
    }

    /// Registers `packages/<dir_name>/package.json`.
    #[must_use]
    pub fn with_package(mut self, dir_name: &str, name: &str, version: &str) -> Self {
        self.manifests.insert(
            self.project.manifest_path(dir_name),
            PackageManifest {
                name: name.to_string(),
                version: version.to_string(),
            },
        );
        self
    }

    #[must_use]
    pub fn with_invalid_config(mut self) -> Self {
        self.invalid_config = true;
        self
    }

    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectProvider for MockProjectProvider {
    fn load_project(&self, _root: &Path) -> Result<Project> {
        if self.invalid_config {
            return Err(ProjectError::AbsoluteDir {
                path: self.project.root().join("package.json"),
                field: "packagesDir",
                value: PathBuf::from("/elsewhere"),
            }
            .into());
        }
        Ok(self.project.clone())
    }

    async fn read_manifest(&self, path: &Path) -> Result<PackageManifest> {
        self.reads
            .lock()
            .expect("lock poisoned")
            .push(path.to_path_buf());

        self.manifests.get(path).cloned().ok_or_else(|| {
            ManifestError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            }
            .into()
        })
    }
}

pub struct MockGitProvider {
    tags: Vec<String>,
    commits: Vec<CommitInfo>,
    queries: Mutex<Vec<LogQuery>>,
    not_a_repository: bool,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            commits: Vec::new(),
            queries: Mutex::new(Vec::new()),
            not_a_repository: false,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Every log query answers with these subjects, newest first.
    #[must_use]
    pub fn with_commits(mut self, subjects: &[&str]) -> Self {
        self.commits = subjects
            .iter()
            .enumerate()
            .map(|(i, subject)| CommitInfo {
                sha: format!("{i:040x}"),
                message: (*subject).to_string(),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn not_a_repository() -> Self {
        Self {
            not_a_repository: true,
            ..Self::new()
        }
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn queries(&self) -> Vec<LogQuery> {
        self.queries.lock().expect("lock poisoned").clone()
    }

    fn check_repository(&self, project_root: &Path) -> Result<()> {
        if self.not_a_repository {
            return Err(GitError::NotARepository {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitProvider for MockGitProvider {
    async fn tag_names(&self, project_root: &Path) -> Result<Vec<String>> {
        self.check_repository(project_root)?;
        Ok(self.tags.clone())
    }

    async fn log(&self, project_root: &Path, query: &LogQuery) -> Result<Vec<CommitInfo>> {
        self.check_repository(project_root)?;
        self.queries
            .lock()
            .expect("lock poisoned")
            .push(query.clone());
        Ok(self.commits.clone())
    }
}

/// Returns its input unchanged and records the options it was called with.
#[derive(Clone)]
pub struct MockFormatter {
    seen_options: Arc<Mutex<Vec<FormatOptions>>>,
    failing_for: HashSet<String>,
}

#[async_trait]
impl ChangesetFormatter for MockFormatter {
    fn name(&self) -> String {
        "mock".to_string()
    }

    async fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        self.seen_options
            .lock()
            .expect("lock poisoned")
            .push(options.clone());

        if self
            .failing_for
            .iter()
            .any(|name| source.contains(&format!("\"{name}\"")))
        {
            return Err(FormatError::ExternalFailed {
                program: PathBuf::from("mock-formatter"),
                status: "exit status: 2".to_string(),
                stderr: "unparseable".to_string(),
            }
            .into());
        }
        Ok(source.to_string())
    }
}

pub struct MockFormatterProvider {
    formatter: MockFormatter,
    config: FormatterConfig,
    unreadable_config: bool,
}

impl MockFormatterProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            formatter: MockFormatter {
                seen_options: Arc::new(Mutex::new(Vec::new())),
                failing_for: HashSet::new(),
            },
            config: FormatterConfig::default(),
            unreadable_config: false,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FormatterConfig) -> Self {
        self.config = config;
        self
    }

    /// Formatting fails for the changeset declaring `release_name`.
    #[must_use]
    pub fn failing_for(mut self, release_name: &str) -> Self {
        self.formatter
            .failing_for
            .insert(release_name.to_string());
        self
    }

    #[must_use]
    pub fn with_unreadable_config(mut self) -> Self {
        self.unreadable_config = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn seen_options(&self) -> Vec<FormatOptions> {
        self.formatter
            .seen_options
            .lock()
            .expect("lock poisoned")
            .clone()
    }
}

impl Default for MockFormatterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterProvider for MockFormatterProvider {
    fn resolve_formatter(&self, _start: &Path) -> Result<Box<dyn ChangesetFormatter>> {
        Ok(Box::new(self.formatter.clone()))
    }

    fn resolve_config(&self, start: &Path) -> Result<FormatterConfig> {
        if self.unreadable_config {
            return Err(FormatError::ConfigRead {
                path: start.join(".prettierrc"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }
            .into());
        }
        Ok(self.config.clone())
    }
}

pub struct MockChangesetWriter {
    written: Mutex<Vec<(PathBuf, String)>>,
    failing_paths: HashSet<PathBuf>,
}

impl MockChangesetWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            failing_paths: HashSet::new(),
        }
    }

    #[must_use]
    pub fn failing_at(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_paths.insert(path.into());
        self
    }

    /// Written files in completion order.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn content_of(&self, path: &Path) -> Option<String> {
        self.written
            .lock()
            .expect("lock poisoned")
            .iter()
            .rev()
            .find(|(written, _)| written == path)
            .map(|(_, content)| content.clone())
    }
}

impl Default for MockChangesetWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChangesetWriter for MockChangesetWriter {
    async fn write_changeset(&self, path: &Path, content: &str) -> Result<()> {
        if self.failing_paths.contains(path) {
            return Err(OperationError::ChangesetFileWrite {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.written
            .lock()
            .expect("lock poisoned")
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
