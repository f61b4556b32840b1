use std::path::Path;

use async_trait::async_trait;
use changeset_core::PackageManifest;
use changeset_project::Project;

use crate::Result;
use crate::traits::ProjectProvider;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectProvider for FileSystemProjectProvider {
    fn load_project(&self, root: &Path) -> Result<Project> {
        Ok(Project::load(root)?)
    }

    async fn read_manifest(&self, path: &Path) -> Result<PackageManifest> {
        Ok(changeset_manifest::read_manifest(path).await?)
    }
}
