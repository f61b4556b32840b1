use std::path::Path;

use async_trait::async_trait;
use changeset_core::PackageManifest;
use changeset_project::Project;

use crate::Result;

#[async_trait]
pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the project configuration cannot be loaded.
    fn load_project(&self, root: &Path) -> Result<Project>;

    /// # Errors
    ///
    /// Returns an error if the manifest is missing, unreadable or malformed.
    async fn read_manifest(&self, path: &Path) -> Result<PackageManifest>;
}
