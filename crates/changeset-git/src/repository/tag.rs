use crate::Result;

use super::Repository;

impl Repository {
    /// # Errors
    ///
    /// Returns an error if the tag list cannot be read.
    pub fn tag_names(&self) -> Result<Vec<String>> {
        let names = self.inner.tag_names(None)?;
        Ok(names.iter().flatten().map(String::from).collect())
    }
}
