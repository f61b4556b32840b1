use std::path::Path;

use async_trait::async_trait;
use changeset_markdown::{FormatOptions, FormatterConfig};

use crate::Result;

#[async_trait]
pub trait ChangesetFormatter: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> String;

    /// # Errors
    ///
    /// Returns an error if the text cannot be formatted.
    async fn format(&self, source: &str, options: &FormatOptions) -> Result<String>;
}

pub trait FormatterProvider: Send + Sync {
    /// Picks the formatter for a project. A missing local formatter is not an
    /// error; implementations fall back to a bundled one.
    ///
    /// # Errors
    ///
    /// Returns an error if locating a formatter fails.
    fn resolve_formatter(&self, start: &Path) -> Result<Box<dyn ChangesetFormatter>>;

    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read or parsed.
    fn resolve_config(&self, start: &Path) -> Result<FormatterConfig>;
}
