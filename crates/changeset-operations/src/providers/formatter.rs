use std::path::Path;

use async_trait::async_trait;
use changeset_markdown::{FormatOptions, FormatterConfig, ResolvedFormatter};

use crate::Result;
use crate::traits::{ChangesetFormatter, FormatterProvider};

/// Uses the project's `node_modules/.bin/prettier` when installed, otherwise
/// the bundled markdown formatter. Configuration follows prettier's lookup.
pub struct ProjectFormatterProvider;

impl ProjectFormatterProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProjectFormatterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterProvider for ProjectFormatterProvider {
    fn resolve_formatter(&self, start: &Path) -> Result<Box<dyn ChangesetFormatter>> {
        Ok(Box::new(changeset_markdown::resolve_formatter(start)?))
    }

    fn resolve_config(&self, start: &Path) -> Result<FormatterConfig> {
        Ok(changeset_markdown::resolve_config(start)?)
    }
}

#[async_trait]
impl ChangesetFormatter for ResolvedFormatter {
    fn name(&self) -> String {
        ResolvedFormatter::name(self)
    }

    async fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        Ok(ResolvedFormatter::format(self, source, options).await?)
    }
}
