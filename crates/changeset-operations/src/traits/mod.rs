mod changeset_io;
mod formatter;
mod git_provider;
mod project_provider;

pub use changeset_io::ChangesetWriter;
pub use formatter::{ChangesetFormatter, FormatterProvider};
pub use git_provider::GitProvider;
pub use project_provider::ProjectProvider;
