mod changeset_io;
mod formatter;
mod git;
mod project;

pub use changeset_io::FileSystemChangesetWriter;
pub use formatter::ProjectFormatterProvider;
pub use git::Git2Provider;
pub use project::FileSystemProjectProvider;
