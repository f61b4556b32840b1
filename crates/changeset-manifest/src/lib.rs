mod error;
mod reader;

pub use error::ManifestError;
pub use reader::{PACKAGE_JSON, parse_manifest, read_document, read_manifest};

pub type Result<T> = std::result::Result<T, ManifestError>;
