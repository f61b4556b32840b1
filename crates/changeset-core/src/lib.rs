pub mod error;
pub mod naming;
pub mod types;

pub use error::*;
pub use naming::{CHANGESET_EXTENSION, changeset_filename, package_dir_name, snake_case};
pub use types::*;
