mod config;
mod error;
mod project;

pub const DEFAULT_CHANGESET_DIR: &str = ".changeset";
pub const DEFAULT_PACKAGES_DIR: &str = "packages";

pub use config::{CONFIG_KEY, ProjectConfig, load_config, parse_config};
pub use error::ProjectError;
pub use project::Project;

pub type Result<T> = std::result::Result<T, ProjectError>;
