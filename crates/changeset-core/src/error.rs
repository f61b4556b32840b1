use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("package name '{name}' has no directory segment")]
    EmptyDirectorySegment { name: String },

    #[error("package name '{name}' yields an empty changeset filename")]
    EmptyFilename { name: String },
}

pub type Result<T> = std::result::Result<T, NamingError>;
