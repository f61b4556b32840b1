mod write;

pub use write::{
    CHANGESET_ID_PLACEHOLDER, ReleaseOutcome, WriteOperation, WriteOutput, WrittenChangeset,
};
