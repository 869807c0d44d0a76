// Snapshot store port: a key/value slot holding one serialized document per key.
//
// Purpose
// - Let the cycles store persist and restore its state without knowing where it lands.
//
// Boundaries
// - Synchronous on purpose: commands write their snapshot before returning.
// - Adapters live in the sibling modules (in memory, JSON file).

pub mod in_memory;
pub mod json_file;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for SnapshotStoreError {
    fn from(value: std::io::Error) -> Self {
        SnapshotStoreError::Backend(value.to_string())
    }
}

pub trait SnapshotStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotStoreError>;
    fn write(&self, key: &str, contents: &str) -> Result<(), SnapshotStoreError>;
}
