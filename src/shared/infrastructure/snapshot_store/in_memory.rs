// In memory implementation of the SnapshotStore port.
//
// Purpose
// - Support store tests and local development without touching the disk.

use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, contents: &str) -> Self {
        let store = Self::new();
        store
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), contents.to_string());
        store
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotStoreError> {
        if self.is_offline {
            return Err(SnapshotStoreError::Backend("Snapshot store offline".into()));
        }
        let guard = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), SnapshotStoreError> {
        if self.is_offline {
            return Err(SnapshotStoreError::Backend("Snapshot store offline".into()));
        }
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_snapshot_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_write_and_read_back_the_contents() {
        let store = InMemorySnapshotStore::new();
        store.write("key", "{}").expect("expected to write to the snapshot store");
        assert_eq!(store.read("key").unwrap(), Some("{}".to_string()));
    }

    #[rstest]
    fn it_should_overwrite_the_previous_contents() {
        let store = InMemorySnapshotStore::with_entry("key", "first");
        store.write("key", "second").unwrap();
        assert_eq!(store.read("key").unwrap(), Some("second".to_string()));
    }

    #[rstest]
    fn it_should_return_none_for_an_unknown_key() {
        let store = InMemorySnapshotStore::new();
        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[rstest]
    fn it_should_fail_if_the_snapshot_store_is_offline() {
        let mut store = InMemorySnapshotStore::new();
        store.toggle_offline();
        let result = store.write("key", "{}");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Snapshot store offline"));
        assert!(store.read("key").is_err());
    }
}
