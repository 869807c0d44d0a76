// File backed implementation of the SnapshotStore port.
//
// Responsibilities
// - Keep one file per key inside a directory.
// - Replace the file by writing a sibling temp file and renaming it over the old one.

use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct JsonFileSnapshotStore {
    directory: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
            .collect();
        self.directory.join(format!("{file_name}.json"))
    }

    fn ensure_directory(&self) -> Result<(), SnapshotStoreError> {
        if !Path::new(&self.directory).exists() {
            fs::create_dir_all(&self.directory)?;
        }
        Ok(())
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotStoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), SnapshotStoreError> {
        self.ensure_directory()?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
