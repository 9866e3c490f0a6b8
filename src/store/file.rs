use std::path::PathBuf;

use super::StorageBackend;

/// Filesystem-backed storage: one JSON file per key inside a data directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        std::fs::write(self.slot_path(key), value)
    }
}
