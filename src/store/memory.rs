use std::collections::HashMap;

use super::StorageBackend;

/// In-memory storage for tests and embedders that don't want durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored text for a key, for assertions in tests.
    pub fn contents(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_your_writes() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));
        backend.write("k", "w").unwrap();
        assert_eq!(backend.contents("k"), Some("w"));
    }
}
