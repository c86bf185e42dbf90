// core/src/store/backend.rs

use std::collections::HashMap;

use crate::error::HubResult;

/// A flat string-keyed blob store. Values are JSON documents.
pub trait StorageBackend: Send + std::fmt::Debug {
  fn read(&self, key: &str) -> HubResult<Option<String>>;

  fn write(&mut self, key: &str, value: String) -> HubResult<()>;

  /// Removes `key`, returning the previous value if there was one.
  fn remove(&mut self, key: &str) -> HubResult<Option<String>>;

  /// All keys currently present, sorted.
  fn keys(&self) -> HubResult<Vec<String>>;
}

/// In-process backend. Contents are lost when the value is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
  entries: HashMap<String, String>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }
}

impl StorageBackend for MemoryBackend {
  fn read(&self, key: &str) -> HubResult<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn write(&mut self, key: &str, value: String) -> HubResult<()> {
    self.entries.insert(key.to_string(), value);
    Ok(())
  }

  fn remove(&mut self, key: &str) -> HubResult<Option<String>> {
    Ok(self.entries.remove(key))
  }

  fn keys(&self) -> HubResult<Vec<String>> {
    let mut keys: Vec<String> = self.entries.keys().cloned().collect();
    keys.sort_unstable();
    Ok(keys)
  }
}
