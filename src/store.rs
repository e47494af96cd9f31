use std::collections::HashMap;

use anyhow::Result;
use parking_lot::Mutex;

/// Byte-keyed backing store for cached match outcomes.
///
/// Implementations must be safe for concurrent `get`/`set`/`keys`/`flush`
/// from multiple callers; the match cache performs no locking of its own.
/// A persistent backend is a drop-in replacement with the same contract.
pub trait CacheBackend: Send + Sync {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()>;
    fn keys(&self) -> Result<Vec<Vec<u8>>>;
    fn flush(&self) -> Result<()>;
}

/// Reference in-process backend.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheBackend for InMemoryCache {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.entries.lock().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<Vec<u8>>> {
        Ok(self.entries.lock().keys().cloned().collect())
    }

    fn flush(&self) -> Result<()> {
        self.entries.lock().clear();
        Ok(())
    }
}
