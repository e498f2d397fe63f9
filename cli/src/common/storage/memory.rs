//! # In-Memory Blob Store
//!
//! File: cli/src/common/storage/memory.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
use super::BlobStore;
use crate::core::error::Result;
use std::collections::HashMap;

/// `HashMap`-backed blob store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used to seed a store with an existing blob.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_overwrite() -> Result<()> {
        let mut store = MemoryBlobStore::new().with_entry("chatbotHistory", "seed");
        assert_eq!(store.get("chatbotHistory")?.as_deref(), Some("seed"));
        store.set("chatbotHistory", "replaced")?;
        assert_eq!(store.raw("chatbotHistory"), Some("replaced"));
        assert_eq!(store.get("other")?, None);
        Ok(())
    }
}
