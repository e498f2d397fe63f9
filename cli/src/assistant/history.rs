//! # Conversation History
//!
//! File: cli/src/assistant/history.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! An append-only, size-bounded log of [`Message`]s persisted as one JSON
//! blob in a [`BlobStore`] under a fixed key.
//!
//! ## Invariants
//!
//! - At most [`HISTORY_LIMIT`] messages are held after every mutation; the
//!   oldest are evicted first.
//! - Persistence is best-effort. [`ConversationHistory::persist`] and
//!   [`ConversationHistory::load`] log failures and never propagate them, so
//!   a broken store degrades to an in-memory conversation.
//! - A missing or malformed blob loads as an empty history.
//!
//! ## Wire Format
//!
//! The blob is a JSON array of `{ "sender", "content", "timestamp" }` objects,
//! oldest first, the same shape the legacy web widget wrote to local storage.
//! `sender` is `"user"` or `"bot"`; timestamps are RFC 3339 in UTC.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut history = ConversationHistory::open(store, DEFAULT_STORAGE_KEY);
//! history.append(Message::user("any exam tips?"));
//! history.persist();
//! ```
//!
//! There is no clear operation; history goes away only when the backing
//! store is cleared externally.
//!
use super::message::Message;
use crate::common::storage::BlobStore;
use crate::core::error::{StudybotError, Result};
use anyhow::Context;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Maximum number of messages kept.
pub const HISTORY_LIMIT: usize = 50;

/// Storage key used by the legacy widget.
pub const DEFAULT_STORAGE_KEY: &str = "chatbotHistory";

pub struct ConversationHistory<S: BlobStore> {
    messages: VecDeque<Message>,
    store: S,
    key: String,
}

impl<S: BlobStore> ConversationHistory<S> {
    /// Opens the history stored under `key`, starting empty if there is none.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let mut history = Self {
            messages: VecDeque::with_capacity(HISTORY_LIMIT + 1),
            store,
            key: key.into(),
        };
        history.load();
        history
    }

    /// Replaces the in-memory log with the persisted one.
    ///
    /// Absent, unreadable or malformed blobs leave the history empty.
    pub fn load(&mut self) {
        self.messages.clear();
        match self.try_load() {
            Ok(Some(messages)) => {
                debug!("Loaded {} messages from '{}'", messages.len(), self.key);
                self.messages.extend(messages);
                self.enforce_limit();
            }
            Ok(None) => debug!("No saved history under '{}'", self.key),
            Err(e) => warn!("Ignoring saved history under '{}': {:#}", self.key, e),
        }
    }

    /// Reads and decodes the persisted blob.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - Nothing is stored under the key.
    /// * `Ok(Some(messages))` - The decoded messages, not yet capped.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the store fails or the blob is not a valid message
    /// array. One bad entry makes the whole blob invalid.
    pub fn try_load(&self) -> Result<Option<Vec<Message>>> {
        let Some(blob) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let messages: Vec<Message> = serde_json::from_str(&blob)
            .map_err(StudybotError::from)
            .with_context(|| format!("Malformed history blob under '{}'", self.key))?;
        Ok(Some(messages))
    }

    /// Pushes `message` to the end, evicting from the front past the limit.
    pub fn append(&mut self, message: Message) {
        self.messages.push_back(message);
        self.enforce_limit();
    }

    /// Writes the whole log to the store, logging rather than returning failures.
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            warn!("Failed to save conversation history: {:#}", e);
        }
    }

    /// Writes the whole log to the store.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if encoding fails or the store rejects the write.
    pub fn try_persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.messages).map_err(StudybotError::from)?;
        self.store
            .set(&self.key, &blob)
            .with_context(|| format!("Failed to store history under '{}'", self.key))?;
        debug!("Persisted {} messages under '{}'", self.messages.len(), self.key);
        Ok(())
    }

    fn enforce_limit(&mut self) {
        while self.messages.len() > HISTORY_LIMIT {
            self.messages.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn to_vec(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::message::Sender;
    use crate::common::storage::MemoryBlobStore;

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl BlobStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(StudybotError::Storage {
                key: key.to_string(),
                reason: "quota exceeded".into(),
            }
            .into())
        }
    }

    fn numbered(n: usize) -> Message {
        let sender = if n % 2 == 0 { Sender::User } else { Sender::Assistant };
        Message::new(sender, format!("message {}", n))
    }

    #[test]
    fn test_starts_empty_without_blob() {
        let history = ConversationHistory::open(MemoryBlobStore::new(), DEFAULT_STORAGE_KEY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_cap_keeps_last_fifty_in_order() {
        let mut history = ConversationHistory::open(MemoryBlobStore::new(), DEFAULT_STORAGE_KEY);
        for n in 0..60 {
            history.append(numbered(n));
            assert!(history.len() <= HISTORY_LIMIT);
        }
        let contents: Vec<String> = history.iter().map(|m| m.content().to_string()).collect();
        let expected: Vec<String> = (10..60).map(|n| format!("message {}", n)).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let mut history = ConversationHistory::open(MemoryBlobStore::new(), DEFAULT_STORAGE_KEY);
        for n in 0..5 {
            history.append(numbered(n));
        }
        history.persist();
        let saved = history.to_vec();

        let reopened = ConversationHistory::open(history.into_store(), DEFAULT_STORAGE_KEY);
        assert_eq!(reopened.to_vec(), saved);
    }

    #[test]
    fn test_malformed_blob_loads_empty() {
        let store = MemoryBlobStore::new().with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let history = ConversationHistory::open(store, DEFAULT_STORAGE_KEY);
        assert!(history.is_empty());
        assert!(history.try_load().is_err());
    }

    #[test]
    fn test_wrong_shape_blob_loads_empty() {
        let store = MemoryBlobStore::new().with_entry(DEFAULT_STORAGE_KEY, r#"[{"sender":"robot"}]"#);
        let history = ConversationHistory::open(store, DEFAULT_STORAGE_KEY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_legacy_blob_loads() {
        let blob = r#"[
            {"sender":"user","content":"hi","timestamp":"2024-03-01T09:30:00.000Z"},
            {"sender":"bot","content":"Hello! 👋","timestamp":"2024-03-01T09:30:02.417Z"}
        ]"#;
        let store = MemoryBlobStore::new().with_entry(DEFAULT_STORAGE_KEY, blob);
        let history = ConversationHistory::open(store, DEFAULT_STORAGE_KEY);
        let senders: Vec<Sender> = history.iter().map(Message::sender).collect();
        assert_eq!(senders, [Sender::User, Sender::Assistant]);
    }

    #[test]
    fn test_oversized_blob_is_trimmed_on_load() {
        let messages: Vec<Message> = (0..70).map(numbered).collect();
        let blob = serde_json::to_string(&messages).unwrap();
        let store = MemoryBlobStore::new().with_entry(DEFAULT_STORAGE_KEY, &blob);
        let history = ConversationHistory::open(store, DEFAULT_STORAGE_KEY);
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.iter().next().unwrap().content(), "message 20");
    }

    #[test]
    fn test_persist_failure_keeps_memory_state() {
        let mut history = ConversationHistory::open(ReadOnlyStore, DEFAULT_STORAGE_KEY);
        history.append(numbered(0));
        history.persist(); // Logged, not propagated.
        assert_eq!(history.len(), 1);
        assert!(history.try_persist().is_err());
    }

    #[test]
    fn test_persist_overwrites_previous_blob() {
        let store = MemoryBlobStore::new().with_entry(DEFAULT_STORAGE_KEY, "stale");
        let mut history = ConversationHistory::open(store, DEFAULT_STORAGE_KEY);
        history.append(numbered(1));
        history.persist();
        let raw = history.store().raw(DEFAULT_STORAGE_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("message 1"));
    }
}
