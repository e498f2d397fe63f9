//! # Messages
//!
//! File: cli/src/assistant/message.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! A [`Message`] is one turn of the conversation. Messages are immutable once
//! created: fields are private and only exposed through accessors.
//!
//! The serialized form matches the history blob written by the legacy web
//! widget, so an existing blob can be loaded as-is:
//!
//! ```json
//! { "sender": "bot", "content": "Hello!", "timestamp": "2024-03-01T09:30:00.000Z" }
//! ```
//!
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot", alias = "assistant")]
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => f.write_str("user"),
            Sender::Assistant => f.write_str("assistant"),
        }
    }
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message stamped with the current time.
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self::with_timestamp(sender, content, Utc::now())
    }

    pub fn with_timestamp(sender: Sender, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            sender,
            content: content.into(),
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Local wall-clock time as `HH:MM`, as shown next to a chat bubble.
    pub fn display_time(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// A message paired with the markup the UI should show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub message: Message,
    pub markup: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_like_legacy_blob() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let msg = Message::with_timestamp(Sender::Assistant, "Hi", ts);
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r#"{"sender":"bot","content":"Hi","timestamp":"2024-03-01T09:30:00Z"}"#
        );
    }

    #[test]
    fn test_parses_javascript_iso_string() {
        let json = r#"{"sender":"user","content":"hello","timestamp":"2024-03-01T09:30:00.123Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender(), Sender::User);
        assert_eq!(msg.content(), "hello");
        assert_eq!(msg.timestamp().timestamp_millis() % 1000, 123);
    }

    #[test]
    fn test_assistant_alias_accepted() {
        let json = r#"{"sender":"assistant","content":"x","timestamp":"2024-03-01T09:30:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender(), Sender::Assistant);
    }

    #[test]
    fn test_display_time_format() {
        let msg = Message::user("x");
        let time = msg.display_time();
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }
}
