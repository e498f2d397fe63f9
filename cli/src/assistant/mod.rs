//! # StudyBot Assistant Core (`assistant`)
//!
//! File: cli/src/assistant/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! The embeddable part of StudyBot. It has no knowledge of any rendering
//! technology: a host (the terminal chat in `commands::chat`, or any other UI)
//! feeds text in and gets messages with ready-made markup back.
//!
//! ## Architecture
//!
//! - **`intent`**: `classify` maps text to a `Category` with ordered keyword rules.
//! - **`responses`**: `respond` maps a `Category` to its canned reply.
//! - **`message`**: `Message`, `Sender` and `RenderedMessage`.
//! - **`format`**: `format_for_display` escapes text, links URLs and converts newlines.
//! - **`history`**: `ConversationHistory`, the capped log persisted to a `BlobStore`.
//! - **`quick_action`**: named shortcuts mapped to fixed prompts.
//! - **`scheduler`**: delayed, cancellable reply delivery on tokio.
//! - **`widget`**: `ChatWidget`, one mounted chat tying the pieces together.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use studybot::assistant::{ChatWidget, WidgetOptions};
//! use studybot::common::storage::MemoryBlobStore;
//!
//! let mut widget = ChatWidget::with_entropy(MemoryBlobStore::new(), WidgetOptions::default());
//! if let Some(turn) = widget.submit("Any exam tips?") {
//!     // ...wait turn.delay...
//!     let shown = widget.deliver(turn.reply);
//!     println!("{}", shown.markup);
//! }
//! ```
//!
pub mod format;
pub mod history;
pub mod intent;
pub mod message;
pub mod quick_action;
pub mod responses;
pub mod scheduler;
pub mod widget;

pub use format::{format_for_display, FormatOptions};
pub use history::{ConversationHistory, HISTORY_LIMIT};
pub use intent::{classify, Category};
pub use message::{Message, RenderedMessage, Sender};
pub use quick_action::QuickAction;
pub use responses::respond;
pub use scheduler::{PendingReply, ReplyEvent, ReplyScheduler};
pub use widget::{ChatWidget, Turn, WidgetOptions};
