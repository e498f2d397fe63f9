//! # Chat Widget
//!
//! File: cli/src/assistant/widget.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! `ChatWidget` is one mounted chat: it owns its history, its random source
//! and its display options. Nothing is global, so several widgets can live
//! side by side.
//!
//! ## Flow
//!
//! 1. The UI calls [`ChatWidget::submit`] (or [`ChatWidget::quick_action`]).
//!    Blank input is rejected here and nothing else happens.
//! 2. The user message is recorded and persisted, and a [`Turn`] comes back
//!    with the rendered user message, the reply text and the typing delay.
//! 3. After the delay (see `scheduler`) the UI calls [`ChatWidget::deliver`],
//!    which records the assistant message and returns it rendered.
//!
use super::format::{format_for_display, FormatOptions};
use super::history::{ConversationHistory, DEFAULT_STORAGE_KEY};
use super::intent::{classify, Category};
use super::message::{Message, RenderedMessage};
use super::quick_action::QuickAction;
use super::responses::{respond, WELCOME_MESSAGE};
use crate::common::storage::BlobStore;
use crate::core::config::{Config, TypingConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

/// Everything a widget needs besides its store and RNG.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetOptions {
    pub format: FormatOptions,
    pub typing: TypingConfig,
    pub storage_key: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            format: FormatOptions::default(),
            typing: TypingConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl WidgetOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            format: FormatOptions {
                escape_html: config.display.escape_html,
            },
            typing: config.typing.clone(),
            storage_key: config.storage.key.clone(),
        }
    }
}

/// Result of accepting a user message.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub user: RenderedMessage,
    pub category: Category,
    pub reply: String,
    pub delay: Duration,
}

pub struct ChatWidget<S: BlobStore, R: Rng> {
    history: ConversationHistory<S>,
    rng: R,
    options: WidgetOptions,
}

impl<S: BlobStore> ChatWidget<S, StdRng> {
    /// Creates a widget seeded from OS entropy.
    pub fn with_entropy(store: S, options: WidgetOptions) -> Self {
        Self::new(store, StdRng::from_entropy(), options)
    }
}

impl<S: BlobStore, R: Rng> ChatWidget<S, R> {
    /// Mounts a widget, restoring any history saved under the configured key.
    pub fn new(store: S, rng: R, options: WidgetOptions) -> Self {
        let history = ConversationHistory::open(store, options.storage_key.clone());
        info!(
            "Chat widget ready with {} restored messages",
            history.len()
        );
        Self {
            history,
            rng,
            options,
        }
    }

    /// The greeting shown when the chat opens. It is not recorded.
    pub fn welcome(&self) -> RenderedMessage {
        let message = Message::assistant(WELCOME_MESSAGE);
        RenderedMessage {
            markup: format_for_display(message.content(), self.options.format),
            message,
            time: "Just now".to_string(),
        }
    }

    /// Accepts free text from the user. Blank input yields `None`.
    pub fn submit(&mut self, text: &str) -> Option<Turn> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }
        let delay = self.typing_delay();
        Some(self.accept(text, delay))
    }

    /// Sends the prompt behind a quick action key. Unknown keys yield `None`.
    pub fn quick_action(&mut self, key: &str) -> Option<Turn> {
        let Some(action) = QuickAction::from_key(key) else {
            debug!("Ignoring unknown quick action '{}'", key);
            return None;
        };
        let delay = self.options.typing.quick_action_delay();
        Some(self.accept(action.prompt(), delay))
    }

    /// Records an assistant reply whose delay has elapsed.
    pub fn deliver(&mut self, reply: impl Into<String>) -> RenderedMessage {
        self.record(Message::assistant(reply))
    }

    pub fn history(&self) -> &ConversationHistory<S> {
        &self.history
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    /// Pairs a message with its markup and display time.
    pub fn render(&self, message: Message) -> RenderedMessage {
        RenderedMessage {
            markup: format_for_display(message.content(), self.options.format),
            time: message.display_time(),
            message,
        }
    }

    fn accept(&mut self, text: &str, delay: Duration) -> Turn {
        let user = self.record(Message::user(text));
        let category = classify(text);
        let reply = respond(category, &mut self.rng);
        debug!("Reply category {} due in {:?}", category, delay);
        Turn {
            user,
            category,
            reply,
            delay,
        }
    }

    fn record(&mut self, message: Message) -> RenderedMessage {
        self.history.append(message.clone());
        self.history.persist();
        self.render(message)
    }

    fn typing_delay(&mut self) -> Duration {
        let typing = &self.options.typing;
        let millis = if typing.min_delay_ms >= typing.max_delay_ms {
            typing.min_delay_ms
        } else {
            self.rng.gen_range(typing.min_delay_ms..typing.max_delay_ms)
        };
        Duration::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::history::HISTORY_LIMIT;
    use crate::assistant::message::Sender;
    use crate::assistant::responses::{DEFAULT_RESPONSES, GREETING_RESPONSE};
    use crate::common::storage::MemoryBlobStore;
    use rand::rngs::mock::StepRng;

    fn widget() -> ChatWidget<MemoryBlobStore, StepRng> {
        ChatWidget::new(MemoryBlobStore::new(), StepRng::new(0, 0), WidgetOptions::default())
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut w = widget();
        assert!(w.submit("").is_none());
        assert!(w.submit("   \n\t ").is_none());
        assert!(w.history().is_empty());
        assert!(w.history().store().raw(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_submit_records_user_then_deliver_records_reply() {
        let mut w = widget();
        let turn = w.submit("  hello  ").unwrap();
        assert_eq!(turn.user.message.content(), "hello");
        assert_eq!(turn.category, Category::Greeting);
        assert_eq!(turn.reply, GREETING_RESPONSE);
        assert_eq!(w.history().len(), 1);

        let shown = w.deliver(turn.reply);
        assert_eq!(shown.message.sender(), Sender::Assistant);
        let senders: Vec<Sender> = w.history().iter().map(Message::sender).collect();
        assert_eq!(senders, [Sender::User, Sender::Assistant]);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut w = widget();
        let turn = w.submit("what is this?").unwrap();
        w.deliver(turn.reply);
        let raw = w.history().store().raw(DEFAULT_STORAGE_KEY).unwrap();
        let saved: Vec<Message> = serde_json::from_str(raw).unwrap();
        assert_eq!(saved, w.history().to_vec());
    }

    #[test]
    fn test_default_reply_uses_injected_rng() {
        let mut w = widget();
        let turn = w.submit("asdkjaskjd").unwrap();
        assert_eq!(turn.category, Category::Default);
        assert_eq!(turn.reply, DEFAULT_RESPONSES[0]);
    }

    #[test]
    fn test_typing_delay_within_bounds() {
        let mut w = ChatWidget::new(
            MemoryBlobStore::new(),
            StdRng::seed_from_u64(3),
            WidgetOptions::default(),
        );
        for _ in 0..20 {
            let turn = w.submit("hey").unwrap();
            assert!(turn.delay >= Duration::from_millis(1000));
            assert!(turn.delay < Duration::from_millis(3000));
        }
    }

    #[test]
    fn test_quick_actions() {
        let mut w = widget();
        let turn = w.quick_action("find-questions").unwrap();
        assert_eq!(turn.user.message.content(), "I need help finding specific questions");
        assert_eq!(turn.category, Category::FindQuestions);
        assert_eq!(turn.delay, Duration::from_millis(800));

        assert!(w.quick_action("exam-prep").is_none());
        assert_eq!(w.history().len(), 1);
    }

    #[test]
    fn test_markup_is_escaped_by_default() {
        let mut w = widget();
        let turn = w.submit("<img src=x> https://pyq.example/papers").unwrap();
        assert!(turn.user.markup.starts_with("&lt;img src=x&gt; <a href=\"https://pyq.example/papers\""));
    }

    #[test]
    fn test_welcome_is_not_recorded() {
        let w = widget();
        let banner = w.welcome();
        assert_eq!(banner.time, "Just now");
        assert!(banner.message.content().contains("PYQ Hub Assistant"));
        assert!(w.history().is_empty());
    }

    #[test]
    fn test_history_survives_remount() {
        let mut w = widget();
        let turn = w.submit("exam tips").unwrap();
        w.deliver(turn.reply);
        let before = w.history().to_vec();

        let store = w.history.into_store();
        let remounted = ChatWidget::new(store, StepRng::new(0, 0), WidgetOptions::default());
        assert_eq!(remounted.history().to_vec(), before);
    }

    #[test]
    fn test_long_conversation_stays_capped() {
        let mut w = widget();
        for i in 0..40 {
            let turn = w.submit(&format!("question {}", i)).unwrap();
            w.deliver(turn.reply);
        }
        assert_eq!(w.history().len(), HISTORY_LIMIT);
        assert_eq!(w.history().iter().next().unwrap().content(), "question 15");
    }
}
