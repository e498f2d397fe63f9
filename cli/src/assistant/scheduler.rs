//! # Reply Scheduling
//!
//! File: cli/src/assistant/scheduler.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Replies are delivered after a simulated typing delay. Each scheduled reply
//! is a tokio task that waits out its delay and then reports a
//! [`ReplyEvent`] on a channel owned by the host. [`PendingReply`] is the
//! cancel handle for that task.
//!
//! Every scheduled reply produces exactly one event: `Delivered` once its
//! delay elapses, or `Cancelled` if it was cancelled first. The host hands each
//! event back to [`ReplyScheduler::settle`], which keeps the pending set exact.
//!
//! With `cancel_superseded` enabled, scheduling a reply cancels every reply
//! still waiting, so only the answer to the latest message shows up. With it
//! disabled every reply is delivered independently.
//!
//! ```rust,ignore
//! let (mut scheduler, mut events) = ReplyScheduler::new(true);
//! scheduler.schedule(turn.reply, turn.delay);
//! while let Some(event) = events.recv().await {
//!     if let Some(content) = scheduler.settle(event) {
//!         widget.deliver(content);
//!     }
//! }
//! ```
//!
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tracing::debug;

/// Outcome of one scheduled reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEvent {
    Delivered { id: u64, content: String },
    Cancelled { id: u64 },
}

impl ReplyEvent {
    pub fn id(&self) -> u64 {
        match self {
            ReplyEvent::Delivered { id, .. } | ReplyEvent::Cancelled { id } => *id,
        }
    }
}

/// Cancel handle for one scheduled reply.
#[derive(Debug, Clone)]
pub struct PendingReply {
    id: u64,
    cancel: Arc<Notify>,
}

impl PendingReply {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stops the reply from being delivered. No effect once it was delivered.
    pub fn cancel(&self) {
        self.cancel.notify_one();
    }
}

pub struct ReplyScheduler {
    sender: mpsc::UnboundedSender<ReplyEvent>,
    pending: BTreeMap<u64, Arc<Notify>>,
    next_id: u64,
    cancel_superseded: bool,
}

impl ReplyScheduler {
    /// Creates a scheduler and the receiver its events arrive on.
    pub fn new(cancel_superseded: bool) -> (Self, mpsc::UnboundedReceiver<ReplyEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            sender,
            pending: BTreeMap::new(),
            next_id: 0,
            cancel_superseded,
        };
        (scheduler, receiver)
    }

    /// Schedules `content` for delivery after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, content: String, delay: Duration) -> PendingReply {
        if self.cancel_superseded {
            self.cancel_all();
        }
        let id = self.next_id;
        self.next_id += 1;

        let cancel = Arc::new(Notify::new());
        let cancelled = Arc::clone(&cancel);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            // A cancel that is already signalled wins over an elapsed delay.
            let event = tokio::select! {
                biased;
                _ = cancelled.notified() => ReplyEvent::Cancelled { id },
                _ = tokio::time::sleep(delay) => ReplyEvent::Delivered { id, content },
            };
            // The receiver is gone if the host already shut down.
            let _ = sender.send(event);
        });
        debug!("Scheduled reply {} after {:?}", id, delay);

        self.pending.insert(id, Arc::clone(&cancel));
        PendingReply { id, cancel }
    }

    /// Records an event from the channel. Returns the reply text when the
    /// reply was delivered and should be shown.
    pub fn settle(&mut self, event: ReplyEvent) -> Option<String> {
        let known = self.pending.remove(&event.id()).is_some();
        match event {
            ReplyEvent::Delivered { content, .. } if known => Some(content),
            ReplyEvent::Delivered { id, .. } => {
                debug!("Dropping reply {} that is no longer pending", id);
                None
            }
            ReplyEvent::Cancelled { id } => {
                debug!("Reply {} was cancelled", id);
                None
            }
        }
    }

    /// Cancels every reply still waiting.
    pub fn cancel_all(&mut self) {
        for (id, cancel) in &self.pending {
            cancel.notify_one();
            debug!("Cancelling superseded reply {}", id);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
