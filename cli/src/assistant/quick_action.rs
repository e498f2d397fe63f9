//! # Quick Actions
//!
//! File: cli/src/assistant/quick_action.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! Named shortcuts that stand in for typing a message. Each maps to a fixed
//! prompt which then goes through the normal classify/respond pipeline.
//!
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    StudyTips,
    FindQuestions,
    Organize,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::StudyTips,
        QuickAction::FindQuestions,
        QuickAction::Organize,
    ];

    /// Looks up an action by its key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "study-tips" => Some(QuickAction::StudyTips),
            "find-questions" => Some(QuickAction::FindQuestions),
            "organize" => Some(QuickAction::Organize),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            QuickAction::StudyTips => "study-tips",
            QuickAction::FindQuestions => "find-questions",
            QuickAction::Organize => "organize",
        }
    }

    /// The user message this action sends.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::StudyTips => "Can you give me some study tips?",
            QuickAction::FindQuestions => "I need help finding specific questions",
            QuickAction::Organize => "How can I organize my study materials?",
        }
    }
}

impl FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickAction::from_key(s).ok_or_else(|| format!("unknown quick action '{}'", s))
    }
}
