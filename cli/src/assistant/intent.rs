//! # Intent Classification
//!
//! File: cli/src/assistant/intent.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Maps free text to a [`Category`] by lower-casing it and testing an ordered
//! list of keyword rules. The first rule with any keyword occurring as a
//! substring wins; if none match the input falls through to
//! [`Category::Default`].
//!
//! Matching is plain substring search, so `"hi"` also matches inside
//! `"this"` and `"test"` inside `"latest"`. Rule order is what resolves
//! overlaps: `"help me find a question"` is `FindQuestions`, not `Help`.
//!
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Classification bucket driving canned-response selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    StudyTips,
    FindQuestions,
    Organize,
    ExamPrep,
    Greeting,
    Help,
    Default,
}

impl Category {
    /// Every category, in rule priority order.
    pub const ALL: [Category; 7] = [
        Category::StudyTips,
        Category::FindQuestions,
        Category::Organize,
        Category::ExamPrep,
        Category::Greeting,
        Category::Help,
        Category::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::StudyTips => "study-tips",
            Category::FindQuestions => "find-questions",
            Category::Organize => "organize",
            Category::ExamPrep => "exam-prep",
            Category::Greeting => "greeting",
            Category::Help => "help",
            Category::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category and the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Keyword rules in priority order. Keywords are already lower-case.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::StudyTips,
        keywords: &["study", "tip", "learn"],
    },
    Rule {
        category: Category::FindQuestions,
        keywords: &["find", "question", "search"],
    },
    Rule {
        category: Category::Organize,
        keywords: &["organize", "folder"],
    },
    Rule {
        category: Category::ExamPrep,
        keywords: &["exam", "test", "prepare"],
    },
    Rule {
        category: Category::Greeting,
        keywords: &["hello", "hi", "hey"],
    },
    Rule {
        category: Category::Help,
        keywords: &["help", "what can you do"],
    },
];

/// Classifies raw user text. Never fails.
pub fn classify(raw_text: &str) -> Category {
    let lowered = raw_text.to_lowercase();
    let category = RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(Category::Default);
    trace!("Classified {:?} as {}", raw_text, category);
    category
}
