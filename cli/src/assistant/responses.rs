//! # Canned Responses
//!
//! File: cli/src/assistant/responses.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studybot
//!
//! ## Overview
//!
//! Fixed reply templates for each [`Category`]. Every category except
//! [`Category::Default`] has exactly one reply; the default category picks
//! uniformly among [`DEFAULT_RESPONSES`] using the caller's random source, so
//! tests can pass a deterministic RNG.
//!
use super::intent::Category;
use rand::Rng;

/// Banner shown when a conversation opens. Not stored in history.
pub const WELCOME_MESSAGE: &str =
    "Hello! 👋 I'm your PYQ Hub Assistant. How can I help you today?";

pub const STUDY_TIPS: [&str; 5] = [
    "📚 **Active Recall**: Test yourself instead of just re-reading notes",
    "⏰ **Pomodoro Technique**: Study in 25-minute focused sessions",
    "📝 **Mind Mapping**: Create visual connections between concepts",
    "🔄 **Spaced Repetition**: Review material at increasing intervals",
    "🎯 **Set Clear Goals**: Break down topics into manageable chunks",
];

const STUDY_TIPS_PREAMBLE: &str = "Here are some effective study strategies:";
const STUDY_TIPS_POSTAMBLE: &str = "Which technique would you like to learn more about?";

pub const FIND_QUESTIONS_RESPONSE: &str = "I can help you find specific questions! 🔍\n\nTry searching by:\n• Subject (Math, Science, etc.)\n• Topic (Algebra, Physics, etc.)\n• Year or exam type\n• Question type (MCQ, Essay, etc.)\n\nWhat subject or topic are you looking for?";

pub const ORGANIZE_RESPONSE: &str = "Let's organize your study materials! 📁\n\n**Organization Tips:**\n• Create folders by subject\n• Use consistent naming (YYYY-MM-DD_Subject_Topic)\n• Tag important questions for quick access\n• Keep a master index of all materials\n\nWould you like help setting up a specific organization system?";

pub const EXAM_PREP_RESPONSE: &str = "Exam preparation strategies! 🎯\n\n**Pre-Exam Checklist:**\n✅ Review past papers\n✅ Create summary notes\n✅ Practice time management\n✅ Get adequate sleep\n✅ Prepare materials the night before\n\n**During Exam:**\n• Read all questions first\n• Start with easiest questions\n• Manage your time wisely\n• Review answers if time permits\n\nWhat specific exam are you preparing for?";

pub const GREETING_RESPONSE: &str = "Hello! 👋 How can I help you with your studies today?";

pub const HELP_RESPONSE: &str = "I'm your PYQ Hub Assistant! 🤖\n\n**I can help with:**\n📚 Study tips and strategies\n🔍 Finding specific questions\n📝 Organizing your materials\n💡 Learning techniques\n❓ General academic questions\n\nJust ask me anything related to your studies!";

pub const DEFAULT_RESPONSES: [&str; 4] = [
    "That's an interesting question! 🤔 Could you tell me more about what you're studying?",
    "I'd be happy to help with that! 📚 What specific aspect would you like to focus on?",
    "Great question! 💡 Let me know if you need help with study strategies, finding questions, or organizing your materials.",
    "I'm here to help with your studies! 🎓 What would you like to work on today?",
];

/// Produces the reply text for `category`.
pub fn respond<R: Rng + ?Sized>(category: Category, rng: &mut R) -> String {
    match category {
        Category::StudyTips => study_tips(),
        Category::FindQuestions => FIND_QUESTIONS_RESPONSE.to_string(),
        Category::Organize => ORGANIZE_RESPONSE.to_string(),
        Category::ExamPrep => EXAM_PREP_RESPONSE.to_string(),
        Category::Greeting => GREETING_RESPONSE.to_string(),
        Category::Help => HELP_RESPONSE.to_string(),
        Category::Default => DEFAULT_RESPONSES[rng.gen_range(0..DEFAULT_RESPONSES.len())].to_string(),
    }
}

fn study_tips() -> String {
    format!(
        "{}\n\n{}\n\n{}",
        STUDY_TIPS_PREAMBLE,
        STUDY_TIPS.join("\n"),
        STUDY_TIPS_POSTAMBLE
    )
}
