use serde::{Deserialize, Serialize};

use crate::models::domain::category::AnswerKey;

/// One answered question as recorded in the history file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub user_answer: AnswerKey,
    pub is_correct: bool,
}

/// A persisted record of one completed or timed-out session.
///
/// `category` stores the category name, not its id, so renaming or deleting
/// a category orphans the label in old entries (kept for compatibility with
/// existing history files). `score` is formatted "correct/total".
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub user_id: u32,
    pub category: String,
    pub questions: Vec<AnsweredQuestion>,
    pub score: String,
    pub date: String,
}
