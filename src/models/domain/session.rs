use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::category::Question;
use crate::models::domain::history::AnsweredQuestion;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
    TimedOut,
}

/// The full state of one quiz run, held by the caller between steps.
///
/// The session engine itself keeps no state: it takes this value, advances
/// it, and hands it back. `questions` is the sampled subset in presentation
/// order; `current` indexes the question awaiting an answer.
#[derive(Clone, Debug)]
pub struct QuizSession {
    pub id: Uuid,
    pub user_id: u32,
    pub category: String,
    pub questions: Vec<Question>,
    pub answers: Vec<AnsweredQuestion>,
    pub score: u32,
    pub current: usize,
    pub started_at: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: SessionStatus,
}

impl QuizSession {
    pub fn current_question(&self) -> Option<&Question> {
        if self.status == SessionStatus::InProgress {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status != SessionStatus::InProgress
    }
}

/// What a finished session amounts to: the per-question records and the
/// aggregate score over the questions actually answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    pub records: Vec<AnsweredQuestion>,
    pub score: u32,
    pub total: u32,
    pub timed_out: bool,
}

impl SessionOutcome {
    pub fn score_string(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}
