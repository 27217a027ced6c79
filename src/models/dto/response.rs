use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{
    AnswerOption, AnsweredQuestion, Category, QuizSession, SessionOutcome, SessionStatus, User,
};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: u32,
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub id: u32,
    pub name: String,
    pub question_count: usize,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        CategorySummary {
            id: category.id,
            name: category.name.clone(),
            question_count: category.questions.len(),
        }
    }
}

/// A question as presented to a player: position in the run, text and the
/// four options — never the correct answer.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub category: String,
    pub score: u32,
    pub answered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
}

impl SessionStateResponse {
    pub fn from_session(session: &QuizSession) -> Self {
        let question = session.current_question().map(|q| QuestionView {
            index: session.current + 1,
            total: session.questions.len(),
            question: q.text.clone(),
            options: q.options.clone(),
        });
        SessionStateResponse {
            session_id: session.id,
            status: session.status,
            category: session.category.clone(),
            score: session.score,
            answered: session.answers.len(),
            question,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResultResponse {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub category: String,
    pub score: u32,
    pub total: u32,
    pub score_string: String,
    pub questions: Vec<AnsweredQuestion>,
}

impl SessionResultResponse {
    pub fn new(session: &QuizSession, outcome: &SessionOutcome) -> Self {
        SessionResultResponse {
            session_id: session.id,
            status: session.status,
            category: session.category.clone(),
            score: outcome.score,
            total: outcome.total,
            score_string: outcome.score_string(),
            questions: outcome.records.clone(),
        }
    }
}
