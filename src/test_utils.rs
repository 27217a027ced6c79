#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::domain::{
        AnswerKey, Category, HistoryEntry, Question, QuizSession, SessionStatus,
    };

    /// A question whose correct answer is always "b".
    pub fn question(id: u32) -> Question {
        Question::new(
            id,
            &format!("question {}", id),
            std::array::from_fn(|i| format!("option {}", (b'a' + i as u8) as char)),
            AnswerKey::B,
        )
    }

    pub fn category_with_questions(id: u32, name: &str, count: u32) -> Category {
        let mut category = Category::new(id, name);
        for question_id in 1..=count {
            category.questions.push(question(question_id));
        }
        category
    }

    pub fn session_with_questions(count: u32) -> QuizSession {
        QuizSession {
            id: Uuid::new_v4(),
            user_id: 1,
            category: "Sports".to_string(),
            questions: (1..=count).map(question).collect(),
            answers: Vec::new(),
            score: 0,
            current: 0,
            started_at: Utc::now(),
            deadline: None,
            status: SessionStatus::InProgress,
        }
    }

    pub fn history_entry(id: u32, user_id: u32) -> HistoryEntry {
        HistoryEntry {
            id,
            user_id,
            category: "Sports".to_string(),
            questions: vec![],
            score: "0/0".to_string(),
            date: "2025-01-15 10:30:00".to_string(),
        }
    }
}
