use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four answer letters a multiple-choice question accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    /// Parses a user-supplied answer letter, tolerating whitespace and case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" => Some(AnswerKey::A),
            "b" => Some(AnswerKey::B),
            "c" => Some(AnswerKey::C),
            "d" => Some(AnswerKey::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::A => "a",
            AnswerKey::B => "b",
            AnswerKey::C => "c",
            AnswerKey::D => "d",
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOption {
    pub id: AnswerKey,
    pub text: String,
}

/// A multiple-choice question. Options always carry the four keys a-d in
/// order, so `correct_answer` references an existing option by construction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    // The original data files call the question text field "question".
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: AnswerKey,
}

impl Question {
    pub fn new(id: u32, text: &str, option_texts: [String; 4], correct_answer: AnswerKey) -> Self {
        let options = AnswerKey::ALL
            .iter()
            .zip(option_texts)
            .map(|(key, text)| AnswerOption { id: *key, text })
            .collect();
        Question {
            id,
            text: text.to_string(),
            options,
            correct_answer,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(id: u32, name: &str) -> Self {
        Category {
            id,
            name: name.to_string(),
            questions: Vec::new(),
        }
    }

    /// Next question id within this category. Uses max+1 rather than len+1 so
    /// a deletion leaves a gap instead of an id that collides later.
    pub fn next_question_id(&self) -> u32 {
        self.questions.iter().map(|q| q.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_key_serializes_as_lowercase_letter() {
        assert_eq!(serde_json::to_string(&AnswerKey::B).unwrap(), "\"b\"");
        let parsed: AnswerKey = serde_json::from_str("\"d\"").unwrap();
        assert_eq!(parsed, AnswerKey::D);
    }

    #[test]
    fn answer_key_parse_tolerates_case_and_whitespace() {
        assert_eq!(AnswerKey::parse(" B "), Some(AnswerKey::B));
        assert_eq!(AnswerKey::parse("c"), Some(AnswerKey::C));
        assert_eq!(AnswerKey::parse("e"), None);
        assert_eq!(AnswerKey::parse("ab"), None);
        assert_eq!(AnswerKey::parse(""), None);
    }

    #[test]
    fn question_serializes_text_under_question_key() {
        let question = Question::new(
            1,
            "Who won the 1998 World Cup?",
            [
                "Brazil".to_string(),
                "France".to_string(),
                "Italy".to_string(),
                "Germany".to_string(),
            ],
            AnswerKey::B,
        );
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["question"], "Who won the 1998 World Cup?");
        assert_eq!(json["options"][1]["id"], "b");
        assert_eq!(json["correct_answer"], "b");
    }

    #[test]
    fn next_question_id_skips_over_deleted_ids() {
        let mut category = Category::new(1, "Sports");
        assert_eq!(category.next_question_id(), 1);

        category.questions.push(Question::new(
            1,
            "q1",
            std::array::from_fn(|i| format!("opt {i}")),
            AnswerKey::A,
        ));
        category.questions.push(Question::new(
            2,
            "q2",
            std::array::from_fn(|i| format!("opt {i}")),
            AnswerKey::A,
        ));
        assert_eq!(category.next_question_id(), 3);

        // Deleting question 1 must not make id 2 reusable.
        category.questions.retain(|q| q.id != 1);
        assert_eq!(category.next_question_id(), 3);
    }
}
