use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username cannot be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "category name cannot be empty"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "question text cannot be empty"))]
    pub text: String,
    #[validate(length(min = 4, max = 4, message = "exactly four options are required"))]
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub username: String,
    pub category_id: u32,
    pub question_count: u32,
    #[serde(default)]
    pub timed: bool,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}
