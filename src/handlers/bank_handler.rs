use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AdminGate,
    errors::AppError,
    models::domain::AnswerKey,
    models::dto::request::{CreateCategoryRequest, CreateQuestionRequest},
    models::dto::response::CategorySummary,
};

#[get("/api/categories")]
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.bank_service.list_categories().await?;
    let summaries: Vec<CategorySummary> = categories.iter().map(CategorySummary::from).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

#[post("/api/categories")]
pub async fn create_category(
    state: web::Data<AppState>,
    request: web::Json<CreateCategoryRequest>,
    _admin: AdminGate,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let category = state.bank_service.create_category(&request.name).await?;
    Ok(HttpResponse::Created().json(CategorySummary::from(&category)))
}

#[delete("/api/categories/{id}")]
pub async fn delete_category(
    state: web::Data<AppState>,
    id: web::Path<u32>,
    _admin: AdminGate,
) -> Result<HttpResponse, AppError> {
    state.bank_service.delete_category(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/categories/{id}/questions")]
pub async fn add_question(
    state: web::Data<AppState>,
    id: web::Path<u32>,
    request: web::Json<CreateQuestionRequest>,
    _admin: AdminGate,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();

    let correct_answer = AnswerKey::parse(&request.correct_answer).ok_or_else(|| {
        AppError::InvalidInput("correct answer must be one of a, b, c or d".into())
    })?;

    let question = state
        .bank_service
        .add_question(*id, &request.text, request.options, correct_answer)
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[delete("/api/categories/{id}/questions/{question_id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    path: web::Path<(u32, u32)>,
    _admin: AdminGate,
) -> Result<HttpResponse, AppError> {
    let (category_id, question_id) = path.into_inner();
    state
        .bank_service
        .delete_question(category_id, question_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
