use actix_web::{get, post, web, HttpResponse};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::AnswerKey,
    models::dto::request::{StartSessionRequest, SubmitAnswerRequest},
    models::dto::response::{SessionResultResponse, SessionStateResponse},
    services::SessionService,
};

#[post("/api/sessions")]
pub async fn start_session(
    state: web::Data<AppState>,
    request: web::Json<StartSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let user_id = state.identity_service.resolve_id(&request.username).await?;
    let category = state.bank_service.get_category(request.category_id).await?;

    let time_budget = request.timed.then(|| {
        Duration::seconds(request.question_count as i64 * state.config.seconds_per_question as i64)
    });
    let session =
        SessionService::start(user_id, &category, request.question_count, time_budget, Utc::now())?;

    log::info!(
        "user {} started session {} on '{}' ({} questions{})",
        user_id,
        session.id,
        session.category,
        session.questions.len(),
        if request.timed { ", timed" } else { "" }
    );

    let response = SessionStateResponse::from_session(&session);
    state.sessions.write().await.insert(session.id, session);
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {} not found", id)))?;
    Ok(HttpResponse::Ok().json(SessionStateResponse::from_session(session)))
}

/// Scores one answer. While the session is in progress the next question
/// comes back; once it completes or times out, the result is persisted to
/// history and returned, and the session is dropped from the table.
#[post("/api/sessions/{id}/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let answer = AnswerKey::parse(&request.answer).ok_or_else(|| {
        AppError::InvalidInput("answer must be one of a, b, c or d".into())
    })?;

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {} not found", id)))?;

    SessionService::submit_answer(session, answer, Utc::now())?;

    let outcome = match SessionService::outcome(session) {
        Some(outcome) => outcome,
        None => {
            return Ok(HttpResponse::Ok().json(SessionStateResponse::from_session(session)));
        }
    };

    let session = sessions
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {} not found", id)))?;
    drop(sessions);

    state
        .history_service
        .record(
            session.user_id,
            &session.category,
            outcome.records.clone(),
            &outcome.score_string(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(SessionResultResponse::new(&session, &outcome)))
}
