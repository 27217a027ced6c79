use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{LoginRequest, RegisterRequest},
    models::dto::response::UserResponse,
};

#[post("/api/users/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let user = state
        .identity_service
        .register(&request.username, &request.password)
        .await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

#[post("/api/users/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .identity_service
        .authenticate(&request.username, &request.password)
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

#[get("/api/users/{username}/history")]
pub async fn get_history(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = state.identity_service.resolve_id(&username).await?;
    let entries = state.history_service.query(user_id).await?;
    Ok(HttpResponse::Ok().json(entries))
}
