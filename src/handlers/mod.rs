pub mod bank_handler;
pub mod session_handler;
pub mod user_handler;

use actix_web::{get, web, HttpResponse};

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Registers every route; shared by `main` and the HTTP test suites.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(user_handler::register)
        .service(user_handler::login)
        .service(user_handler::get_history)
        .service(bank_handler::list_categories)
        .service(bank_handler::create_category)
        .service(bank_handler::delete_category)
        .service(bank_handler::add_question)
        .service(bank_handler::delete_question)
        .service(session_handler::start_session)
        .service(session_handler::get_session)
        .service(session_handler::submit_answer);
}
