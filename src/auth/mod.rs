use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use secrecy::ExposeSecret;

use crate::{app_state::AppState, errors::AppError};

/// Header carrying the shared admin passphrase.
pub const ADMIN_CODE_HEADER: &str = "x-admin-code";

/// Extractor gating the admin endpoints behind the configured passphrase.
///
/// This is a UI mode switch, not a security boundary: the code is a shared
/// static string compared case-insensitively against configuration.
#[derive(Debug)]
pub struct AdminGate;

impl AdminGate {
    fn check(req: &HttpRequest) -> Result<Self, AppError> {
        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::Unauthorized("admin gate is not configured".into()))?;

        let supplied = req
            .headers()
            .get(ADMIN_CODE_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized(format!("missing {} header", ADMIN_CODE_HEADER))
            })?;

        let expected = state.config.admin_code.expose_secret();
        if supplied.trim().to_lowercase() == expected.to_lowercase() {
            Ok(AdminGate)
        } else {
            Err(AppError::Unauthorized("invalid admin code".into()))
        }
    }
}

impl FromRequest for AdminGate {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::check(req))
    }
}
