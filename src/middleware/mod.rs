pub mod admin;
pub mod auth;

pub use admin::AdminMiddleware;
pub use auth::AuthMiddleware;

use actix_web::{error::InternalError, Error, HttpResponse};

/// 401 with the portal's {message} envelope.
pub(crate) fn unauthorized(message: &str) -> Error {
    let response = HttpResponse::Unauthorized().json(serde_json::json!({ "message": message }));
    InternalError::from_response(message.to_string(), response).into()
}

/// 403 with the portal's {message} envelope.
pub(crate) fn forbidden(message: &str) -> Error {
    let response = HttpResponse::Forbidden().json(serde_json::json!({ "message": message }));
    InternalError::from_response(message.to_string(), response).into()
}
