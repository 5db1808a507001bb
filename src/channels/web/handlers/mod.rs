//! Route handlers, one module per API area.

pub mod chat;
pub mod courses;
pub mod dashboard;
pub mod login;

use axum::{Json, http::StatusCode};

use crate::channels::web::types::ErrorResponse;

/// Error half of handlers that answer `{error}` bodies.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
