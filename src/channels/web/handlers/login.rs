//! Demo login handler.
//!
//! Checks a single configured account. There are no sessions or tokens; a
//! successful login just returns the public user record.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::channels::web::server::GatewayState;
use crate::channels::web::types::{LoginRequest, LoginResponse};

fn failure(status: StatusCode, message: &str) -> (StatusCode, Json<LoginResponse>) {
    (
        status,
        Json(LoginResponse {
            success: false,
            user: None,
            message: message.to_string(),
        }),
    )
}

/// `POST /api/auth/login`
pub async fn login_handler(
    State(state): State<Arc<GatewayState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> (StatusCode, Json<LoginResponse>) {
    let Ok(Json(req)) = body else {
        tracing::error!("Login request body could not be parsed");
        return failure(StatusCode::INTERNAL_SERVER_ERROR, "Login failed");
    };

    match state.users.authenticate(&req.email, &req.password).await {
        Ok(Some(user)) => {
            tracing::info!(user_id = %user.id, "Login successful");
            (
                StatusCode::OK,
                Json(LoginResponse {
                    success: true,
                    user: Some(user),
                    message: "Login successful".to_string(),
                }),
            )
        }
        Ok(None) => {
            tracing::debug!("Login rejected");
            failure(StatusCode::UNAUTHORIZED, &state.login_failure_message)
        }
        Err(e) => {
            tracing::error!("Login error: {}", e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Login failed")
        }
    }
}
