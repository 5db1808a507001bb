//! Chat API handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::channels::web::handlers::{ApiError, api_error};
use crate::channels::web::server::GatewayState;
use crate::channels::web::types::{ChatRequest, ChatResponse, WelcomeRequest, WelcomeResponse};
use crate::guidance::FALLBACK_RESPONSE;

/// `POST /api/chat`
///
/// A body that cannot be read as a chat request still gets the fallback
/// answer rather than an error status.
pub async fn chat_handler(
    State(state): State<Arc<GatewayState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::error!("Chat request rejected: {}", rejection.body_text());
            return Ok(Json(ChatResponse {
                response: FALLBACK_RESPONSE.to_string(),
            }));
        }
    };

    let message = match req.message {
        Some(message) if !message.is_empty() => message,
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "Message is required")),
    };

    tracing::debug!(
        personalized = req.user_profile.is_some(),
        chars = message.chars().count(),
        "Chat message received"
    );

    let response = state
        .guidance
        .respond(&message, req.user_profile.as_ref())
        .await;
    Ok(Json(ChatResponse { response }))
}

/// `POST /api/chat/welcome`
///
/// Body is optional; anything unreadable is treated as "no profile".
pub async fn chat_welcome_handler(
    body: Result<Json<WelcomeRequest>, JsonRejection>,
) -> Json<WelcomeResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let profile = req.user_profile.as_ref();
    Json(WelcomeResponse {
        greeting: eduai_guidance::greeting(profile),
        suggestions: eduai_guidance::suggested_questions(profile),
    })
}
