//! Dashboard API handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use eduai_guidance::UserProfile;

use crate::channels::web::handlers::{ApiError, api_error};
use crate::channels::web::server::GatewayState;
use crate::channels::web::types::DashboardResponse;

fn dashboard_for(profile: UserProfile) -> DashboardResponse {
    DashboardResponse {
        dashboard: eduai_guidance::generate(&profile),
        profile,
    }
}

/// `GET /api/dashboard`: the demo profile and its recommendations.
pub async fn dashboard_demo_handler(
    State(state): State<Arc<GatewayState>>,
) -> Json<DashboardResponse> {
    Json(dashboard_for(state.demo_profile.clone()))
}

/// `POST /api/dashboard`: recommendations for a submitted profile.
///
/// The profile replaces the demo one wholesale for this response only.
pub async fn dashboard_profile_handler(
    body: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let Json(profile) = body.map_err(|rejection| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("Invalid profile: {}", rejection.body_text()),
        )
    })?;
    Ok(Json(dashboard_for(profile)))
}
