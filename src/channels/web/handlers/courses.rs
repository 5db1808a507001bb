//! Course API handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::channels::web::handlers::{ApiError, api_error};
use crate::channels::web::server::GatewayState;
use crate::channels::web::types::{CourseCreatedResponse, CourseListResponse};
use crate::db::NewCourse;

/// `GET /api/courses`
pub async fn courses_list_handler(
    State(state): State<Arc<GatewayState>>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let courses = state.courses.list_courses().await.map_err(|e| {
        tracing::error!("Failed to list courses: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch courses")
    })?;
    Ok(Json(CourseListResponse { courses }))
}

/// `POST /api/courses`
pub async fn courses_create_handler(
    State(state): State<Arc<GatewayState>>,
    body: Result<Json<NewCourse>, JsonRejection>,
) -> Result<Json<CourseCreatedResponse>, ApiError> {
    let Json(course) = body.map_err(|rejection| {
        tracing::error!("Error creating course: {}", rejection.body_text());
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create course")
    })?;

    let course = state
        .courses
        .create_course(course)
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(Json(CourseCreatedResponse {
        message: "Course created successfully".to_string(),
        course,
    }))
}
