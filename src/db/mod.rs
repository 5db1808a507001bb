//! Repository interfaces for users and courses.
//!
//! The service ships only in-memory demo implementations (see [`memory`]); a
//! real backend would implement the same traits without touching the guidance
//! engine or the gateway handlers.

pub mod memory;

pub use memory::{DemoCourseStore, InMemoryUserStore};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eduai_guidance::Difficulty;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Public view of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A course as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub difficulty: Difficulty,
    pub category: String,
    pub estimated_time: String,
    pub lessons: u32,
    pub completed_lessons: u32,
}

/// Fields required to create a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub estimated_time: String,
    pub lessons: u32,
}

impl NewCourse {
    /// Reject blank required text fields.
    pub fn validate(&self) -> Result<(), StoreError> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
            ("estimatedTime", &self.estimated_time),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(StoreError::Invalid {
                    entity: "course".to_string(),
                    reason: format!("{field} is required"),
                });
            }
        }
        Ok(())
    }
}

/// A course accepted by [`CourseStore::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCourse {
    #[serde(flatten)]
    pub course: NewCourse,
    pub created_at: DateTime<Utc>,
}

/// Credential lookup.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the user when `email`/`password` match, `None` otherwise.
    async fn authenticate(&self, email: &str, password: &str)
    -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>;

    /// Validate and accept a new course.
    async fn create_course(&self, course: NewCourse) -> Result<CreatedCourse, StoreError>;
}
