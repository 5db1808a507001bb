//! In-memory demo stores.
//!
//! Stand-ins for a database: one configured demo account and a fixed course
//! catalogue. Nothing is written anywhere.

use async_trait::async_trait;
use chrono::Utc;
use eduai_guidance::Difficulty;
use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;

use crate::config::DemoConfig;
use crate::db::{Course, CourseStore, CreatedCourse, NewCourse, User, UserStore};
use crate::error::StoreError;

/// Accepts exactly the demo account from [`DemoConfig`].
pub struct InMemoryUserStore {
    account: DemoConfig,
}

impl InMemoryUserStore {
    pub fn new(account: DemoConfig) -> Self {
        Self { account }
    }
}

fn ct_eq(a: &str, b: &str) -> bool {
    bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        // Evaluate both comparisons so timing doesn't reveal which one failed.
        let email_ok = ct_eq(email, &self.account.email);
        let password_ok = ct_eq(password, self.account.password.expose_secret());

        if email_ok & password_ok {
            Ok(Some(User {
                id: self.account.user_id.clone(),
                name: self.account.user_name.clone(),
                email: self.account.email.clone(),
            }))
        } else {
            Ok(None)
        }
    }
}

/// The fixed three-course catalogue. `create_course` validates and echoes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoCourseStore;

/// id, title, description, progress, difficulty, category, estimated time,
/// lessons, completed lessons.
type CourseRow = (
    &'static str,
    &'static str,
    &'static str,
    u8,
    Difficulty,
    &'static str,
    &'static str,
    u32,
    u32,
);

const DEMO_COURSES: [CourseRow; 3] = [
    (
        "1",
        "Introduction to Machine Learning",
        "Learn the fundamentals of ML algorithms and applications",
        75,
        Difficulty::Intermediate,
        "Computer Science",
        "8 weeks",
        24,
        18,
    ),
    (
        "2",
        "Advanced JavaScript Concepts",
        "Master modern JavaScript features and best practices",
        45,
        Difficulty::Advanced,
        "Programming",
        "6 weeks",
        18,
        8,
    ),
    (
        "3",
        "Data Science Fundamentals",
        "Essential concepts in data analysis and visualization",
        90,
        Difficulty::Beginner,
        "Data Science",
        "10 weeks",
        30,
        27,
    ),
];

/// The demo catalogue, in display order.
pub fn demo_courses() -> Vec<Course> {
    DEMO_COURSES
        .iter()
        .map(|&(id, title, description, progress, difficulty, category, time, lessons, done)| {
            Course {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                progress,
                difficulty,
                category: category.to_string(),
                estimated_time: time.to_string(),
                lessons,
                completed_lessons: done,
            }
        })
        .collect()
}

#[async_trait]
impl CourseStore for DemoCourseStore {
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        Ok(demo_courses())
    }

    async fn create_course(&self, course: NewCourse) -> Result<CreatedCourse, StoreError> {
        course.validate()?;
        tracing::info!(title = %course.title, "Accepted demo course (not persisted)");
        Ok(CreatedCourse {
            course,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn store() -> InMemoryUserStore {
        InMemoryUserStore::new(DemoConfig::default())
    }

    #[tokio::test]
    async fn demo_credentials_authenticate() {
        let user = store()
            .authenticate("demo@eduai.com", "demo123")
            .await
            .unwrap()
            .expect("demo user");
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "John Student");
        assert_eq!(user.email, "demo@eduai.com");
    }

    #[tokio::test]
    async fn wrong_password_rejected() {
        let result = store().authenticate("demo@eduai.com", "demo1234").await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn wrong_email_rejected() {
        let result = store().authenticate("Demo@eduai.com", "demo123").await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn configured_account_replaces_default() {
        let store = InMemoryUserStore::new(DemoConfig {
            user_id: "42".to_string(),
            user_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: SecretString::from("hunter2".to_string()),
        });
        assert!(store.authenticate("demo@eduai.com", "demo123").await.unwrap().is_none());
        let user = store.authenticate("ada@example.com", "hunter2").await.unwrap();
        assert_eq!(user.map(|u| u.id), Some("42".to_string()));
    }

    #[tokio::test]
    async fn catalogue_has_three_courses() {
        let courses = DemoCourseStore.list_courses().await.unwrap();
        let titles: Vec<_> = courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Introduction to Machine Learning",
                "Advanced JavaScript Concepts",
                "Data Science Fundamentals"
            ]
        );
        assert!(courses.iter().all(|c| c.completed_lessons <= c.lessons));
    }

    #[tokio::test]
    async fn create_does_not_persist() {
        let store = DemoCourseStore;
        let created = store
            .create_course(NewCourse {
                title: "Rust".to_string(),
                description: "Systems programming".to_string(),
                difficulty: Difficulty::Advanced,
                category: "Programming".to_string(),
                estimated_time: "5 weeks".to_string(),
                lessons: 20,
            })
            .await
            .unwrap();
        assert_eq!(created.course.title, "Rust");
        assert_eq!(store.list_courses().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let result = DemoCourseStore
            .create_course(NewCourse {
                title: String::new(),
                description: "d".to_string(),
                difficulty: Difficulty::Beginner,
                category: "c".to_string(),
                estimated_time: "1 week".to_string(),
                lessons: 1,
            })
            .await;
        assert!(matches!(result, Err(StoreError::Invalid { .. })));
    }
}
