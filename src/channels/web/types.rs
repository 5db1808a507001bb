//! Request and response types for the web gateway.

use eduai_guidance::{Dashboard, UserProfile};
use serde::{Deserialize, Serialize};

use crate::db::{Course, CreatedCourse, User};

// --- Chat ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Missing and empty are both rejected by the handler.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeRequest {
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub greeting: String,
    pub suggestions: Vec<String>,
}

// --- Dashboard ---

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub profile: UserProfile,
    #[serde(flatten)]
    pub dashboard: Dashboard,
}

// --- Courses ---

#[derive(Debug, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CourseCreatedResponse {
    pub message: String,
    pub course: CreatedCourse,
}

// --- Auth ---

/// Missing fields read as empty and simply fail to match.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub message: String,
}

// --- Misc ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_accepts_camel_case_profile() {
        let req: ChatRequest = serde_json::from_value(serde_json::json!({
            "message": "hi",
            "userProfile": {
                "name": "Ann",
                "degree": "Engineering",
                "experience": "none",
                "careerGoals": "Data Engineer"
            }
        }))
        .unwrap();
        let profile = req.user_profile.expect("profile");
        assert_eq!(profile.career_goals, "Data Engineer");
        assert_eq!(profile.qualifications, "");
    }

    #[test]
    fn chat_request_without_message_parses() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_none());
        assert!(req.user_profile.is_none());
    }

    #[test]
    fn dashboard_response_is_flat() {
        let profile = UserProfile::demo();
        let response = DashboardResponse {
            dashboard: eduai_guidance::generate(&profile),
            profile,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("recommendations").is_some());
        assert!(json.get("learningPaths").is_some());
        assert_eq!(json["profile"]["careerGoals"], "AI/ML Engineer");
    }

    #[test]
    fn failed_login_omits_user() {
        let json = serde_json::to_value(LoginResponse {
            success: false,
            user: None,
            message: "nope".to_string(),
        })
        .unwrap();
        assert!(json.get("user").is_none());
    }
}
