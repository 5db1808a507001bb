//! Self-reported user background used to personalize guidance.

use serde::{Deserialize, Serialize};

/// A user's profile as entered on the dashboard.
///
/// All fields are free text and unvalidated. A profile is replaced wholesale on
/// edit, never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub degree: String,
    #[serde(default)]
    pub qualifications: String,
    pub experience: String,
    pub career_goals: String,
}

impl UserProfile {
    /// The profile the dashboard shows before the user edits anything.
    pub fn demo() -> Self {
        Self {
            name: "John Student".to_string(),
            degree: "Computer Science".to_string(),
            qualifications: "Bachelor's in Computer Science".to_string(),
            experience: "1-2 years programming".to_string(),
            career_goals: "AI/ML Engineer".to_string(),
        }
    }

    pub(crate) fn degree_lower(&self) -> String {
        self.degree.to_lowercase()
    }

    pub(crate) fn goals_lower(&self) -> String {
        self.career_goals.to_lowercase()
    }
}
