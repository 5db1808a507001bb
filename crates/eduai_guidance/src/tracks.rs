//! Sub-classification of a profile or message into a degree track or goal track.
//!
//! Each table is an ordered list of `(track, keywords)` rows; the first row with
//! a substring hit wins. Profile tables key off a profile field, message tables
//! off the raw message, and their keyword sets differ slightly.

use serde::{Deserialize, Serialize};

use crate::intent::{NormalizedMessage, contains_any};
use crate::profile::UserProfile;

/// Academic background used to pick a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeTrack {
    ComputerScience,
    Engineering,
    Business,
}

/// Target career used to pick a skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTrack {
    AiMl,
    WebDevelopment,
    DataScience,
}

type TrackRules<T> = &'static [(T, &'static [&'static str])];

const PROFILE_DEGREE_RULES: TrackRules<DegreeTrack> = &[
    (DegreeTrack::ComputerScience, &["computer science", "cs"]),
    (DegreeTrack::Engineering, &["engineering"]),
    (DegreeTrack::Business, &["business"]),
];

const MESSAGE_DEGREE_RULES: TrackRules<DegreeTrack> = &[
    (
        DegreeTrack::ComputerScience,
        &["computer science", "cs", "programming"],
    ),
    (DegreeTrack::Engineering, &["engineering", "technical"]),
    (DegreeTrack::Business, &["business", "management"]),
];

const PROFILE_GOAL_RULES: TrackRules<GoalTrack> = &[
    (GoalTrack::AiMl, &["ai", "machine learning", "ml"]),
    (GoalTrack::WebDevelopment, &["web", "developer"]),
    (GoalTrack::DataScience, &["data", "analytics"]),
];

const MESSAGE_GOAL_RULES: TrackRules<GoalTrack> = &[
    (GoalTrack::AiMl, &["ai", "machine learning", "ml"]),
    (GoalTrack::WebDevelopment, &["web", "frontend", "backend"]),
    (GoalTrack::DataScience, &["data", "analytics"]),
];

fn first_match<T: Copy>(rules: TrackRules<T>, haystack: &str) -> Option<T> {
    rules
        .iter()
        .find(|(_, keywords)| contains_any(haystack, keywords))
        .map(|(track, _)| *track)
}

impl DegreeTrack {
    /// Track implied by `profile.degree`, case-insensitively.
    pub fn from_profile(profile: &UserProfile) -> Option<Self> {
        first_match(PROFILE_DEGREE_RULES, &profile.degree_lower())
    }

    /// Track implied by keywords in the message itself.
    pub fn from_message(message: &NormalizedMessage) -> Option<Self> {
        first_match(MESSAGE_DEGREE_RULES, message.as_str())
    }
}

impl GoalTrack {
    /// Track implied by `profile.career_goals`, case-insensitively.
    pub fn from_profile(profile: &UserProfile) -> Option<Self> {
        first_match(PROFILE_GOAL_RULES, &profile.goals_lower())
    }

    /// Track implied by keywords in the message itself.
    pub fn from_message(message: &NormalizedMessage) -> Option<Self> {
        first_match(MESSAGE_GOAL_RULES, message.as_str())
    }
}
