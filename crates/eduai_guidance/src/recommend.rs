//! Dashboard recommendations keyed off a profile's degree.
//!
//! Output is a fixed set of records per degree track, with only the `reason`
//! strings interpolated from the profile. Progress figures are demo constants,
//! not measurements of user activity.

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::tracks::DegreeTrack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Roadmap,
    Skill,
    Career,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Course and learning-path difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Position within the generated list, starting at "1".
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub reason: String,
    pub field: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub difficulty: Difficulty,
    pub category: String,
    pub estimated_time: String,
    pub skills: Vec<String>,
    /// Never exceeds `skills.len()`.
    pub completed_skills: usize,
}

/// Everything the dashboard renders for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub recommendations: Vec<Recommendation>,
    pub learning_paths: Vec<LearningPath>,
}

/// Derive the dashboard for `profile`.
///
/// Deterministic: the same profile always yields an equal `Dashboard`.
pub fn generate(profile: &UserProfile) -> Dashboard {
    let track = DegreeTrack::from_profile(profile);
    tracing::debug!(degree = %profile.degree, ?track, "Generating dashboard recommendations");

    let dashboard = match track {
        Some(DegreeTrack::ComputerScience) => computer_science(profile),
        Some(DegreeTrack::Engineering) => engineering(profile),
        Some(DegreeTrack::Business) => business(profile),
        None => general(profile),
    };
    debug_assert!(
        dashboard
            .learning_paths
            .iter()
            .all(|p| p.completed_skills <= p.skills.len() && p.progress <= 100)
    );
    dashboard
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn recommendation(
    id: &str,
    kind: RecommendationKind,
    title: &str,
    description: &str,
    priority: Priority,
    reason: String,
    field: &str,
    steps: &[&str],
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        priority,
        reason,
        field: field.to_string(),
        steps: strings(steps),
    }
}

#[allow(clippy::too_many_arguments)]
fn learning_path(
    id: &str,
    title: &str,
    description: &str,
    progress: u8,
    difficulty: Difficulty,
    category: &str,
    estimated_time: &str,
    skills: &[&str],
    completed_skills: usize,
) -> LearningPath {
    LearningPath {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        progress,
        difficulty,
        category: category.to_string(),
        estimated_time: estimated_time.to_string(),
        skills: strings(skills),
        completed_skills,
    }
}

fn computer_science(profile: &UserProfile) -> Dashboard {
    Dashboard {
        recommendations: vec![
            recommendation(
                "1",
                RecommendationKind::Roadmap,
                "AI/ML Career Roadmap",
                "Complete roadmap for transitioning into AI/ML roles with detailed skill progression",
                Priority::High,
                format!(
                    "Based on your {} background and {} goals",
                    profile.degree, profile.career_goals
                ),
                "Computer Science",
                &[
                    "Master Python programming fundamentals",
                    "Learn data structures and algorithms",
                    "Study machine learning basics",
                    "Build ML projects portfolio",
                    "Get industry certifications",
                    "Apply for AI/ML internships",
                ],
            ),
            recommendation(
                "2",
                RecommendationKind::Career,
                "Full-Stack Development Path",
                "Comprehensive path to become a full-stack developer with modern technologies",
                Priority::Medium,
                "Your programming experience shows strong technical aptitude".to_string(),
                "Programming",
                &[
                    "Learn HTML, CSS, JavaScript",
                    "Master React.js framework",
                    "Learn backend development (Node.js)",
                    "Database management skills",
                    "DevOps and deployment",
                    "Build full-stack projects",
                ],
            ),
        ],
        learning_paths: vec![
            learning_path(
                "1",
                "Machine Learning Fundamentals",
                "Learn the fundamentals of ML algorithms and applications",
                75,
                Difficulty::Intermediate,
                "AI/ML",
                "8 weeks",
                &["Python", "NumPy", "Pandas", "Scikit-learn", "Data Visualization"],
                4,
            ),
            learning_path(
                "2",
                "Advanced JavaScript & React",
                "Master modern JavaScript features and React development",
                45,
                Difficulty::Advanced,
                "Web Development",
                "6 weeks",
                &["JavaScript", "React.js", "Node.js", "Express", "MongoDB"],
                2,
            ),
        ],
    }
}

fn engineering(profile: &UserProfile) -> Dashboard {
    Dashboard {
        recommendations: vec![recommendation(
            "1",
            RecommendationKind::Roadmap,
            "Engineering to Software Development",
            "Leverage your engineering background for software development careers",
            Priority::High,
            format!(
                "Your {} degree provides excellent problem-solving skills",
                profile.degree
            ),
            "Engineering",
            &[
                "Strengthen programming fundamentals",
                "Learn software development methodologies",
                "Master relevant tools (Git, Docker)",
                "Build technical projects",
                "Gain industry experience",
                "Transition to software roles",
            ],
        )],
        learning_paths: vec![learning_path(
            "1",
            "Software Engineering Fundamentals",
            "Essential software development skills for engineers",
            60,
            Difficulty::Intermediate,
            "Software Development",
            "10 weeks",
            &[
                "Programming",
                "Software Design",
                "Version Control",
                "Testing",
                "Deployment",
            ],
            3,
        )],
    }
}

fn business(profile: &UserProfile) -> Dashboard {
    Dashboard {
        recommendations: vec![recommendation(
            "1",
            RecommendationKind::Roadmap,
            "Business to Tech Transition",
            "Use your business skills to transition into tech roles",
            Priority::High,
            format!(
                "Your {} background is valuable for tech business roles",
                profile.degree
            ),
            "Business",
            &[
                "Learn basic programming (Python, SQL)",
                "Understand digital tools and platforms",
                "Develop technical literacy",
                "Focus on product management",
                "Build digital projects",
                "Network in tech industry",
            ],
        )],
        learning_paths: vec![learning_path(
            "1",
            "Digital Business & Analytics",
            "Combine business knowledge with technical skills",
            40,
            Difficulty::Beginner,
            "Business Tech",
            "12 weeks",
            &[
                "Python",
                "SQL",
                "Data Analysis",
                "Digital Marketing",
                "Product Management",
            ],
            2,
        )],
    }
}

fn general(profile: &UserProfile) -> Dashboard {
    Dashboard {
        recommendations: vec![recommendation(
            "1",
            RecommendationKind::Roadmap,
            "General Tech Career Roadmap",
            "Comprehensive roadmap for transitioning into tech careers",
            Priority::High,
            format!(
                "Based on your {} background and {} goals",
                profile.degree, profile.career_goals
            ),
            "General",
            &[
                "Learn programming fundamentals (Python, JavaScript)",
                "Understand software development basics",
                "Build portfolio projects",
                "Get relevant certifications",
                "Network with tech professionals",
                "Apply for entry-level positions",
            ],
        )],
        learning_paths: vec![learning_path(
            "1",
            "Programming Fundamentals",
            "Learn the basics of programming and software development",
            30,
            Difficulty::Beginner,
            "Programming",
            "10 weeks",
            &["Python", "JavaScript", "HTML/CSS", "Git", "Basic Algorithms"],
            1,
        )],
    }
}
