//! Rule-based career guidance engine.
//!
//! Three pure components, all total over their inputs:
//!
//! - [`intent`]: maps a normalized message to the set of matched [`Intent`]s
//!   using an ordered keyword rule table.
//! - [`composer`]: renders the guidance text for an intent, personalized when a
//!   [`UserProfile`] is present and generic otherwise.
//! - [`recommend`]: derives the dashboard's roadmap recommendations and learning
//!   paths from a profile's degree.
//!
//! Composed text is plain text. Profile fields are interpolated verbatim, so
//! callers rendering it as markup must escape it first.

pub mod composer;
pub mod intent;
pub mod profile;
pub mod recommend;
pub mod templates;
pub mod tracks;

pub use composer::{compose, greeting, respond, suggested_questions};
pub use intent::{Intent, IntentSet, NormalizedMessage, classify};
pub use profile::UserProfile;
pub use recommend::{
    Dashboard, Difficulty, LearningPath, Priority, Recommendation, RecommendationKind, generate,
};
pub use tracks::{DegreeTrack, GoalTrack};
