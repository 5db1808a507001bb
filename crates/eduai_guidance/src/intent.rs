//! Deterministic intent classification.
//!
//! Classification is a single pass over [`INTENT_RULES`]: every rule whose
//! keyword set has a substring hit in the message contributes its intent.
//! Consumers resolve overlaps by rule order (see [`IntentSet::primary`]).
//! That order (roadmap, skills, career, qualification, help) is kept as-is for
//! behavioral compatibility; nothing beyond compatibility motivates it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse category a user message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Roadmap,
    Skills,
    Career,
    Qualification,
    Help,
    None,
}

impl Intent {
    /// Matchable intents, highest priority first. `None` is never matched.
    pub const PRIORITY: [Intent; 5] = [
        Intent::Roadmap,
        Intent::Skills,
        Intent::Career,
        Intent::Qualification,
        Intent::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Skills => "skills",
            Self::Career => "career",
            Self::Qualification => "qualification",
            Self::Help => "help",
            Self::None => "none",
        }
    }

    /// Position in [`Intent::PRIORITY`]; `None` ranks after everything.
    pub fn rank(&self) -> usize {
        match self {
            Self::Roadmap => 0,
            Self::Skills => 1,
            Self::Career => 2,
            Self::Qualification => 3,
            Self::Help => 4,
            Self::None => 5,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::None => 0,
            other => 1 << other.rank(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// Ordered classification rules. Order is priority.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Roadmap,
        keywords: &["roadmap", "path", "plan"],
    },
    IntentRule {
        intent: Intent::Skills,
        keywords: &["skill", "learn", "technology"],
    },
    IntentRule {
        intent: Intent::Career,
        keywords: &["career", "job", "work"],
    },
    IntentRule {
        intent: Intent::Qualification,
        keywords: &["qualification", "degree", "background"],
    },
    IntentRule {
        intent: Intent::Help,
        keywords: &["help", "guide", "advice"],
    },
];

/// A user message lower-cased once at the boundary.
///
/// All keyword tests in this crate run against a `NormalizedMessage`, which
/// makes matching case-insensitive without re-allocating per rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedMessage(String);

impl NormalizedMessage {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any keyword occurs as a substring.
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        contains_any(&self.0, keywords)
    }
}

impl From<&str> for NormalizedMessage {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

pub(crate) fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Set of matched intents, iterated in priority order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentSet(u8);

impl IntentSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, intent: Intent) {
        self.0 |= intent.bit();
    }

    pub fn contains(&self, intent: Intent) -> bool {
        match intent {
            Intent::None => self.is_empty(),
            other => self.0 & other.bit() != 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Matched intents, highest priority first.
    pub fn iter(self) -> impl Iterator<Item = Intent> {
        Intent::PRIORITY
            .into_iter()
            .filter(move |intent| self.contains(*intent))
    }

    /// The winning intent: first match in priority order, `None` if empty.
    pub fn primary(&self) -> Intent {
        self.iter().next().unwrap_or(Intent::None)
    }

    /// Matched intents ranked strictly below `intent`.
    pub fn below(self, intent: Intent) -> impl Iterator<Item = Intent> {
        let rank = intent.rank();
        self.iter().filter(move |i| i.rank() > rank)
    }
}

impl FromIterator<Intent> for IntentSet {
    fn from_iter<T: IntoIterator<Item = Intent>>(iter: T) -> Self {
        let mut set = Self::empty();
        for intent in iter {
            set.insert(intent);
        }
        set
    }
}

/// Classify a message against [`INTENT_RULES`].
///
/// Pure and allocation-free. An empty message matches nothing, so its
/// [`IntentSet::primary`] is [`Intent::None`].
pub fn classify(message: &NormalizedMessage) -> IntentSet {
    INTENT_RULES
        .iter()
        .filter(|rule| message.contains_any(rule.keywords))
        .map(|rule| rule.intent)
        .collect()
}
