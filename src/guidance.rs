//! Chat guidance service.
//!
//! Wraps the rule-based engine with the optional text-generation call. The
//! composed template text is authoritative; generated text is only ever a
//! prefix, and any generation failure is logged and dropped.

use std::sync::Arc;

use eduai_guidance::{NormalizedMessage, UserProfile};

use crate::llm::{GenerationRequest, TextGenerator};

/// Response returned when the chat path fails unexpectedly.
pub const FALLBACK_RESPONSE: &str = "I'm here to help you with your career planning! Please tell me about your educational background, current skills, and career goals so I can provide personalized guidance and roadmaps.";

/// Generated text at or below this many characters is discarded.
const MIN_GENERATED_CHARS: usize = 20;

#[derive(Clone, Default)]
pub struct GuidanceService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl GuidanceService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// Templates only, no outbound calls.
    pub fn templated() -> Self {
        Self::default()
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Answer a chat message.
    ///
    /// `message` is the raw user text; it is normalized for classification but
    /// passed verbatim into the generation prompt.
    pub async fn respond(&self, message: &str, profile: Option<&UserProfile>) -> String {
        let normalized = NormalizedMessage::new(message);
        let composed = eduai_guidance::respond(&normalized, profile);

        let Some(generator) = self.generator.as_ref() else {
            return composed;
        };

        let request = GenerationRequest::new(counsellor_prompt(message, profile));
        match generator.generate(request).await {
            Ok(generated) if generated.chars().count() > MIN_GENERATED_CHARS => {
                tracing::debug!(
                    provider = generator.name(),
                    chars = generated.chars().count(),
                    "Prepending generated text"
                );
                format!("{generated}\n\n{composed}")
            }
            Ok(_) => {
                tracing::debug!(provider = generator.name(), "Generated text too short, ignoring");
                composed
            }
            Err(e) => {
                tracing::warn!(provider = generator.name(), "Text generation failed: {}", e);
                composed
            }
        }
    }
}

fn counsellor_prompt(message: &str, profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "You are an expert career counselor. User Profile: {} has a {} degree, {} experience, and wants to become a {}. User asks: {}. Provide detailed, personalized career guidance with specific steps and recommendations based on their background.",
            p.name, p.degree, p.experience, p.career_goals, message
        ),
        None => format!(
            "You are an expert career counselor specializing in tech careers. A student asks: {}. Provide detailed, practical career guidance with specific steps and recommendations.",
            message
        ),
    }
}
