//! Text-generation provider trait and request type.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::LlmError;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    #[serde(skip)]
    pub prompt: String,
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub top_p: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_length: 300,
            temperature: 0.7,
            do_sample: true,
            top_p: 0.9,
        }
    }
}

/// A backend that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name used in logs and errors.
    fn name(&self) -> &str;

    fn model_name(&self) -> &str;

    /// Generate text for `request`. Single attempt; callers decide what a
    /// failure means.
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_inference_parameters() {
        let request = GenerationRequest::new("hi");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_length"], 300);
        assert_eq!(json["do_sample"], true);
        assert!(json.get("prompt").is_none());
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert!((request.top_p - 0.9).abs() < f32::EPSILON);
    }
}
