//! Hugging Face inference API provider.
//!
//! Posts `{inputs, parameters}` to `{base_url}/models/{model}` and reads
//! `[0].generated_text` from the response.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::HuggingFaceConfig;
use crate::error::LlmError;
use crate::llm::provider::{GenerationRequest, TextGenerator};

/// Provider name constant to avoid magic strings.
const PROVIDER_NAME: &str = "huggingface";

/// Longest slice of an error body echoed into error messages.
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[derive(Serialize)]
struct InferenceBody<'a> {
    inputs: &'a str,
    parameters: &'a GenerationRequest,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: Option<String>,
}

pub struct HuggingFaceProvider {
    client: Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceProvider {
    pub fn new(config: HuggingFaceConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("Failed to build reqwest client: {}", e),
            })?;
        Ok(Self { client, config })
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model.trim_start_matches('/')
        )
    }
}

fn preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect()
}

/// Extract the first generated text from an inference response body.
fn parse_generated_text(body: &str) -> Result<String, LlmError> {
    let items: Vec<GeneratedText> =
        serde_json::from_str(body).map_err(|e| LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("JSON parse error: {}. Raw: {}", e, preview(body)),
        })?;

    items
        .into_iter()
        .next()
        .and_then(|item| item.generated_text)
        .ok_or_else(|| LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: "response contained no generated_text".to_string(),
        })
}

#[async_trait]
impl TextGenerator for HuggingFaceProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError> {
        let url = self.model_url();
        tracing::debug!("Sending request to Hugging Face inference endpoint: {}", url);

        let body = InferenceBody {
            inputs: &request.prompt,
            parameters: &request,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| LlmError::RequestFailed {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        tracing::debug!("Hugging Face response status: {}", status);

        if !status.is_success() {
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(LlmError::AuthFailed {
                    provider: PROVIDER_NAME.to_string(),
                });
            }
            return Err(LlmError::RequestFailed {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("HTTP {}: {}", status, preview(&response_text)),
            });
        }

        parse_generated_text(&response_text)
    }
}
