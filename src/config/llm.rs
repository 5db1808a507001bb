use secrecy::{ExposeSecret, SecretString};

use crate::config::optional_env;
use crate::error::ConfigError;

/// Value shipped in sample `.env` files; treated the same as an unset key.
pub const HF_KEY_PLACEHOLDER: &str = "your_huggingface_api_key_here";

const DEFAULT_HF_MODEL: &str = "microsoft/DialoGPT-medium";
const DEFAULT_HF_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Text-generation configuration.
///
/// The text-generation call is optional: without an API key the chat endpoint
/// answers from templates alone.
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub huggingface: Option<HuggingFaceConfig>,
}

/// Configuration for the Hugging Face inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
}

impl LlmConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let api_key = optional_env("HUGGINGFACE_API_KEY")?
            .filter(|key| key != HF_KEY_PLACEHOLDER)
            .map(SecretString::from);

        let Some(api_key) = api_key else {
            return Ok(Self::default());
        };

        let model = optional_env("HUGGINGFACE_MODEL")?.unwrap_or_else(|| DEFAULT_HF_MODEL.to_string());
        let base_url = optional_env("HUGGINGFACE_BASE_URL")?
            .unwrap_or_else(|| DEFAULT_HF_BASE_URL.to_string());
        validate_base_url("HUGGINGFACE_BASE_URL", &base_url)?;

        Ok(Self {
            huggingface: Some(HuggingFaceConfig {
                api_key,
                model,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Whether a text-generation backend is configured.
    pub fn is_enabled(&self) -> bool {
        self.huggingface
            .as_ref()
            .is_some_and(|hf| !hf.api_key.expose_secret().is_empty())
    }
}

fn validate_base_url(key: &str, raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("'{raw}' is not a valid URL: {e}"),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("unsupported scheme '{other}', expected http or https"),
        }),
    }
}
