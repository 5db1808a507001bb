//! Configuration for EduAI.
//!
//! Every value comes from the environment (a `.env` file in the working
//! directory is loaded first if present). Each area resolves independently and
//! reports the offending key on failure.

mod demo;
mod gateway;
mod llm;

pub use self::demo::DemoConfig;
pub use self::gateway::GatewayConfig;
pub use self::llm::{HF_KEY_PLACEHOLDER, HuggingFaceConfig, LlmConfig};

use crate::error::ConfigError;

/// Main configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub llm: LlmConfig,
    pub demo: DemoConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            gateway: GatewayConfig::resolve()?,
            llm: LlmConfig::resolve()?,
            demo: DemoConfig::resolve()?,
        })
    }
}

pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}

/// Env vars are process-global, so tests that mutate them hold this lock.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
