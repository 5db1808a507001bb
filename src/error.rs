//! Error types for EduAI.
//!
//! The guidance engine itself has no error type: classification, composition
//! and recommendation are total. Everything here belongs to the surrounding
//! service (configuration, the text-generation call, demo stores, the gateway).

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Channel-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },
}

/// Text-generation provider errors.
///
/// Never surfaced to chat users: the guidance service logs and discards them.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },
}

/// Demo store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid {entity}: {reason}")]
    Invalid { entity: String, reason: String },
}
