//! Text-generation integration.
//!
//! The chat endpoint may prepend model output to its templated guidance. The
//! only backend is the Hugging Face inference API; tests substitute their own
//! [`TextGenerator`].

mod huggingface;
mod provider;

pub use huggingface::HuggingFaceProvider;
pub use provider::{GenerationRequest, TextGenerator};

use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::LlmError;

/// Create the configured text generator, if any.
///
/// Returns `Ok(None)` when no API key is configured; the service then answers
/// from templates alone.
pub fn create_text_generator(
    config: &LlmConfig,
) -> Result<Option<Arc<dyn TextGenerator>>, LlmError> {
    match config.huggingface {
        Some(ref hf) if config.is_enabled() => {
            let provider = HuggingFaceProvider::new(hf.clone())?;
            tracing::info!("Using Hugging Face inference API (model: {})", hf.model);
            Ok(Some(Arc::new(provider)))
        }
        _ => {
            tracing::info!("No text-generation API key configured, using templated guidance only");
            Ok(None)
        }
    }
}
