//! Advice and translation services
//!
//! The view only talks to the two traits below. The Ollama-backed
//! implementations live in [`advice`] and [`translate`] and share one
//! [`OllamaClient`].

pub mod advice;
pub mod client;
pub mod translate;

use crate::errors::Result;
use crate::types::Assessment;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

// Re-export commonly used types
pub use advice::OllamaAdviceService;
pub use client::{OllamaClient, DEFAULT_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_TIMEOUT};
pub use translate::OllamaTranslator;

/// Produces an assessment for a health question
#[async_trait]
pub trait AdviceService: Send + Sync {
    /// Fetch an assessment. Returns `AdvisorError::Cancelled` once `cancel`
    /// fires.
    async fn get_health_advice(
        &self,
        question: &str,
        cancel: &CancellationToken,
    ) -> Result<Assessment>;
}

/// Translates English text to Hindi
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_to_hindi(&self, text: &str, cancel: &CancellationToken) -> Result<String>;
}
