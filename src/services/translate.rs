//! Ollama-backed Hindi translator

use crate::errors::{AdvisorError, Result};
use crate::services::{OllamaClient, Translator};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::info;

const TRANSLATION_SYSTEM_PROMPT: &str = r#"You are a medical translator. Translate the user's text from English to Hindi (Devanagari script).

RULES:
1. Respond with ONLY the Hindi translation
2. Keep medicine names, dosages and specialist titles recognisable
3. Do not add advice, notes, quotes or transliteration"#;

/// Translator backed by an Ollama model
#[derive(Debug, Clone)]
pub struct OllamaTranslator {
    client: OllamaClient,
}

impl OllamaTranslator {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate_to_hindi(&self, text: &str, cancel: &CancellationToken) -> Result<String> {
        info!(model = %self.client.model(), chars = text.len(), "requesting Hindi translation");
        let reply = self
            .client
            .generate(TRANSLATION_SYSTEM_PROMPT, text, false, cancel)
            .await?;
        clean_translation(&reply)
    }
}

/// Trim the reply and strip quoting the model sometimes adds
pub fn clean_translation(reply: &str) -> Result<String> {
    let cleaned = reply
        .trim()
        .trim_matches(|c| c == '"' || c == '“' || c == '”' || c == '`')
        .trim();

    if cleaned.is_empty() {
        return Err(AdvisorError::MalformedResponse(
            "empty translation".to_string(),
        ));
    }

    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_translation_trims() {
        assert_eq!(clean_translation("  \"सिरदर्द\"\n").unwrap(), "सिरदर्द");
        assert_eq!(clean_translation("आराम करें।").unwrap(), "आराम करें।");
    }

    #[test]
    fn test_clean_translation_rejects_empty() {
        assert!(clean_translation("   ").is_err());
        assert!(clean_translation("\"\"").is_err());
    }
}
