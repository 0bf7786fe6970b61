//! Ollama-backed advice service
//!
//! Asks the model for a single JSON object describing the issue, its
//! urgency, what to do, and whether to see a doctor. Models sometimes wrap
//! the object in prose or code fences even in JSON mode, so balanced
//! objects are pulled out of the reply and decoded until one fits.

use crate::errors::{AdvisorError, Result};
use crate::services::{AdviceService, OllamaClient};
use crate::types::Assessment;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const ADVICE_SYSTEM_PROMPT: &str = r#"You are a careful medical triage assistant. You do not diagnose; you give general guidance.

RESPONSE FORMAT - respond with ONE JSON object only:
{"issue": "<short description of the likely issue>",
 "urgency": "Low" | "Medium" | "High",
 "advice": "<two to four sentences of practical next steps>",
 "shouldSeeDoctor": <false | true | "<specialist name, e.g. Cardiologist>">}

RULES:
1. Output ONLY the JSON object (no markdown, no explanations)
2. Use "High" urgency for anything that may need emergency care
3. Name a specialist in shouldSeeDoctor when one is clearly appropriate, otherwise use true or false"#;

/// Advice service backed by an Ollama model
#[derive(Debug, Clone)]
pub struct OllamaAdviceService {
    client: OllamaClient,
}

impl OllamaAdviceService {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdviceService for OllamaAdviceService {
    async fn get_health_advice(
        &self,
        question: &str,
        cancel: &CancellationToken,
    ) -> Result<Assessment> {
        info!(model = %self.client.model(), "requesting health advice");
        let prompt = format!("Health question: {}", question.trim());
        let reply = self
            .client
            .generate(ADVICE_SYSTEM_PROMPT, &prompt, true, cancel)
            .await?;
        debug!(reply = %reply, "advice reply");
        parse_assessment(&reply)
    }
}

/// Decode an assessment from raw model output.
///
/// Each balanced object in the reply is tried in order; the first that
/// decodes wins, so prose like `{like this}` ahead of the real object is
/// skipped.
pub fn parse_assessment(reply: &str) -> Result<Assessment> {
    let mut last_error = None;

    for candidate in json_objects(reply) {
        match serde_json::from_str::<Assessment>(candidate) {
            Ok(assessment) => return validate(assessment),
            Err(e) => {
                debug!(candidate = %candidate, error = %e, "skipping non-assessment object");
                last_error = Some(e);
            }
        }
    }

    Err(AdvisorError::MalformedResponse(match last_error {
        Some(e) => e.to_string(),
        None => "no JSON object in model reply".to_string(),
    }))
}

fn validate(assessment: Assessment) -> Result<Assessment> {
    if assessment.issue.trim().is_empty() || assessment.advice.trim().is_empty() {
        return Err(AdvisorError::MalformedResponse(
            "assessment is missing issue or advice text".to_string(),
        ));
    }

    Ok(assessment)
}

/// Find the first balanced `{...}` in `text`, ignoring braces inside strings
pub fn extract_json_object(text: &str) -> Option<&str> {
    json_objects(text).into_iter().next()
}

/// Every balanced top-level `{...}` in `text`, in order
pub fn json_objects(text: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if in_string {
            match ch {
                '\\' => escape_next = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    objects.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    objects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Referral;

    #[test]
    fn test_extract_plain_object() {
        let text = r#"{"issue": "a"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_extract_from_code_fence() {
        let text = "Here you go:\n```json\n{\"issue\": \"a\", \"n\": {\"x\": 1}}\n```";
        assert_eq!(
            extract_json_object(text),
            Some("{\"issue\": \"a\", \"n\": {\"x\": 1}}")
        );
    }

    #[test]
    fn test_braces_in_strings_are_ignored() {
        let text = r#"{"advice": "use {ice} \"packs\" }"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_unbalanced_returns_none() {
        assert_eq!(extract_json_object("{\"issue\": \"a\""), None);
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_quotes_outside_objects_are_plain_text() {
        let text = r#"He said "hi" then {"a": 1} and {"b": "}"}"#;
        assert_eq!(json_objects(text), vec![r#"{"a": 1}"#, r#"{"b": "}"}"#]);
    }

    #[test]
    fn test_parse_assessment_skips_braced_prose() {
        let reply = r#"Format {like this}: {"issue": "Sprained ankle", "urgency": "Low", "advice": "Rest, ice and elevate it.", "shouldSeeDoctor": false}"#;
        let a = parse_assessment(reply).unwrap();
        assert_eq!(a.issue, "Sprained ankle");
        assert_eq!(a.referral, Referral::NoReferral);
    }

    #[test]
    fn test_parse_assessment_without_object() {
        assert!(matches!(
            parse_assessment("I cannot help with that."),
            Err(AdvisorError::MalformedResponse(ref m)) if m.contains("no JSON object")
        ));
    }

    #[test]
    fn test_parse_assessment_with_specialist() {
        let reply = r#"```json
{"issue": "Possible angina", "urgency": "High", "advice": "Stop exertion and get checked today.", "shouldSeeDoctor": "Cardiologist"}
```"#;
        let a = parse_assessment(reply).unwrap();
        assert_eq!(a.issue, "Possible angina");
        assert_eq!(a.urgency, "High");
        assert_eq!(a.referral, Referral::SpecialistReferral("Cardiologist".to_string()));
    }

    #[test]
    fn test_parse_assessment_rejects_empty_fields() {
        let reply = r#"{"issue": "", "urgency": "Low", "advice": "x", "shouldSeeDoctor": false}"#;
        assert!(matches!(
            parse_assessment(reply),
            Err(AdvisorError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_assessment_rejects_missing_fields() {
        let reply = r#"{"issue": "Cough"}"#;
        assert!(parse_assessment(reply).is_err());
    }
}
