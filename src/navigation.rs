//! Navigation in and out of the assessment card
//!
//! The card is opened with a [`NavigationPayload`] and leaves through one of
//! two [`Route`]s. Where those routes lead is up to the injected
//! [`Navigator`], which keeps the view free of any global router.

use crate::types::Language;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tracing::info;

/// State handed to the card when it is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPayload {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl NavigationPayload {
    pub fn new(question: impl Into<String>, language: Option<Language>) -> Self {
        Self {
            question: question.into(),
            language,
        }
    }
}

/// Outbound destinations; neither carries parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    TalkToDoctor,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::TalkToDoctor => "/talk-to-doctor",
            Route::Home => "/",
        }
    }

    /// Key into the string table for the message shown on departure
    pub fn message_key(&self) -> &'static str {
        match self {
            Route::TalkToDoctor => "nav.doctor",
            Route::Home => "nav.home",
        }
    }

    /// Whether following this route ends the card's session
    pub fn leaves_card(&self) -> bool {
        matches!(self, Route::Home)
    }
}

/// Receives outbound navigation requests
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator for the terminal: announces the destination
#[derive(Debug, Clone, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        info!(route = route.path(), "navigating");
        println!("{} {}", "→".cyan(), route.path().dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_json() {
        let payload: NavigationPayload =
            serde_json::from_str(r#"{"question": "I have a fever", "language": "Hindi"}"#).unwrap();
        assert_eq!(payload.question, "I have a fever");
        assert_eq!(payload.language, Some(Language::Hindi));

        let payload: NavigationPayload =
            serde_json::from_str(r#"{"question": "cough"}"#).unwrap();
        assert_eq!(payload.language, None);
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::TalkToDoctor.path(), "/talk-to-doctor");
        assert_eq!(Route::Home.path(), "/");
        assert!(Route::Home.leaves_card());
        assert!(!Route::TalkToDoctor.leaves_card());
    }
}
