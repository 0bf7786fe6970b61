//! HealthBuddy v0.3.0 - AI Health Assessment in the Terminal
//!
//! Ask a local Ollama model about a health concern and read a structured
//! assessment (issue, urgency, advice, referral) in English or Hindi.
//!
//! # Architecture
//!
//! - **services**: advice and translation traits plus Ollama implementations
//! - **view**: headless card state, localized strings, themes, rendering
//! - **session**: interactive prompt around one card
//! - **cli**: arguments and TOML configuration

pub mod errors;
pub mod types;

// Re-export commonly used types
pub use errors::{AdvisorError, Result};

pub mod services;
pub mod view;
pub mod navigation;

pub mod cli;
pub mod logging;
pub mod session;
