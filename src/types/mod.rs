//! Type definitions module
//!
//! Core records shared by the services and the view.

pub mod assessment;
pub mod language;

// Re-export commonly used types
pub use assessment::{Assessment, Referral, UrgencyLevel};
pub use language::Language;
