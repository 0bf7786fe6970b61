//! Render state machine for the assessment card
//!
//! Valid transitions:
//! 1. Loading --AdviceLoaded-->      Ready
//! 2. Loading --AdviceFailed-->      Error
//! 3. Ready   --TranslationLoaded--> Ready
//! 4. Ready   --TranslationFailed--> Error
//! 5. Error   --*-->                 Error (terminal)

use crate::errors::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// What the card is currently able to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderState {
    /// No assessment and no error yet
    Loading,

    /// Assessment available
    Ready,

    /// Error message replaces all content (terminal)
    Error,
}

/// Outcomes of the two asynchronous calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    AdviceLoaded,
    AdviceFailed,
    TranslationLoaded,
    TranslationFailed,
}

impl RenderState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RenderState::Error)
    }

    /// Attempt a transition
    pub fn transition(&self, event: RenderEvent) -> Result<RenderState> {
        use RenderEvent::*;
        use RenderState::*;

        let next = match (self, event) {
            (Loading, AdviceLoaded) => Ready,
            (Loading, AdviceFailed) => Error,
            (Ready, TranslationLoaded) => Ready,
            (Ready, TranslationFailed) => Error,
            (Error, _) => Error,
            (from, event) => {
                return Err(AdvisorError::InvalidTransition {
                    from: format!("{:?}", from),
                    event: format!("{:?}", event),
                });
            }
        };

        Ok(next)
    }
}
