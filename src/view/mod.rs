//! Assessment card
//!
//! [`AssessmentView`] holds the state; [`render_card`] turns it into text.

pub mod activity;
pub mod model;
pub mod render;
pub mod state;
pub mod strings;
pub mod theme;

// Re-export commonly used types
pub use activity::Activity;
pub use model::AssessmentView;
pub use render::render_card;
pub use state::{RenderEvent, RenderState};
pub use theme::{Palette, Theme};
