//! Notification synthesis and scheduling.
//!
//! Pipeline: Condition Profile → template expansion (trigger templates +
//! medication reminders + generic wellness) → id assignment + attribution →
//! active-window filtering against a caller-supplied clock.

mod active;
mod synthesizer;

pub use active::*;
pub use synthesizer::*;
