//! Domain models for the healthbot system.

mod condition;
mod menu;
mod notification;

pub use condition::*;
pub use menu::*;
pub use notification::*;
