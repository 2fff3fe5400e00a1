//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameCommand`].
//! Keys map one to one; a mouse press/release pair is read as a swipe
//! gesture. Nothing here touches game state.

pub mod gesture;
pub mod map;

pub use blockfall_types as types;

pub use gesture::{command_for_swipe, SwipeTracker};
pub use map::{handle_key_event, should_quit, should_restart};
