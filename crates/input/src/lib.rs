//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::DonutAction`] and batches the
//! actions that arrive during one frame without allocating.

pub mod batch;
pub mod map;

pub use tui_donut_types as types;

pub use batch::{ActionBatch, MAX_ACTIONS_PER_FRAME};
pub use map::{handle_key_event, should_quit};
