//! Spinning ASCII donut (workspace facade crate).
//!
//! Re-exports `tui_donut::{core,input,term,types}` so the binary, tests and
//! benches share one import path while the implementation lives in the
//! crates under `crates/`.

pub use tui_donut_core as core;
pub use tui_donut_input as input;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
