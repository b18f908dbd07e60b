//! Terminal shell around the donut renderer.
//!
//! A small rendering layer that copies a rendered [`core::Frame`] into a
//! styled framebuffer and flushes it to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the per-frame path allocation-free once buffers are warm
//! - Only rewrite the cells that changed between frames

pub mod donut_view;
pub mod fb;
pub mod pacer;
pub mod renderer;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use donut_view::{debug_readout, DonutView, Viewport, KEY_HINT, LEFT_MARGIN, TOP_MARGIN};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use pacer::FramePacer;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
