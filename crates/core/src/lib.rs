//! Core renderer module - pure, deterministic, and testable
//!
//! Everything needed to turn a pair of rotation angles into a shaded ASCII
//! torus. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same rotation and config always produce the same frame
//! - **Testable**: projection, depth test and gradient are plain functions
//! - **Fast**: the per-frame render reuses one buffer and does not allocate
//!
//! # Module Structure
//!
//! - [`surface`]: torus sampling, rotation, perspective projection and lighting
//! - [`gradient`]: lighting intensity to glyph lookup
//! - [`frame`]: depth-buffered frame and the [`FrameRenderer`]
//! - [`animation`]: rotation state owned by the render loop
//! - [`config`]: `DONUT_*` environment configuration
//!
//! # Example
//!
//! ```
//! use tui_donut_core::{Animation, FrameRenderer};
//! use tui_donut_types::{RenderConfig, Rotation, RotationSpeed, BLANK};
//!
//! let mut renderer = FrameRenderer::new(RenderConfig::default());
//! let frame = renderer.render(Rotation::new(0.0, 0.0));
//! assert!(frame.cells().iter().any(|c| c.glyph != BLANK));
//!
//! let mut anim = Animation::new(RenderConfig::default(), RotationSpeed::default());
//! anim.step();
//! assert_eq!(anim.rotation(), Rotation::new(0.08, 0.04));
//! ```

pub mod animation;
pub mod config;
pub mod frame;
pub mod gradient;
pub mod surface;

pub use tui_donut_types as types;

// Re-export commonly used types for convenience
pub use animation::{Animation, AnimationSnapshot};
pub use config::{log_path_from_env, DonutConfig};
pub use frame::{DepthCell, Frame, FrameRenderer, FrameStats};
pub use gradient::{glyph_at, gradient_index, gradient_position, intensity_char};
pub use surface::{luminance, project, sweep, Projected, RotationTrig, SampleTrig};
