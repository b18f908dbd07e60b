//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (renderer core, terminal view, input mapping).
//!
//! # Grid Dimensions
//!
//! The torus is drawn into a small fixed character grid:
//!
//! - **Width**: 40 columns (indexed 0-39)
//! - **Height**: 27 rows (indexed 0-26)
//! - Row 0 and column 0 are never written by the renderer
//!
//! # Rendering Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `IMAGE_SCALE` | 15.0 | Projection scale (x is doubled for cell aspect) |
//! | `SWEEP_PERIOD` | 6.28 | Period swept by both surface parameters |
//! | `DELTA_I` | 0.02 | Tube angle step (fine) |
//! | `DELTA_J` | 0.07 | Revolution angle step (coarse) |
//! | `DELTA_A` | 0.08 | Default per-frame rotation about axis A |
//! | `DELTA_B` | 0.04 | Default per-frame rotation about axis B |
//! | `FRAME_MS` | 16 | Default frame interval (~60 Hz refresh) |
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{Rotation, RotationSpeed, GRADIENT, BUFFER_WIDTH, BUFFER_HEIGHT};
//!
//! let mut rotation = Rotation::default();
//! rotation.advance(RotationSpeed::default());
//! assert_eq!(rotation.a, 0.08);
//! assert_eq!(rotation.b, 0.04);
//!
//! assert_eq!(GRADIENT.len(), 12);
//! assert_eq!(BUFFER_WIDTH, 40);
//! assert_eq!(BUFFER_HEIGHT, 27);
//! ```

/// Grid width in character cells (40 columns)
pub const BUFFER_WIDTH: u16 = 40;

/// Grid height in character cells (27 rows)
pub const BUFFER_HEIGHT: u16 = 27;

/// Projection scale factor applied after the perspective divide
pub const IMAGE_SCALE: f64 = 15.0;

/// Period swept by both surface parameters.
///
/// Slightly short of a full turn; the last sample of each sweep lands just
/// under 2π and the visible seam is narrower than one step.
pub const SWEEP_PERIOD: f64 = 6.28;

/// Tube cross-section angle step (inverse of sample density)
pub const DELTA_I: f64 = 0.02;

/// Revolution angle step (inverse of sample density)
pub const DELTA_J: f64 = 0.07;

/// Default rotation increment about axis A per frame (radians)
pub const DELTA_A: f64 = 0.08;

/// Default rotation increment about axis B per frame (radians)
pub const DELTA_B: f64 = 0.04;

/// Distance from the torus axis to the tube centre (tube radius is 1)
pub const TUBE_OFFSET: f64 = 2.0;

/// Viewer distance added to the rotated depth before the perspective divide
pub const VIEWER_DISTANCE: f64 = 5.0;

/// Upper bound of the lighting range mapped onto the gradient
pub const INTENSITY_RANGE: f64 = 1.5;

/// Default frame interval in milliseconds (16ms ≈ 60 Hz)
pub const FRAME_MS: u32 = 16;

/// Glyph written to cells no surface sample reached
pub const BLANK: char = ' ';

/// Intensity gradient from sparsest to densest glyph.
pub const GRADIENT: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Multiplier applied to both rotation deltas by a speed knob press
pub const SPEED_STEP: f64 = 1.25;

/// Smallest per-frame delta magnitude the speed knobs will go down to
pub const MIN_DELTA: f64 = 0.005;

/// Largest per-frame delta magnitude the speed knobs will go up to
pub const MAX_DELTA: f64 = 0.5;

/// Geometry and sampling parameters for one renderer instance.
///
/// The defaults reproduce the classic 40x27 donut. Every field can be
/// overridden without changing the algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u16,
    pub height: u16,
    pub scale: f64,
    /// Tube angle step.
    pub step_i: f64,
    /// Revolution angle step.
    pub step_j: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: BUFFER_WIDTH,
            height: BUFFER_HEIGHT,
            scale: IMAGE_SCALE,
            step_i: DELTA_I,
            step_j: DELTA_J,
        }
    }
}

impl RenderConfig {
    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Orientation of the torus around its two rotation axes (radians).
///
/// Angles grow without bound; every consumer goes through periodic trig
/// functions so no wrapping is needed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub a: f64,
    pub b: f64,
}

impl Rotation {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Advance both angles by one frame's worth of rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_donut_types::{Rotation, RotationSpeed};
    ///
    /// let mut r = Rotation::new(1.0, 2.0);
    /// r.advance(RotationSpeed::new(0.5, 0.25));
    /// assert_eq!(r, Rotation::new(1.5, 2.25));
    /// ```
    pub fn advance(&mut self, speed: RotationSpeed) {
        self.a += speed.delta_a;
        self.b += speed.delta_b;
    }
}

/// Per-frame rotation increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSpeed {
    pub delta_a: f64,
    pub delta_b: f64,
}

impl Default for RotationSpeed {
    fn default() -> Self {
        Self {
            delta_a: DELTA_A,
            delta_b: DELTA_B,
        }
    }
}

impl RotationSpeed {
    pub const fn new(delta_a: f64, delta_b: f64) -> Self {
        Self { delta_a, delta_b }
    }

    /// Both deltas with their magnitude pulled into `[MIN_DELTA, MAX_DELTA]`.
    /// A zero delta stays zero, so a paused axis stays paused.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_donut_types::{RotationSpeed, MAX_DELTA, MIN_DELTA};
    ///
    /// let s = RotationSpeed::new(-1e30, 0.0001).clamped();
    /// assert_eq!(s, RotationSpeed::new(-MAX_DELTA, MIN_DELTA));
    /// ```
    pub fn clamped(self) -> Self {
        Self {
            delta_a: clamp_delta(self.delta_a),
            delta_b: clamp_delta(self.delta_b),
        }
    }

    /// Multiply both deltas by `factor`, then clamp as [`RotationSpeed::clamped`].
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.delta_a * factor, self.delta_b * factor).clamped()
    }
}

fn clamp_delta(delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    delta.signum() * delta.abs().clamp(MIN_DELTA, MAX_DELTA)
}

/// Actions the terminal shell can apply to a running animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonutAction {
    /// Stop the render loop after the current frame
    Quit,
    /// Show or hide the rotation speed readout
    ToggleDebug,
    /// Spin faster
    SpeedUp,
    /// Spin slower
    SpeedDown,
}

impl DonutAction {
    /// Stable camelCase name, used as the `action` field of log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            DonutAction::Quit => "quit",
            DonutAction::ToggleDebug => "toggleDebug",
            DonutAction::SpeedUp => "speedUp",
            DonutAction::SpeedDown => "speedDown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_donut_defaults() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.width, 40);
        assert_eq!(cfg.height, 27);
        assert_eq!(cfg.scale, 15.0);
        assert_eq!(cfg.step_i, 0.02);
        assert_eq!(cfg.step_j, 0.07);
        assert_eq!(cfg.cell_count(), 1080);

        let speed = RotationSpeed::default();
        assert_eq!(speed.delta_a, 0.08);
        assert_eq!(speed.delta_b, 0.04);
    }

    #[test]
    fn gradient_is_sparse_to_dense() {
        assert_eq!(GRADIENT[0], '.');
        assert_eq!(GRADIENT[11], '@');
        assert!(!GRADIENT.contains(&BLANK));
    }

    #[test]
    fn speed_scaling_clamps_magnitude_and_keeps_sign() {
        let fast = RotationSpeed::new(0.4, -0.4).scaled(10.0);
        assert_eq!(fast.delta_a, MAX_DELTA);
        assert_eq!(fast.delta_b, -MAX_DELTA);

        let slow = RotationSpeed::new(0.01, -0.01).scaled(0.01);
        assert_eq!(slow.delta_a, MIN_DELTA);
        assert_eq!(slow.delta_b, -MIN_DELTA);

        let still = RotationSpeed::new(0.0, 0.04).scaled(2.0);
        assert_eq!(still.delta_a, 0.0);
        assert_eq!(still.delta_b, 0.08);
    }

    #[test]
    fn clamped_leaves_in_range_speeds_alone() {
        assert_eq!(RotationSpeed::default().clamped(), RotationSpeed::default());
        assert_eq!(
            RotationSpeed::new(1e30, -1e30).clamped(),
            RotationSpeed::new(MAX_DELTA, -MAX_DELTA)
        );
        assert_eq!(
            RotationSpeed::new(0.0, -1e-9).clamped(),
            RotationSpeed::new(0.0, -MIN_DELTA)
        );
    }

    #[test]
    fn action_log_names() {
        assert_eq!(DonutAction::Quit.as_str(), "quit");
        assert_eq!(DonutAction::ToggleDebug.as_str(), "toggleDebug");
        assert_eq!(DonutAction::SpeedUp.as_str(), "speedUp");
        assert_eq!(DonutAction::SpeedDown.as_str(), "speedDown");
    }
}
