//! Animation module - render loop state
//!
//! [`Animation`] is the only writer of the rotation angles. Each
//! [`Animation::step`] renders the current orientation and then advances it
//! by the current speed. Readers that only want to display state (the debug
//! readout) take an [`AnimationSnapshot`] copy.

use crate::frame::{Frame, FrameRenderer, FrameStats};
use crate::types::{RenderConfig, Rotation, RotationSpeed, SPEED_STEP};

/// Read-only copy of the animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSnapshot {
    pub rotation: Rotation,
    pub speed: RotationSpeed,
    /// Number of frames rendered so far.
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
pub struct Animation {
    rotation: Rotation,
    speed: RotationSpeed,
    frame_index: u64,
    renderer: FrameRenderer,
}

impl Animation {
    pub fn new(config: RenderConfig, speed: RotationSpeed) -> Self {
        Self::with_rotation(config, speed, Rotation::default())
    }

    pub fn with_rotation(config: RenderConfig, speed: RotationSpeed, rotation: Rotation) -> Self {
        Self {
            rotation,
            speed: speed.clamped(),
            frame_index: 0,
            renderer: FrameRenderer::new(config),
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn speed(&self) -> RotationSpeed {
        self.speed
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn snapshot(&self) -> AnimationSnapshot {
        AnimationSnapshot {
            rotation: self.rotation,
            speed: self.speed,
            frame_index: self.frame_index,
        }
    }

    /// Render the frame for the current rotation, then advance the rotation.
    pub fn step(&mut self) -> &Frame {
        let rotation = self.rotation;
        self.rotation.advance(self.speed);
        self.frame_index += 1;
        self.renderer.render(rotation)
    }

    /// The frame produced by the last [`Animation::step`] (blank before the first).
    pub fn frame(&self) -> &Frame {
        self.renderer.frame()
    }

    pub fn stats(&self) -> FrameStats {
        self.renderer.stats()
    }

    /// Replace the speed; magnitudes are clamped as for the speed knobs.
    pub fn set_speed(&mut self, speed: RotationSpeed) {
        self.speed = speed.clamped();
    }

    pub fn speed_up(&mut self) -> RotationSpeed {
        self.speed = self.speed.scaled(SPEED_STEP);
        self.speed
    }

    pub fn speed_down(&mut self) -> RotationSpeed {
        self.speed = self.speed.scaled(1.0 / SPEED_STEP);
        self.speed
    }
}
