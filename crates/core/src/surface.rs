//! Surface module - torus sampling, rotation and projection
//!
//! A surface point is addressed by the tube angle `i` and the revolution
//! angle `j`. The torus has tube radius 1 centred 2 units from its axis,
//! is rotated by `A` and `B`, pushed 5 units away from the viewer and
//! projected with a perspective divide. All functions here are pure.

use crate::types::{RenderConfig, Rotation, TUBE_OFFSET, VIEWER_DISTANCE};

/// Sines and cosines of the two rotation angles, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTrig {
    pub sin_a: f64,
    pub cos_a: f64,
    pub sin_b: f64,
    pub cos_b: f64,
}

impl RotationTrig {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            sin_a: rotation.a.sin(),
            cos_a: rotation.a.cos(),
            sin_b: rotation.b.sin(),
            cos_b: rotation.b.cos(),
        }
    }
}

/// Sines and cosines of one `(i, j)` surface sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTrig {
    pub sin_i: f64,
    pub cos_i: f64,
    pub sin_j: f64,
    pub cos_j: f64,
}

impl SampleTrig {
    pub fn new(i: f64, j: f64) -> Self {
        Self {
            sin_i: i.sin(),
            cos_i: i.cos(),
            sin_j: j.sin(),
            cos_j: j.cos(),
        }
    }
}

/// A sample projected into grid space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: i32,
    pub y: i32,
    /// Inverse depth; larger is nearer.
    pub closeness: f64,
}

impl Projected {
    /// Whether the point lands strictly inside the grid.
    ///
    /// Row 0 and column 0 are excluded along with everything past the far edges.
    #[inline(always)]
    pub fn is_inside(&self, width: u16, height: u16) -> bool {
        0 < self.x && self.x < width as i32 && 0 < self.y && self.y < height as i32
    }

    /// Linear buffer index, `y * width + x`. Only meaningful when inside.
    #[inline(always)]
    pub fn index(&self, width: u16) -> usize {
        (self.y as usize) * (width as usize) + (self.x as usize)
    }
}

/// Rotate and project one surface sample.
#[inline(always)]
pub fn project(rot: &RotationTrig, s: &SampleTrig, cfg: &RenderConfig) -> Projected {
    let h = s.cos_j + TUBE_OFFSET;
    let closeness = 1.0 / (s.sin_i * h * rot.sin_a + s.sin_j * rot.cos_a + VIEWER_DISTANCE);
    let t = s.sin_i * h * rot.cos_a - s.sin_j * rot.sin_a;

    let half_w = (cfg.width / 2) as f64;
    let half_h = (cfg.height / 2) as f64;

    // x is doubled: terminal cells are about twice as tall as they are wide.
    let x = half_w + 2.0 * cfg.scale * closeness * (s.cos_i * h * rot.cos_b - t * rot.sin_b);
    let y = half_h + cfg.scale * closeness * (s.cos_i * h * rot.sin_b + t * rot.cos_b);

    Projected {
        x: x as i32,
        y: y as i32,
        closeness,
    }
}

/// Lighting at a surface sample: the rotated normal dotted with a fixed light
/// direction. Roughly bounded by `[-1.5, 1.5]`.
#[inline(always)]
pub fn luminance(rot: &RotationTrig, s: &SampleTrig) -> f64 {
    rot.cos_b * (s.sin_j * rot.sin_a - s.sin_i * s.cos_j * rot.cos_a)
        - s.sin_i * s.cos_j * rot.sin_a
        - s.sin_j * rot.cos_a
        - s.cos_i * s.cos_j * rot.sin_b
}

/// Angles `0, step, 2*step, ...` strictly below `period`, accumulated by
/// repeated addition.
pub fn sweep(period: f64, step: f64) -> Sweep {
    Sweep {
        next: 0.0,
        period,
        step,
    }
}

#[derive(Debug, Clone)]
pub struct Sweep {
    next: f64,
    period: f64,
    step: f64,
}

impl Iterator for Sweep {
    type Item = f64;

    #[inline(always)]
    fn next(&mut self) -> Option<f64> {
        // A non-positive step would never terminate.
        if !(self.step > 0.0) || !(self.next < self.period) {
            return None;
        }
        let angle = self.next;
        self.next += self.step;
        Some(angle)
    }
}
