//! Gradient module - maps surface lighting to a glyph
//!
//! The lighting value is roughly bounded by `[-1.5, 1.5]`; that range is
//! stretched onto the 12 gradient slots and anything outside the open
//! interval `(0, 12)` falls back to the sparsest glyph.

use crate::types::{GRADIENT, INTENSITY_RANGE};

/// Gradient slot for a lighting intensity (truncated toward zero).
#[inline(always)]
pub fn gradient_index(intensity: f64) -> i32 {
    (GRADIENT.len() as f64 * (intensity / INTENSITY_RANGE)) as i32
}

/// Glyph at a gradient slot; out-of-range slots clamp to the first glyph.
#[inline(always)]
pub fn glyph_at(index: i32) -> char {
    if 0 < index && (index as usize) < GRADIENT.len() {
        return GRADIENT[index as usize];
    }
    GRADIENT[0]
}

/// Glyph for a lighting intensity.
#[inline(always)]
pub fn intensity_char(intensity: f64) -> char {
    glyph_at(gradient_index(intensity))
}

/// Position of `ch` in the gradient, if it is a gradient glyph.
pub fn gradient_position(ch: char) -> Option<usize> {
    GRADIENT.iter().position(|&g| g == ch)
}
