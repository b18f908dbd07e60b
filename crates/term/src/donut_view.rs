//! DonutView: maps a rendered `core::Frame` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a status row (the speed readout when debug is on),
//! the frame rows indented by a left margin, one spacer row and a key hint.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::{gradient_position, AnimationSnapshot, Frame};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::GRADIENT;

/// Columns left blank before each frame row.
pub const LEFT_MARGIN: u16 = 6;

/// Rows above the first frame row.
pub const TOP_MARGIN: u16 = 1;

pub const KEY_HINT: &str = "q quit  d debug  +/- speed";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Formats the speed readout into a stack buffer.
///
/// Matches the classic `DELTA_A: %f DELTA_B: %f` output (six decimals).
pub fn debug_readout(snap: &AnimationSnapshot) -> ArrayString<64> {
    let mut out = ArrayString::new();
    // Clamped deltas are at most 9 characters each at six decimals.
    let speed = snap.speed.clamped();
    let _ = write!(
        out,
        "DELTA_A: {:.6} DELTA_B: {:.6}",
        speed.delta_a, speed.delta_b
    );
    out
}

#[derive(Debug, Clone)]
pub struct DonutView {
    left_margin: u16,
    top_margin: u16,
    show_hint: bool,
    /// Foreground per gradient slot, dim to bright.
    shades: [CellStyle; GRADIENT.len()],
}

impl Default for DonutView {
    fn default() -> Self {
        Self::new(LEFT_MARGIN, TOP_MARGIN)
    }
}

impl DonutView {
    pub fn new(left_margin: u16, top_margin: u16) -> Self {
        let mut shades = [CellStyle::default(); GRADIENT.len()];
        let steps = (GRADIENT.len() - 1) as u16;
        for (i, shade) in shades.iter_mut().enumerate() {
            // 100..=255 linear ramp
            let level = 100 + (155 * i as u16) / steps;
            *shade = CellStyle {
                fg: Rgb::gray(level as u8),
                bold: i + 1 == GRADIENT.len(),
            };
        }
        Self {
            left_margin,
            top_margin,
            show_hint: true,
            shades,
        }
    }

    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Style used for a glyph; blanks and unknown glyphs get the default.
    pub fn glyph_style(&self, ch: char) -> CellStyle {
        gradient_position(ch)
            .map(|i| self.shades[i])
            .unwrap_or_default()
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path: keep one framebuffer across
    /// frames and it only reallocates when the viewport grows.
    pub fn render_into(
        &self,
        frame: &Frame,
        snap: &AnimationSnapshot,
        debug: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        if debug && self.top_margin > 0 {
            let readout = debug_readout(snap);
            fb.put_str(self.left_margin, 0, &readout, CellStyle::default());
        }

        for y in 0..frame.height() {
            let row_y = self.top_margin.saturating_add(y);
            if row_y >= viewport.height {
                break;
            }
            for (x, ch) in frame.row(y).enumerate() {
                let col = self.left_margin.saturating_add(x as u16);
                if col >= viewport.width {
                    break;
                }
                fb.set(col, row_y, Cell::new(ch, self.glyph_style(ch)));
            }
        }

        if self.show_hint {
            let hint_y = self
                .top_margin
                .saturating_add(frame.height())
                .saturating_add(1);
            let style = CellStyle {
                fg: Rgb::gray(120),
                bold: false,
            };
            fb.put_str(self.left_margin, hint_y, KEY_HINT, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        frame: &Frame,
        snap: &AnimationSnapshot,
        debug: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, snap, debug, viewport, &mut fb);
        fb
    }
}
