//! Frame module - depth-buffered torus rasterizer
//!
//! [`FrameRenderer`] owns one [`Frame`] sized at construction and reuses it
//! for every render. Each cell pairs the inverse depth of its nearest sample
//! with that sample's glyph, so the two can only ever change together.

use crate::gradient::intensity_char;
use crate::surface::{luminance, project, sweep, RotationTrig, SampleTrig};
use crate::types::{RenderConfig, Rotation, BLANK, SWEEP_PERIOD};

/// One grid cell: depth buffer entry plus character buffer entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthCell {
    /// Inverse depth of the nearest sample so far; 0 when untouched.
    pub closeness: f64,
    pub glyph: char,
}

impl DepthCell {
    pub const EMPTY: DepthCell = DepthCell {
        closeness: 0.0,
        glyph: BLANK,
    };
}

impl Default for DepthCell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A rendered grid of depth cells, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<DepthCell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![DepthCell::EMPTY; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[DepthCell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<DepthCell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn glyph(&self, x: u16, y: u16) -> Option<char> {
        self.get(x, y).map(|c| c.glyph)
    }

    /// Glyphs of row `y` (empty when out of range).
    pub fn row(&self, y: u16) -> impl Iterator<Item = char> + '_ {
        let w = self.width as usize;
        let row = if y < self.height {
            &self.cells[(y as usize) * w..(y as usize + 1) * w]
        } else {
            &self.cells[..0]
        };
        row.iter().map(|c| c.glyph)
    }

    /// Rows joined by `\n` with a trailing newline.
    ///
    /// Allocates; meant for golden files and debugging, not the frame loop.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            out.extend(self.row(y));
            out.push('\n');
        }
        out
    }

    pub fn clear(&mut self) {
        self.cells.fill(DepthCell::EMPTY);
    }

    /// Depth test at a linear index: keep the sample only if it is strictly
    /// nearer than what the cell holds. The glyph is computed lazily so
    /// occluded samples skip the lighting math.
    #[inline(always)]
    fn plot(&mut self, index: usize, closeness: f64, glyph: impl FnOnce() -> char) -> bool {
        let cell = &mut self.cells[index];
        if closeness > cell.closeness {
            *cell = DepthCell {
                closeness,
                glyph: glyph(),
            };
            return true;
        }
        false
    }
}

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Surface samples visited.
    pub samples: u32,
    /// Samples that landed strictly inside the grid.
    pub inside: u32,
    /// Samples that won the depth test when they were plotted.
    pub plotted: u32,
}

/// Renders the torus for a given rotation into a reused frame.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    config: RenderConfig,
    frame: Frame,
    stats: FrameStats,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            frame: Frame::new(config.width, config.height),
            stats: FrameStats::default(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Counters from the most recent render.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Render one frame at `rotation`.
    ///
    /// The frame is fully reset first, so the output depends only on the
    /// rotation and the config. Does not allocate.
    pub fn render(&mut self, rotation: Rotation) -> &Frame {
        self.frame.clear();
        let mut stats = FrameStats::default();

        let cfg = self.config;
        let rot = RotationTrig::new(rotation);

        for j in sweep(SWEEP_PERIOD, cfg.step_j) {
            let sin_j = j.sin();
            let cos_j = j.cos();
            for i in sweep(SWEEP_PERIOD, cfg.step_i) {
                let s = SampleTrig {
                    sin_i: i.sin(),
                    cos_i: i.cos(),
                    sin_j,
                    cos_j,
                };
                stats.samples += 1;

                let p = project(&rot, &s, &cfg);
                if !p.is_inside(cfg.width, cfg.height) {
                    continue;
                }
                stats.inside += 1;

                if self
                    .frame
                    .plot(p.index(cfg.width), p.closeness, || intensity_char(luminance(&rot, &s)))
                {
                    stats.plotted += 1;
                }
            }
        }

        self.stats = stats;
        &self.frame
    }
}
