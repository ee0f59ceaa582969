//! Software frame buffer for headless presentation
//!
//! Window creation, double-buffer flipping, and input polling are
//! collaborator concerns outside this crate. What ships here is the place
//! for assignments to land: an RGB pixel buffer that paints cells as they
//! are claimed, overlays seed markers, and exports binary PPM for demos and
//! offline inspection.

use std::io::{self, Write};

use glam::IVec2;

use crate::config::WaveConfig;
use crate::engine::WavefrontSink;
use crate::seeds::{Rgb, Seed};

/// Canvas background before any cell is claimed
const BACKGROUND: Rgb = [255, 255, 255];

/// Seed markers are drawn black over the finished cells
const MARKER_COLOR: Rgb = [0, 0, 0];

/// Marker disc radius in pixels
const MARKER_RADIUS: i32 = 3;

/// An RGB8 pixel buffer sized to a canvas
///
/// Implements [`WavefrontSink`] so it can be handed to the engine directly;
/// each assignment fills one `cell_size` square. Painting clips at the
/// buffer edges, matching a window surface that simply discards out-of-range
/// pixels.
///
/// # Example
///
/// ```
/// use voronoi_wavefront::*;
///
/// let config = WaveConfigBuilder::new()
///     .canvas(64, 64)
///     .cell_size(1)?
///     .seed_count(4)?
///     .rng_seed(42)
///     .build()?;
///
/// let mut engine = WavefrontEngine::new(config)?;
/// let mut frame = FrameBuffer::new(&config);
/// engine.run_to_completion(&mut frame);
/// frame.overlay_seed_markers(engine.seeds());
/// # Ok::<(), voronoi_wavefront::WavefrontError>(())
/// ```
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cell_size: usize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Create a buffer matching the canvas extent, filled with the
    /// background color
    pub fn new(config: &WaveConfig) -> Self {
        let width = config.width as usize;
        let height = config.height as usize;
        let mut pixels = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&BACKGROUND);
        }
        Self {
            width,
            height,
            cell_size: config.cell_size as usize,
            pixels,
        }
    }

    /// Buffer width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major RGB8 bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one pixel; `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    #[inline]
    fn put(&mut self, x: usize, y: usize, color: Rgb) {
        let i = (y * self.width + x) * 3;
        self.pixels[i..i + 3].copy_from_slice(&color);
    }

    /// Fill the `cell_size` square anchored at `pos`
    ///
    /// Pixels falling outside the buffer are discarded; a cell anchored on
    /// the far edge paints nothing.
    pub fn paint_cell(&mut self, pos: IVec2, color: Rgb) {
        for dy in 0..self.cell_size as i32 {
            for dx in 0..self.cell_size as i32 {
                let x = pos.x + dx;
                let y = pos.y + dy;
                if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                    self.put(x as usize, y as usize, color);
                }
            }
        }
    }

    /// Draw a black disc over each seed position
    ///
    /// Called after a tier completes so markers stay visible on top of the
    /// growing regions.
    pub fn overlay_seed_markers(&mut self, seeds: &[Seed]) {
        for seed in seeds {
            for dy in -MARKER_RADIUS..=MARKER_RADIUS {
                for dx in -MARKER_RADIUS..=MARKER_RADIUS {
                    if dx * dx + dy * dy > MARKER_RADIUS * MARKER_RADIUS {
                        continue;
                    }
                    let x = seed.pos.x + dx;
                    let y = seed.pos.y + dy;
                    if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
                    {
                        self.put(x as usize, y as usize, MARKER_COLOR);
                    }
                }
            }
        }
    }

    /// Write the buffer as binary PPM (P6)
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        out.write_all(&self.pixels)
    }
}

impl WavefrontSink for FrameBuffer {
    fn on_assign(&mut self, cell: IVec2, color: Rgb) {
        self.paint_cell(cell, color);
    }
}
