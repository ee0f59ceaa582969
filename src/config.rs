//! Wavefront run configuration and builder
//!
//! This module provides configuration types for deterministic wavefront runs.

use glam::IVec2;

use crate::error::{Result, WavefrontError};
use crate::metric::Metric;

/// Seed placement strategy
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPlacement {
    /// Seeds centered on the largest integer square lattice that fits the
    /// requested count; deterministic positions, used for benchmarking
    #[default]
    Uniform,
    /// Seeds drawn uniformly from the canvas inset by a margin
    Random,
}

/// Configuration for a deterministic wavefront run
///
/// The same configuration always produces the identical sequence of
/// (coordinate, color) assignments: seed positions in uniform mode are
/// arithmetic, and every random draw (random placement, colors) flows from
/// the seeded RNG in `rng_seed`.
///
/// # Example
///
/// ```
/// use voronoi_wavefront::*;
///
/// let config = WaveConfigBuilder::new()
///     .canvas(300, 200)
///     .cell_size(2)?
///     .seed_count(9)?
///     .metric(Metric::Manhattan)
///     .rng_seed(42)
///     .build()?;
///
/// assert_eq!(config.width, 300);
/// # Ok::<(), voronoi_wavefront::WavefrontError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    /// Canvas width in pixels; valid x coordinates span `0..=width`
    pub width: u32,

    /// Canvas height in pixels; valid y coordinates span `0..=height`
    pub height: u32,

    /// Grid granularity: cells are painted as `cell_size` squares and the
    /// frontier expands in `cell_size` steps (1 degenerates to unit steps)
    pub cell_size: u32,

    /// Requested number of seeds
    ///
    /// Uniform placement rounds this down to the largest square number;
    /// see [`crate::seeds::generate_seeds`].
    pub seed_count: usize,

    /// Seed placement strategy
    pub placement: SeedPlacement,

    /// Distance metric driving nearest-seed resolution
    pub metric: Metric,

    /// RNG seed for seed placement and colors
    ///
    /// The same value (with the same other fields) reproduces the run
    /// exactly.
    pub rng_seed: u32,
}

impl WaveConfig {
    /// Whether a coordinate lies within the canvas extent
    ///
    /// Bounds are inclusive on both edges; a neighbor outside them is
    /// silently excluded from admission, never an error.
    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= 0 && p.x <= self.width as i32 && p.y >= 0 && p.y <= self.height as i32
    }

    /// Expansion step as a signed offset
    #[inline]
    pub fn step(&self) -> i32 {
        self.cell_size as i32
    }

    /// Number of distinct grid cells in the canvas at unit cell size
    ///
    /// With `cell_size = 1` every one of these is eventually assigned exactly
    /// once.
    #[inline]
    pub fn unit_cell_count(&self) -> usize {
        (self.width as usize + 1) * (self.height as usize + 1)
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        WaveConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating [`WaveConfig`] with validation
///
/// Fallible setters reject values the engine would refuse to start with;
/// everything else has a sensible default.
///
/// # Example
///
/// ```
/// use voronoi_wavefront::*;
///
/// // Defaults mirror the reference animation: 900x900, cell size 2, 16 seeds
/// let config = WaveConfigBuilder::new().build().unwrap();
/// assert_eq!(config.cell_size, 2);
///
/// assert!(WaveConfigBuilder::new().cell_size(0).is_err());
/// assert!(WaveConfigBuilder::new().seed_count(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WaveConfigBuilder {
    width: u32,
    height: u32,
    cell_size: u32,
    seed_count: usize,
    placement: SeedPlacement,
    metric: Metric,
    rng_seed: Option<u32>,
}

impl WaveConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - canvas: 900 x 900
    /// - cell_size: 2
    /// - seed_count: 16
    /// - placement: Uniform
    /// - metric: Euclidean
    /// - rng_seed: random
    pub fn new() -> Self {
        Self {
            width: 900,
            height: 900,
            cell_size: 2,
            seed_count: 16,
            placement: SeedPlacement::default(),
            metric: Metric::default(),
            rng_seed: None,
        }
    }

    /// Set the canvas extent
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the grid granularity
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `cell_size` is zero.
    pub fn cell_size(mut self, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(WavefrontError::InvalidConfig(
                "cell size must be at least 1".to_string(),
            ));
        }
        self.cell_size = cell_size;
        Ok(self)
    }

    /// Set the requested seed count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `count` is zero; a run with no seeds has
    /// nothing to expand from.
    pub fn seed_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(WavefrontError::InvalidConfig(
                "seed count must be at least 1".to_string(),
            ));
        }
        self.seed_count = count;
        Ok(self)
    }

    /// Set the seed placement strategy
    pub fn placement(mut self, placement: SeedPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the distance metric
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the RNG seed for reproducible runs
    ///
    /// If not set, a random seed is generated at build time.
    pub fn rng_seed(mut self, seed: u32) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a zero-sized canvas.
    pub fn build(self) -> Result<WaveConfig> {
        if self.width == 0 || self.height == 0 {
            return Err(WavefrontError::InvalidConfig(format!(
                "canvas must be non-empty (got {}x{})",
                self.width, self.height
            )));
        }
        let rng_seed = self.rng_seed.unwrap_or_else(rand::random);

        Ok(WaveConfig {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            seed_count: self.seed_count,
            placement: self.placement,
            metric: self.metric,
            rng_seed,
        })
    }
}

impl Default for WaveConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
