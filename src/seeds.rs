//! Seed placement and color generation
//!
//! Seeds are the fixed anchor points of the diagram: every grid cell ends up
//! colored by its nearest seed. They are generated once, before expansion
//! begins, and never move or change color afterwards.
//!
//! All randomness flows from a `ChaCha8Rng` seeded by the configuration, so
//! the same configuration reproduces the same seed set exactly.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{SeedPlacement, WaveConfig};
use crate::coord::magnitude;

/// RGB color, one byte per channel
pub type Rgb = [u8; 3];

/// Inset margin for random placement, keeping seeds off the canvas edge
const PLACEMENT_MARGIN: i32 = 50;

/// Lower bound of the per-channel color band
///
/// Keeps randomly colored seeds clear of the white background; fully random
/// samples wash out near the top of the range.
const COLOR_MIN: u8 = 100;

/// A fixed anchor coordinate with an associated color
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    /// Grid position, within the canvas extent
    pub pos: IVec2,
    /// Color inherited by every cell this seed claims
    pub color: Rgb,
}

impl Seed {
    /// Create a new seed
    pub fn new(pos: IVec2, color: Rgb) -> Self {
        Self { pos, color }
    }

    /// Tie-break key of the seed position
    #[inline]
    pub fn magnitude(&self) -> i32 {
        magnitude(self.pos)
    }
}

/// Generate the seed set for a configuration
///
/// Dispatches on [`WaveConfig::placement`]:
///
/// - `Uniform`: the largest integer square lattice with side
///   `floor(sqrt(seed_count))`, each seed centered within its lattice
///   sub-region. Positions are arithmetic; only colors consume the RNG.
/// - `Random`: `seed_count` positions drawn uniformly from the canvas inset
///   by a margin.
///
/// Neither mode enforces minimum separation; near-duplicate seeds simply
/// produce degenerate tiny regions.
///
/// # Example
///
/// ```
/// use voronoi_wavefront::*;
///
/// let config = WaveConfigBuilder::new()
///     .canvas(90, 90)
///     .seed_count(9)
///     .unwrap()
///     .rng_seed(42)
///     .build()
///     .unwrap();
///
/// let seeds = generate_seeds(&config);
/// assert_eq!(seeds.len(), 9); // 3x3 lattice
/// assert!(seeds.iter().all(|s| config.contains(s.pos)));
/// ```
pub fn generate_seeds(config: &WaveConfig) -> Vec<Seed> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed as u64);
    match config.placement {
        SeedPlacement::Uniform => uniform_lattice(config, &mut rng),
        SeedPlacement::Random => random_scatter(config, &mut rng),
    }
}

fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    [
        rng.gen_range(COLOR_MIN..=u8::MAX),
        rng.gen_range(COLOR_MIN..=u8::MAX),
        rng.gen_range(COLOR_MIN..=u8::MAX),
    ]
}

fn uniform_lattice<R: Rng>(config: &WaveConfig, rng: &mut R) -> Vec<Seed> {
    let side = (config.seed_count as f64).sqrt().floor() as u32;
    let w = config.width as f64;
    let h = config.height as f64;
    let s = side as f64;

    (0..side * side)
        .map(|i| {
            let col = (i / side) as f64;
            let row = (i % side) as f64;
            let x = (col * (w / s) + w / (2.0 * s)) as i32;
            let y = (row * (h / s) + h / (2.0 * s)) as i32;
            Seed::new(IVec2::new(x, y), random_color(rng))
        })
        .collect()
}

fn random_scatter<R: Rng>(config: &WaveConfig, rng: &mut R) -> Vec<Seed> {
    let w = config.width as i32;
    let h = config.height as i32;
    let margin = PLACEMENT_MARGIN.min(w / 4).min(h / 4);

    (0..config.seed_count)
        .map(|_| {
            let x = rng.gen_range(margin..=w - margin);
            let y = rng.gen_range(margin..=h - margin);
            Seed::new(IVec2::new(x, y), random_color(rng))
        })
        .collect()
}
