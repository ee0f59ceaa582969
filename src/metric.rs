//! Distance metrics for nearest-seed resolution
//!
//! The wavefront engine is metric-agnostic: any of these metrics can drive
//! the expansion, and the resulting diagram takes its shape from the metric
//! (Manhattan produces diamond cells, Chebyshev square ones).

use std::fmt;
use std::str::FromStr;

use glam::IVec2;

use crate::error::WavefrontError;

/// Distance metric between two grid coordinates
///
/// All four kinds are total over every coordinate pair and return a
/// non-negative value (zero for identical points).
///
/// # Example
///
/// ```
/// use glam::IVec2;
/// use voronoi_wavefront::Metric;
///
/// let d = Metric::Euclidean.distance(IVec2::ZERO, IVec2::new(3, 4));
/// assert_eq!(d, 5.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Straight-line distance `sqrt(dx^2 + dy^2)`
    #[default]
    Euclidean,
    /// Taxicab distance `|dx| + |dy|`
    Manhattan,
    /// Chessboard distance `max(|dx|, |dy|)`
    Chebyshev,
    /// Minimum-axis distance `min(|dx|, |dy|)`; degenerate on purpose,
    /// produces cross-shaped regions
    InvChebyshev,
}

impl Metric {
    /// Compute the distance between two coordinates under this metric
    pub fn distance(self, a: IVec2, b: IVec2) -> f64 {
        let dx = (a.x - b.x).abs() as f64;
        let dy = (a.y - b.y).abs() as f64;
        match self {
            Metric::Euclidean => (dx * dx + dy * dy).sqrt(),
            Metric::Manhattan => dx + dy,
            Metric::Chebyshev => dx.max(dy),
            Metric::InvChebyshev => dx.min(dy),
        }
    }

    /// Canonical lowercase name, accepted back by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::Chebyshev => "chebyshev",
            Metric::InvChebyshev => "inv_chebyshev",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = WavefrontError;

    /// Parse a metric name
    ///
    /// An unrecognized name is a fatal configuration error, reported once at
    /// startup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            "chebyshev" => Ok(Metric::Chebyshev),
            "inv_chebyshev" => Ok(Metric::InvChebyshev),
            other => Err(WavefrontError::InvalidMetric(other.to_string())),
        }
    }
}
