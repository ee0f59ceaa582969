//! Animated discrete Voronoi diagram construction
//!
//! Builds a rasterized Voronoi diagram over a bounded 2D grid by expanding a
//! priority-ordered wavefront outward from a set of seed points. Every grid
//! cell is eventually claimed by its nearest seed under a pluggable distance
//! metric, and cells become claimed in tiers of increasing radius, so a
//! presentation layer can reveal the partition as a growing wave with
//! pausable, steppable animation.
//!
//! # Quick Start
//!
//! ```rust
//! use voronoi_wavefront::*;
//!
//! // Configure a run
//! let config = WaveConfigBuilder::new()
//!     .canvas(120, 120)
//!     .cell_size(1).unwrap()
//!     .seed_count(9).unwrap()
//!     .metric(Metric::Euclidean)
//!     .rng_seed(42)
//!     .build().unwrap();
//!
//! // Drive the engine into a frame buffer
//! let mut engine = WavefrontEngine::new(config).unwrap();
//! let mut frame = FrameBuffer::new(&config);
//! engine.run_to_completion(&mut frame);
//! frame.overlay_seed_markers(engine.seeds());
//!
//! assert_eq!(engine.state(), EngineState::Done);
//! ```
//!
//! The engine itself never touches a window: it emits assignments and tier
//! boundaries through the [`WavefrontSink`] trait, and accepts quit, pause,
//! and step signals between tiers. Interactive presentation is one sink
//! implementation away.
//!
//! This is an animatable approximation, not exact computational-geometry
//! Voronoi construction; see [`engine`] for the trade-off.

// Modules
pub mod config;
pub mod coord;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod ledger;
pub mod metric;
pub mod render;
pub mod seeds;

// Re-export core types for convenience
pub use config::{SeedPlacement, WaveConfig, WaveConfigBuilder};
pub use engine::{EngineState, WavefrontEngine, WavefrontSink};
pub use error::{Result, WavefrontError};
pub use frontier::{FrontierItem, FrontierQueue};
pub use ledger::VisitLedger;
pub use metric::Metric;
pub use render::FrameBuffer;
pub use seeds::{generate_seeds, Rgb, Seed};

// Re-export glam::IVec2 for convenience
pub use glam::IVec2;
