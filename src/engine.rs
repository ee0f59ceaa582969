//! Wavefront assignment engine
//!
//! Orchestrates the frontier queue and visitation ledger: pops the next
//! scheduled cell, resolves its nearest seed, emits the assignment, and
//! schedules admissible neighbors. Cells are revealed outward from the seeds
//! in tiers of increasing radius, one tier per tick, so a caller can
//! interleave painting and input polling between tiers.
//!
//! The expansion is a deliberate approximation of nearest-seed assignment:
//! the admission rule works from the distance to the cell's own resolved
//! seed, not a global recomputation, and concave regions near seed clusters
//! can show minor boundary artifacts versus an exact Voronoi diagram. That
//! trade is what makes the construction animatable and metric-agnostic.

use std::time::Instant;

use glam::IVec2;
use log::{debug, info};

use crate::config::WaveConfig;
use crate::coord::axis_neighbors;
use crate::error::{Result, WavefrontError};
use crate::frontier::{FrontierItem, FrontierQueue};
use crate::ledger::VisitLedger;
use crate::seeds::{generate_seeds, Rgb, Seed};

/// Execution state of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Executing one tier per tick
    Running,
    /// Suspended; frontier and ledger persist untouched
    Paused,
    /// Executing exactly one tier, then reverting to paused
    Stepping,
    /// Every reachable cell assigned; terminal
    Done,
    /// Externally terminated; terminal
    Halted,
}

impl EngineState {
    /// Whether the engine will never make progress again
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, EngineState::Done | EngineState::Halted)
    }
}

/// Receives engine output
///
/// The engine's only outbound boundary. `on_assign` paints one cell;
/// `on_tier_complete` is the moment to flip a display buffer and redraw seed
/// markers; `on_done` reports the elapsed wall-clock time exactly once.
pub trait WavefrontSink {
    /// One cell has been claimed by a seed
    fn on_assign(&mut self, cell: IVec2, color: Rgb);

    /// Every cell of the current tier has been assigned
    fn on_tier_complete(&mut self) {}

    /// The diagram is complete
    fn on_done(&mut self, _elapsed_secs: f64) {}
}

/// The wavefront assignment engine
///
/// Single-threaded and cooperative: each [`tick`](Self::tick) returns after
/// at most one tier so the caller can poll input and present between tiers.
/// Control signals are latched by the `signal_*` methods and applied
/// coalesced at the top of the next tick; repeating a signal within one poll
/// cycle acts once.
///
/// # Example
///
/// ```
/// use glam::IVec2;
/// use voronoi_wavefront::*;
///
/// struct Counter(usize);
/// impl WavefrontSink for Counter {
///     fn on_assign(&mut self, _cell: IVec2, _color: Rgb) {
///         self.0 += 1;
///     }
/// }
///
/// let config = WaveConfigBuilder::new()
///     .canvas(40, 40)
///     .cell_size(1)?
///     .seed_count(4)?
///     .rng_seed(42)
///     .build()?;
///
/// let mut engine = WavefrontEngine::new(config)?;
/// let mut sink = Counter(0);
/// engine.run_to_completion(&mut sink);
/// assert_eq!(sink.0, 41 * 41); // every cell assigned exactly once
/// # Ok::<(), voronoi_wavefront::WavefrontError>(())
/// ```
pub struct WavefrontEngine {
    config: WaveConfig,
    seeds: Vec<Seed>,
    frontier: FrontierQueue,
    ledger: VisitLedger,
    radius: f64,
    state: EngineState,
    started: Instant,
    elapsed_secs: Option<f64>,
    quit_latched: bool,
    pause_latched: bool,
    step_latched: bool,
}

impl WavefrontEngine {
    /// Create an engine, generating seeds from the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration yields no usable seeds.
    pub fn new(config: WaveConfig) -> Result<Self> {
        let seeds = generate_seeds(&config);
        Self::with_seeds(config, seeds)
    }

    /// Create an engine with an explicit seed set
    ///
    /// For callers that lay out seeds themselves. Seed coordinates sharing a
    /// position are permitted; the duplicate is scheduled once and the first
    /// seed in scan order claims it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `seeds` is empty or any seed lies outside
    /// the canvas.
    pub fn with_seeds(config: WaveConfig, seeds: Vec<Seed>) -> Result<Self> {
        if seeds.is_empty() {
            return Err(WavefrontError::InvalidConfig(
                "at least one seed is required".to_string(),
            ));
        }
        if let Some(seed) = seeds.iter().find(|s| !config.contains(s.pos)) {
            return Err(WavefrontError::InvalidConfig(format!(
                "seed at ({}, {}) lies outside the canvas",
                seed.pos.x, seed.pos.y
            )));
        }

        let mut frontier = FrontierQueue::new();
        let mut ledger = VisitLedger::new();
        for seed in &seeds {
            if ledger.mark(seed.pos) {
                frontier.push(0.0, FrontierItem::Cell(seed.pos));
            }
        }

        // First tier boundary sits at twice the grid step
        let radius = 2.0 * config.cell_size as f64;
        frontier.push(radius, FrontierItem::TierBoundary);

        debug!(
            "engine initialized: {} seeds, {} metric, first tier radius {}",
            seeds.len(),
            config.metric,
            radius
        );

        Ok(Self {
            config,
            seeds,
            frontier,
            ledger,
            radius,
            state: EngineState::Running,
            started: Instant::now(),
            elapsed_secs: None,
            quit_latched: false,
            pause_latched: false,
            step_latched: false,
        })
    }

    /// The configuration this engine runs under
    #[inline]
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// The immutable seed set
    #[inline]
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    /// Current execution state
    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Radius of the tier currently being drained
    #[inline]
    pub fn tier_radius(&self) -> f64 {
        self.radius
    }

    /// Number of coordinates scheduled so far
    ///
    /// At completion with unit cell size this equals
    /// [`WaveConfig::unit_cell_count`].
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.ledger.len()
    }

    /// Elapsed wall-clock seconds, available once the engine is done
    #[inline]
    pub fn elapsed_secs(&self) -> Option<f64> {
        self.elapsed_secs
    }

    /// Latch a quit request; takes effect at the top of the next tick
    pub fn signal_quit(&mut self) {
        self.quit_latched = true;
    }

    /// Latch a pause toggle (running to paused, paused to running)
    pub fn signal_toggle_pause(&mut self) {
        self.pause_latched = true;
    }

    /// Latch a single-tier step; honored only while paused
    pub fn signal_step(&mut self) {
        self.step_latched = true;
    }

    /// Execute one engine iteration
    ///
    /// Applies latched control signals, then runs exactly one tier if the
    /// engine is running or stepping. A stepping engine reverts to paused
    /// afterwards. Terminal states are no-ops.
    pub fn tick<S: WavefrontSink>(&mut self, sink: &mut S) -> EngineState {
        self.apply_signals();
        match self.state {
            EngineState::Running => self.run_tier(sink),
            EngineState::Stepping => {
                self.run_tier(sink);
                if self.state == EngineState::Stepping {
                    self.state = EngineState::Paused;
                }
            }
            EngineState::Paused | EngineState::Done | EngineState::Halted => {}
        }
        self.state
    }

    /// Drive the engine until it can make no further progress
    ///
    /// Returns on `Done`, `Halted`, or `Paused` (a paused engine only
    /// resumes through signals).
    pub fn run_to_completion<S: WavefrontSink>(&mut self, sink: &mut S) -> EngineState {
        loop {
            let state = self.tick(sink);
            if state.is_terminal() || state == EngineState::Paused {
                return state;
            }
        }
    }

    /// Resolve the nearest seed of a cell by linear scan
    ///
    /// Seed counts are small; a scan per cell avoids a secondary seed index
    /// that would itself need incremental updates as the frontier grows. The
    /// first seed in scan order wins distance ties.
    pub fn nearest_seed(&self, cell: IVec2) -> (Seed, f64) {
        let metric = self.config.metric;
        let mut best = self.seeds[0];
        let mut best_dist = metric.distance(best.pos, cell);
        for &seed in &self.seeds[1..] {
            let dist = metric.distance(seed.pos, cell);
            if dist < best_dist {
                best = seed;
                best_dist = dist;
            }
        }
        (best, best_dist)
    }

    /// Quit wins over everything; step is only honored from paused.
    fn apply_signals(&mut self) {
        if std::mem::take(&mut self.quit_latched) {
            self.state = EngineState::Halted;
            self.pause_latched = false;
            self.step_latched = false;
            return;
        }
        if std::mem::take(&mut self.pause_latched) {
            self.state = match self.state {
                EngineState::Running => EngineState::Paused,
                EngineState::Paused => EngineState::Running,
                other => other,
            };
        }
        if std::mem::take(&mut self.step_latched) && self.state == EngineState::Paused {
            self.state = EngineState::Stepping;
        }
    }

    /// Drain every cell scheduled below the current tier radius
    fn run_tier<S: WavefrontSink>(&mut self, sink: &mut S) {
        let mut assigned = 0usize;
        loop {
            match self.frontier.pop() {
                Some((_, FrontierItem::Cell(cell))) => {
                    self.assign_and_expand(cell, sink);
                    assigned += 1;
                }
                Some((_, FrontierItem::TierBoundary)) | None => break,
            }
        }

        debug!("tier {} drained: {} cells", self.radius, assigned);
        sink.on_tier_complete();

        if self.frontier.pending_cells() == 0 {
            let elapsed = self.started.elapsed().as_secs_f64();
            self.elapsed_secs = Some(elapsed);
            self.state = EngineState::Done;
            info!(
                "diagram complete: {} cells in {:.3}s",
                self.ledger.len(),
                elapsed
            );
            sink.on_done(elapsed);
        } else {
            self.radius += self.config.cell_size as f64;
            self.frontier.push(self.radius, FrontierItem::TierBoundary);
        }
    }

    /// Assign a popped cell to its nearest seed and schedule neighbors
    ///
    /// Neighbors are admitted under the monotonic guard: only cells no
    /// closer to the claiming seed than the current one keep the wave
    /// expanding outward. Admission reserves the visitation immediately; the
    /// neighbor's own nearest seed is resolved independently when it is
    /// popped.
    fn assign_and_expand<S: WavefrontSink>(&mut self, cell: IVec2, sink: &mut S) {
        let (seed, min_dist) = self.nearest_seed(cell);
        sink.on_assign(cell, seed.color);

        for neighbor in axis_neighbors(cell, self.config.step()) {
            let neighbor_dist = self.config.metric.distance(neighbor, seed.pos);
            if min_dist <= neighbor_dist
                && self.config.contains(neighbor)
                && self.ledger.mark(neighbor)
            {
                self.frontier.push(neighbor_dist, FrontierItem::Cell(neighbor));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SeedPlacement, WaveConfigBuilder};
    use crate::metric::Metric;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Recorder {
        assigns: Vec<(IVec2, Rgb)>,
        tiers: usize,
        done: Vec<f64>,
    }

    impl WavefrontSink for Recorder {
        fn on_assign(&mut self, cell: IVec2, color: Rgb) {
            self.assigns.push((cell, color));
        }

        fn on_tier_complete(&mut self) {
            self.tiers += 1;
        }

        fn on_done(&mut self, elapsed_secs: f64) {
            self.done.push(elapsed_secs);
        }
    }

    fn unit_config(width: u32, height: u32) -> WaveConfig {
        WaveConfigBuilder::new()
            .canvas(width, height)
            .cell_size(1)
            .unwrap()
            .seed_count(4)
            .unwrap()
            .rng_seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_coverage_every_cell_assigned_once() {
        let config = unit_config(20, 20);
        let mut engine = WavefrontEngine::new(config).unwrap();
        let mut sink = Recorder::default();

        assert_eq!(engine.run_to_completion(&mut sink), EngineState::Done);

        assert_eq!(sink.assigns.len(), config.unit_cell_count());
        assert_eq!(engine.visited_count(), config.unit_cell_count());

        // No coordinate is popped twice
        let distinct: HashSet<IVec2> = sink.assigns.iter().map(|(c, _)| *c).collect();
        assert_eq!(distinct.len(), sink.assigns.len());
    }

    #[test]
    fn test_coverage_manhattan() {
        let config = WaveConfigBuilder::new()
            .canvas(15, 11)
            .cell_size(1)
            .unwrap()
            .seed_count(3)
            .unwrap()
            .placement(SeedPlacement::Random)
            .metric(Metric::Manhattan)
            .rng_seed(7)
            .build()
            .unwrap();
        let mut engine = WavefrontEngine::new(config).unwrap();
        let mut sink = Recorder::default();

        engine.run_to_completion(&mut sink);
        assert_eq!(engine.visited_count(), config.unit_cell_count());
    }

    #[test]
    fn test_tier_radii_advance_by_cell_size() {
        let config = WaveConfigBuilder::new()
            .canvas(60, 60)
            .cell_size(3)
            .unwrap()
            .rng_seed(42)
            .build()
            .unwrap();
        let mut engine = WavefrontEngine::new(config).unwrap();
        let mut sink = Recorder::default();

        assert_eq!(engine.tier_radius(), 6.0);
        let mut last = engine.tier_radius();
        let mut running_ticks = 0;
        while engine.tick(&mut sink) == EngineState::Running {
            running_ticks += 1;
            let radius = engine.tier_radius();
            assert_eq!(radius, last + 3.0);
            last = radius;
        }
        // The tick that completed the diagram also completed a tier
        assert_eq!(sink.tiers, running_ticks + 1);
    }

    #[test]
    fn test_seed_fidelity() {
        let config = unit_config(30, 30);
        let seeds = vec![
            Seed::new(IVec2::new(5, 5), [200, 10, 10]),
            Seed::new(IVec2::new(25, 5), [10, 200, 10]),
            Seed::new(IVec2::new(15, 25), [10, 10, 200]),
        ];
        let mut engine = WavefrontEngine::with_seeds(config, seeds.clone()).unwrap();
        let mut sink = Recorder::default();
        engine.run_to_completion(&mut sink);

        for seed in &seeds {
            let assigned = sink
                .assigns
                .iter()
                .find(|(cell, _)| *cell == seed.pos)
                .map(|(_, color)| *color);
            assert_eq!(assigned, Some(seed.color));
        }
    }

    #[test]
    fn test_two_seed_scenario() {
        // 10x10 canvas, seeds at (1,1) and (8,8): (4,4) is strictly closer
        // to (1,1) under the euclidean metric
        let config = WaveConfigBuilder::new()
            .canvas(10, 10)
            .cell_size(1)
            .unwrap()
            .rng_seed(0)
            .build()
            .unwrap();
        let near = Seed::new(IVec2::new(1, 1), [255, 0, 0]);
        let far = Seed::new(IVec2::new(8, 8), [0, 0, 255]);
        let mut engine = WavefrontEngine::with_seeds(config, vec![near, far]).unwrap();
        let mut sink = Recorder::default();
        engine.run_to_completion(&mut sink);

        let (_, color) = sink
            .assigns
            .iter()
            .find(|(cell, _)| *cell == IVec2::new(4, 4))
            .copied()
            .unwrap();
        assert_eq!(color, near.color);
    }

    #[test]
    fn test_determinism_uniform_mode() {
        let config = WaveConfigBuilder::new()
            .canvas(50, 50)
            .cell_size(2)
            .unwrap()
            .seed_count(9)
            .unwrap()
            .rng_seed(42)
            .build()
            .unwrap();

        let mut first = Recorder::default();
        WavefrontEngine::new(config)
            .unwrap()
            .run_to_completion(&mut first);

        let mut second = Recorder::default();
        WavefrontEngine::new(config)
            .unwrap()
            .run_to_completion(&mut second);

        assert_eq!(first.assigns, second.assigns);
        assert_eq!(first.tiers, second.tiers);
    }

    #[test]
    fn test_pause_step_replays_uninterrupted_run() {
        let config = unit_config(25, 25);

        let mut uninterrupted = Recorder::default();
        let mut reference = WavefrontEngine::new(config).unwrap();
        for _ in 0..5 {
            reference.tick(&mut uninterrupted);
        }

        let mut stepped = Recorder::default();
        let mut engine = WavefrontEngine::new(config).unwrap();
        engine.signal_toggle_pause();
        assert_eq!(engine.tick(&mut stepped), EngineState::Paused);
        assert!(stepped.assigns.is_empty());
        for _ in 0..5 {
            engine.signal_step();
            assert_eq!(engine.tick(&mut stepped), EngineState::Paused);
        }

        assert_eq!(uninterrupted.assigns, stepped.assigns);
    }

    #[test]
    fn test_pause_toggles_and_step_requires_pause() {
        let config = unit_config(40, 40);
        let mut engine = WavefrontEngine::new(config).unwrap();
        let mut sink = Recorder::default();

        // Step while running is ignored
        engine.signal_step();
        assert_eq!(engine.tick(&mut sink), EngineState::Running);

        engine.signal_toggle_pause();
        assert_eq!(engine.tick(&mut sink), EngineState::Paused);
        let frozen = sink.assigns.len();

        // Paused ticks make no progress
        engine.tick(&mut sink);
        assert_eq!(sink.assigns.len(), frozen);

        engine.signal_toggle_pause();
        assert_eq!(engine.tick(&mut sink), EngineState::Running);
        assert!(sink.assigns.len() > frozen);
    }

    #[test]
    fn test_quit_halts_from_any_state() {
        let config = unit_config(40, 40);
        let mut engine = WavefrontEngine::new(config).unwrap();
        let mut sink = Recorder::default();

        engine.tick(&mut sink);
        let assigned = sink.assigns.len();

        engine.signal_quit();
        assert_eq!(engine.tick(&mut sink), EngineState::Halted);
        assert_eq!(sink.assigns.len(), assigned);

        // Terminal: further signals and ticks are no-ops
        engine.signal_toggle_pause();
        engine.signal_step();
        assert_eq!(engine.tick(&mut sink), EngineState::Halted);
        assert_eq!(sink.assigns.len(), assigned);
    }

    #[test]
    fn test_done_is_terminal_and_reported_once() {
        let config = unit_config(12, 12);
        let mut engine = WavefrontEngine::new(config).unwrap();
        let mut sink = Recorder::default();

        engine.run_to_completion(&mut sink);
        assert_eq!(engine.state(), EngineState::Done);
        assert_eq!(sink.done.len(), 1);
        assert!(engine.elapsed_secs().is_some());

        let assigned = sink.assigns.len();
        let tiers = sink.tiers;
        engine.tick(&mut sink);
        engine.tick(&mut sink);
        assert_eq!(sink.done.len(), 1);
        assert_eq!(sink.assigns.len(), assigned);
        assert_eq!(sink.tiers, tiers);
    }

    #[test]
    fn test_with_seeds_rejects_empty_and_out_of_bounds() {
        let config = unit_config(10, 10);
        assert!(WavefrontEngine::with_seeds(config, vec![]).is_err());

        let outside = Seed::new(IVec2::new(11, 0), [100, 100, 100]);
        assert!(WavefrontEngine::with_seeds(config, vec![outside]).is_err());
    }

    #[test]
    fn test_duplicate_seeds_scheduled_once() {
        let config = unit_config(10, 10);
        let seeds = vec![
            Seed::new(IVec2::new(5, 5), [200, 100, 100]),
            Seed::new(IVec2::new(5, 5), [100, 200, 100]),
        ];
        let mut engine = WavefrontEngine::with_seeds(config, seeds).unwrap();
        let mut sink = Recorder::default();
        engine.run_to_completion(&mut sink);

        let at_seed: Vec<_> = sink
            .assigns
            .iter()
            .filter(|(cell, _)| *cell == IVec2::new(5, 5))
            .collect();
        assert_eq!(at_seed.len(), 1);
        // First seed in scan order claims the shared position
        assert_eq!(at_seed[0].1, [200, 100, 100]);
    }

    #[test]
    fn test_nearest_seed_first_wins_ties() {
        let config = unit_config(10, 10);
        let seeds = vec![
            Seed::new(IVec2::new(2, 5), [1, 1, 1]),
            Seed::new(IVec2::new(8, 5), [2, 2, 2]),
        ];
        let engine = WavefrontEngine::with_seeds(config, seeds).unwrap();

        // (5,5) is equidistant from both; the first seed wins
        let (seed, dist) = engine.nearest_seed(IVec2::new(5, 5));
        assert_eq!(seed.color, [1, 1, 1]);
        assert_eq!(dist, 3.0);
    }
}
