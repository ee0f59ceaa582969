//! Control signal walkthrough: pause, single-step, resume, quit
//!
//! Demonstrates the cooperative control surface an interactive presentation
//! loop drives: signals are latched at any time and applied between tiers.

use voronoi_wavefront::*;

#[derive(Default)]
struct Progress {
    assigned: usize,
    tiers: usize,
}

impl WavefrontSink for Progress {
    fn on_assign(&mut self, _cell: IVec2, _color: Rgb) {
        self.assigned += 1;
    }

    fn on_tier_complete(&mut self) {
        self.tiers += 1;
    }

    fn on_done(&mut self, elapsed_secs: f64) {
        println!("  done in {:.3}s", elapsed_secs);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = WaveConfigBuilder::new()
        .canvas(200, 200)
        .cell_size(1)?
        .seed_count(9)?
        .rng_seed(7)
        .build()?;

    let mut engine = WavefrontEngine::new(config)?;
    let mut sink = Progress::default();

    println!("Running two tiers...");
    engine.tick(&mut sink);
    engine.tick(&mut sink);
    println!("  {} cells after {} tiers", sink.assigned, sink.tiers);

    println!("Pausing...");
    engine.signal_toggle_pause();
    engine.tick(&mut sink);
    println!("  state: {:?}", engine.state());

    println!("Stepping three tiers while paused...");
    for _ in 0..3 {
        engine.signal_step();
        engine.tick(&mut sink);
        println!("  {} cells after {} tiers ({:?})", sink.assigned, sink.tiers, engine.state());
    }

    println!("Resuming to completion...");
    engine.signal_toggle_pause();
    engine.run_to_completion(&mut sink);
    println!("  state: {:?}, {} cells total", engine.state(), sink.assigned);

    Ok(())
}
