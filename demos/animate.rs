//! Complete workflow demonstration: configure, run, export a PPM image
//!
//! Headless counterpart of an interactive animation: each loop iteration is
//! one tier, which is where a windowed caller would poll input and flip its
//! display buffer. Run with `RUST_LOG=debug` to watch tier progress.

use std::fs::File;
use std::io::BufWriter;

use voronoi_wavefront::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== voronoi_wavefront demo ===\n");

    println!("Step 1: Configuring run...");
    let config = WaveConfigBuilder::new()
        .canvas(900, 900)
        .cell_size(2)?
        .seed_count(16)?
        .placement(SeedPlacement::Random)
        .metric(Metric::Euclidean)
        .rng_seed(12345)
        .build()?;
    println!("  Canvas: {}x{}", config.width, config.height);
    println!("  Cell size: {}", config.cell_size);
    println!("  Seeds: {} ({:?})", config.seed_count, config.placement);
    println!("  Metric: {}", config.metric);

    println!("\nStep 2: Running the wavefront...");
    let mut engine = WavefrontEngine::new(config)?;
    let mut frame = FrameBuffer::new(&config);

    let mut tiers = 0usize;
    loop {
        let state = engine.tick(&mut frame);
        tiers += 1;
        if state.is_terminal() {
            break;
        }
    }
    println!("  Tiers: {}", tiers);
    println!("  Cells assigned: {}", engine.visited_count());
    if let Some(elapsed) = engine.elapsed_secs() {
        println!("  Time taken: {:.3}s", elapsed);
    }

    println!("\nStep 3: Writing voronoi.ppm...");
    frame.overlay_seed_markers(engine.seeds());
    let mut out = BufWriter::new(File::create("voronoi.ppm")?);
    frame.write_ppm(&mut out)?;
    println!("  {}x{} pixels", frame.width(), frame.height());

    println!("\n=== Demo complete ===");
    Ok(())
}
