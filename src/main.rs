//! Particle Sim entry point
//!
//! Runs the simulation headless on a virtual frame clock and optionally writes
//! the final world as a JSON snapshot.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use particle_sim::{Result, SimConfig, Simulation};

#[derive(Parser, Debug)]
#[command(version, about = "Headless 2D elastic particle simulation")]
struct Args {
    /// JSON config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of particles
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Virtual display refresh rate (Hz)
    #[arg(long, default_value_t = 60.0)]
    frame_rate: f64,

    /// Write the final world state here as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(count) = args.count {
        config.particle_count = count;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if !(args.frame_rate.is_finite() && args.frame_rate > 0.0) {
        return Err(particle_sim::Error::InvalidConfig(format!(
            "frame rate must be > 0, got {}",
            args.frame_rate
        )));
    }

    let mut sim = Simulation::new(&config)?;
    let frame_ms = 1000.0 / args.frame_rate;

    let start_energy = sim.world().total_kinetic_energy();
    sim.start(0.0);
    for frame in 0..args.frames {
        sim.frame(f64::from(frame) * frame_ms);
    }
    sim.stop();

    let world = sim.world();
    let momentum = world.total_momentum();
    log::info!(
        "Ran {} ticks: energy {:.1} -> {:.1}, momentum ({:.2}, {:.2}), fps {}",
        world.time_ticks,
        start_energy,
        world.total_kinetic_energy(),
        momentum.x,
        momentum.y,
        sim.fps()
    );

    if let Some(path) = &args.snapshot {
        fs::write(path, world.to_json()?)?;
        log::info!("Snapshot written to {}", path.display());
    }

    Ok(())
}
