//! Headless flock runner
//!
//! Spawns a flock from a config, steps it without a window and logs summary
//! statistics along the way.
//!
//! Usage: `boids-headless [config.json] [ticks]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use flocking::config::Config;
use flocking::debug::DebugInfo;
use flocking::spawn::spawn_flock;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from);
    let config = Config::resolve(path).context("failed to load configuration")?;

    let ticks = match args.next() {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid tick count {arg:?}"))?,
        None => config.runner.ticks,
    };

    let mut flock = spawn_flock(config.simulation.clone(), &config.spawn)
        .context("failed to spawn flock")?;
    info!("{}", DebugInfo::from_flock(&flock));

    let interval = config.runner.log_interval;
    for _ in 0..ticks {
        flock.step();
        if interval > 0 && flock.tick() % interval == 0 {
            info!("{}", DebugInfo::from_flock(&flock));
        }
    }

    if interval == 0 || ticks % interval != 0 {
        info!("{}", DebugInfo::from_flock(&flock));
    }
    Ok(())
}
