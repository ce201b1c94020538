/*
 * Flocking Simulation
 *
 * Interactive viewer for the boid flock. Boids follow three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Left click places (or removes) a repulsor the boids flee from; right click
 * toggles drawing of the tracked boid's radii and forces.
 *
 * Usage: `flocking [config.json]` (or set BOIDS_CONFIG)
 */

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use env_logger::Env;

use flocking::app::{model, update, CONFIG};
use flocking::config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::resolve(path).context("failed to load configuration")?;
    CONFIG
        .set(config)
        .map_err(|_| anyhow!("configuration was already set"))?;

    nannou::app(model).update(update).run();
    Ok(())
}
