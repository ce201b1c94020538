/*
 * Spawn Module
 *
 * Initial placement of the flock. This is the only place randomness enters
 * the simulation; once spawned, every tick is deterministic.
 */

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::FlockError;
use crate::flock::Flock;
use crate::params::SimulationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPattern {
    /// Every boid at the field centre, velocities fanned out along the
    /// diagonal by index.
    #[default]
    Line,
    /// Uniformly random positions and headings.
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    pub count: usize,
    pub pattern: SpawnPattern,
    pub seed: u64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            count: 80,
            pattern: SpawnPattern::Line,
            seed: 1,
        }
    }
}

/// Builds a flock of `settings.count` boids.
pub fn spawn_flock(params: SimulationParams, settings: &SpawnSettings) -> Result<Flock, FlockError> {
    let mut flock = Flock::new(params)?;
    let params = flock.params().clone();

    match settings.pattern {
        SpawnPattern::Line => {
            let centre = Vec2::new(params.width / 2.0, params.height / 2.0);
            let n = settings.count as f32;
            for i in 0..settings.count {
                let v = i as f32 / (n * 5.0) - 0.1;
                flock.spawn(centre, Vec2::new(v, v))?;
            }
        }
        SpawnPattern::Scatter => {
            let mut rng = StdRng::seed_from_u64(settings.seed);
            for _ in 0..settings.count {
                let x = rng.gen_range(0.0..params.width);
                let y = rng.gen_range(0.0..params.height);
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let speed = rng.gen_range(0.0..=params.max_speed);
                flock.spawn(Vec2::new(x, y), Vec2::from_angle(angle) * speed)?;
            }
        }
    }

    Ok(flock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_starts_at_centre() {
        let flock = spawn_flock(SimulationParams::default(), &SpawnSettings::default()).unwrap();
        assert_eq!(flock.len(), 80);
        assert!(flock.boids().iter().all(|b| b.position == Vec2::new(300.0, 200.0)));
        assert_eq!(flock.boids()[0].velocity, Vec2::new(-0.1, -0.1));
        let last = flock.boids()[79].velocity;
        assert!((last.x - (79.0 / 400.0 - 0.1)).abs() < 1e-6);
    }

    #[test]
    fn scatter_is_seeded() {
        let settings = SpawnSettings {
            count: 30,
            pattern: SpawnPattern::Scatter,
            seed: 42,
        };
        let a = spawn_flock(SimulationParams::default(), &settings).unwrap();
        let b = spawn_flock(SimulationParams::default(), &settings).unwrap();
        assert_eq!(a.boids(), b.boids());

        let params = a.params();
        for boid in a.boids() {
            assert!((0.0..params.width).contains(&boid.position.x));
            assert!((0.0..params.height).contains(&boid.position.y));
            assert!(boid.velocity.length() <= params.max_speed + 1e-6);
        }
    }

    #[test]
    fn invalid_params_fail_before_spawning() {
        let params = SimulationParams {
            max_speed: 0.0,
            ..SimulationParams::default()
        };
        assert!(spawn_flock(params, &SpawnSettings::default()).is_err());
    }
}
