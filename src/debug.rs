/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct: a summary of the flock's state
 * for the viewer's overlay and the headless runner's log lines.
 *
 * Includes metrics for:
 * - Tick count and number of boids
 * - Mean and maximum speed
 * - Mean number of neighbors
 * - Repulsor position
 */

use std::fmt;

use glam::Vec2;

use crate::flock::Flock;
use crate::neighbors::neighbor_counts;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugInfo {
    pub tick: u64,
    pub boids: usize,
    pub mean_speed: f32,
    pub max_speed: f32,
    pub mean_neighbors: f32,
    pub repulsor: Option<Vec2>,
}

impl DebugInfo {
    pub fn from_flock(flock: &Flock) -> Self {
        let boids = flock.boids();
        if boids.is_empty() {
            return Self {
                tick: flock.tick(),
                repulsor: flock.repulsor(),
                ..Self::default()
            };
        }

        let count = boids.len() as f32;
        let speeds = boids.iter().map(|boid| boid.velocity.length());
        let mean_speed = speeds.clone().sum::<f32>() / count;
        let max_speed = speeds.fold(0.0, f32::max);

        let neighbors: usize = neighbor_counts(boids, flock.params().neighbor_radius)
            .into_iter()
            .sum();

        Self {
            tick: flock.tick(),
            boids: boids.len(),
            mean_speed,
            max_speed,
            mean_neighbors: neighbors as f32 / count,
            repulsor: flock.repulsor(),
        }
    }
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: {} boids, speed mean {:.3} max {:.3}, {:.1} neighbors",
            self.tick, self.boids, self.mean_speed, self.max_speed, self.mean_neighbors
        )?;
        if let Some(repulsor) = self.repulsor {
            write!(f, ", repulsor at ({:.0}, {:.0})", repulsor.x, repulsor.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;

    #[test]
    fn summarises_speeds_and_neighbors() {
        let mut flock = Flock::new(SimulationParams::default()).unwrap();
        flock.spawn(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)).unwrap();
        flock.spawn(Vec2::new(110.0, 100.0), Vec2::new(0.0, 0.5)).unwrap();
        flock.spawn(Vec2::new(500.0, 300.0), Vec2::ZERO).unwrap();

        let info = DebugInfo::from_flock(&flock);
        assert_eq!(info.boids, 3);
        assert!((info.mean_speed - 0.5).abs() < 1e-6);
        assert_eq!(info.max_speed, 1.0);
        assert!((info.mean_neighbors - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(info.repulsor, None);
    }

    #[test]
    fn empty_flock_has_zero_stats() {
        let flock = Flock::new(SimulationParams::default()).unwrap();
        let info = DebugInfo::from_flock(&flock);
        assert_eq!(info, DebugInfo::default());
        assert!(info.to_string().starts_with("tick 0: 0 boids"));
    }
}
