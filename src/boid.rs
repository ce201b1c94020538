/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * plus an optional push away from the repulsor.
 *
 * Forces are computed from an immutable view of the flock (`compute_forces`)
 * and applied separately (`integrate`), so a tick never reads a half-updated
 * neighbor.
 */

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::params::{CohesionMode, SimulationParams};
use crate::vector::{heading_of, wrap, SteeringExt};

/// Stable identity of a boid within its flock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoidId(pub u32);

impl fmt::Display for BoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unweighted flocking forces of the last tick, kept for inspection only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Forces {
    pub alignment: Vec2,
    pub separation: Vec2,
    pub cohesion: Vec2,
}

/// Everything one boid's force pass produces.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steering {
    pub forces: Forces,
    pub repulsion: Vec2,
    /// Weighted sum of all four rules; the only value `integrate` consumes.
    pub acceleration: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    id: BoidId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians, clockwise from +x on the y-down field. Rendering only.
    pub heading: f32,
    forces: Forces,
}

impl Boid {
    pub fn new(id: BoidId, position: Vec2, velocity: Vec2) -> Self {
        Self {
            id,
            position,
            velocity,
            heading: heading_of(velocity).unwrap_or(0.0),
            forces: Forces::default(),
        }
    }

    pub fn id(&self) -> BoidId {
        self.id
    }

    /// Forces computed during the most recent tick.
    pub fn forces(&self) -> &Forces {
        &self.forces
    }

    pub(crate) fn record_forces(&mut self, forces: Forces) {
        self.forces = forces;
    }

    // Mean velocity of the neighbors
    pub fn alignment(&self, neighbors: &[&Boid], params: &SimulationParams) -> Vec2 {
        if neighbors.is_empty() {
            return Vec2::ZERO;
        }

        let sum: Vec2 = neighbors.iter().map(|other| other.velocity).sum();
        (sum / neighbors.len() as f32).clamp_magnitude(params.max_force)
    }

    // Push away from close neighbors, harder the closer they are
    pub fn separation(&self, neighbors: &[&Boid], params: &SimulationParams) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors {
            let d = self.position.distance(other.position);

            if d > 0.0 && d < params.desired_separation {
                // Weighted by inverse distance, never clamped
                steering += (self.position - other.position).unit_or_zero() / d;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;
        }

        steering
    }

    // Steer towards the local centre of mass
    pub fn cohesion(&self, neighbors: &[&Boid], params: &SimulationParams) -> Vec2 {
        if neighbors.is_empty() {
            return Vec2::ZERO;
        }

        let sum: Vec2 = neighbors.iter().map(|other| other.position).sum();
        let offset = sum / neighbors.len() as f32 - self.position;

        let steering = match params.cohesion_mode {
            CohesionMode::Plain => offset,
            CohesionMode::Damped => {
                let d = offset.length();
                let speed = if d < params.cohesion_damping_distance {
                    params.max_speed * (d / params.cohesion_damping_distance)
                } else {
                    params.max_speed
                };
                offset.unit_or_zero() * speed - self.velocity
            }
        };

        steering.clamp_magnitude(params.max_force)
    }

    // Push away from the repulsor when inside its radius
    pub fn repulsion(&self, repulsor: Option<Vec2>, params: &SimulationParams) -> Vec2 {
        let Some(source) = repulsor else {
            return Vec2::ZERO;
        };

        let d = self.position.distance(source);
        if d > 0.0 && d < params.repulsor_radius {
            (self.position - source).unit_or_zero() / d
        } else {
            Vec2::ZERO
        }
    }

    /// Evaluates all rules against `neighbors` without touching `self`.
    pub fn compute_forces(
        &self,
        neighbors: &[&Boid],
        repulsor: Option<Vec2>,
        params: &SimulationParams,
    ) -> Steering {
        let forces = Forces {
            alignment: self.alignment(neighbors, params),
            separation: self.separation(neighbors, params),
            cohesion: self.cohesion(neighbors, params),
        };
        let repulsion = self.repulsion(repulsor, params);

        let acceleration = forces.alignment * params.alignment_weight
            + forces.separation * params.separation_weight
            + forces.cohesion * params.cohesion_weight
            + repulsion * params.repulsor_weight;

        Steering {
            forces,
            repulsion,
            acceleration,
        }
    }

    /// Applies one tick of acceleration, moves the boid and wraps it onto the
    /// toroidal field.
    pub fn integrate(&mut self, acceleration: Vec2, params: &SimulationParams) {
        self.velocity = (self.velocity + acceleration).clamp_magnitude(params.max_speed);

        self.position += self.velocity;
        self.position.x = wrap(self.position.x, params.width);
        self.position.y = wrap(self.position.y, params.height);

        // A stationary boid keeps facing the way it was
        if let Some(heading) = heading_of(self.velocity) {
            self.heading = heading;
        }
    }
}
