/*
 * Physics Module
 *
 * This module advances the flock by one tick. A tick runs in two passes:
 * 1. Compute: neighbor query and force evaluation for every boid, all read
 *    from the positions and velocities as they stood at the start of the tick
 * 2. Apply: integrate each boid with the acceleration computed for it
 *
 * No boid is moved until every boid has its forces, so the result does not
 * depend on the order of the boids.
 */

use glam::Vec2;
use log::{log_enabled, trace, Level};

use crate::boid::{Boid, BoidId, Steering};
use crate::neighbors::neighbors_of;
use crate::params::SimulationParams;

// Boid whose forces are dumped at trace level
pub const TRACED_BOID: BoidId = BoidId(0);

// First pass: forces for every boid from the unmodified flock
pub fn compute_steering(
    boids: &[Boid],
    repulsor: Option<Vec2>,
    params: &SimulationParams,
) -> Vec<Steering> {
    boids
        .iter()
        .map(|boid| {
            let neighbors = neighbors_of(boids, boid, params.neighbor_radius);
            boid.compute_forces(&neighbors, repulsor, params)
        })
        .collect()
}

// Second pass: apply the forces computed in the first
pub fn apply_steering(boids: &mut [Boid], steering: &[Steering], params: &SimulationParams) {
    debug_assert_eq!(boids.len(), steering.len());

    for (boid, steer) in boids.iter_mut().zip(steering) {
        boid.record_forces(steer.forces);
        boid.integrate(steer.acceleration, params);
    }
}

// Update boid positions and behaviors
pub fn update_boids(boids: &mut [Boid], repulsor: Option<Vec2>, params: &SimulationParams) {
    let steering = compute_steering(boids, repulsor, params);

    if log_enabled!(Level::Trace) {
        if let Some((_, steer)) = boids
            .iter()
            .zip(&steering)
            .find(|(boid, _)| boid.id() == TRACED_BOID)
        {
            trace!(
                "forces {}: al = {:.2?}, sep = {:.2?}, co = {:.2?}, rep = {:.2?}",
                TRACED_BOID,
                steer.forces.alignment,
                steer.forces.separation,
                steer.forces.cohesion,
                steer.repulsion,
            );
        }
    }

    apply_steering(boids, &steering, params);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forces_use_tick_start_velocities() {
        let params = SimulationParams {
            max_force: 10.0,
            ..SimulationParams::default()
        };
        let mut boids = vec![
            Boid::new(BoidId(0), Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)),
            Boid::new(BoidId(1), Vec2::new(120.0, 100.0), Vec2::new(0.0, 1.0)),
        ];

        let steering = compute_steering(&boids, None, &params);
        update_boids(&mut boids, None, &params);

        // Boid 1 sees boid 0's original velocity, not the integrated one
        assert_eq!(boids[1].forces().alignment, Vec2::new(1.0, 0.0));
        assert_eq!(boids[1].forces(), &steering[1].forces);
        assert_eq!(boids[0].forces(), &steering[0].forces);
    }

    #[test]
    fn empty_flock_is_a_no_op() {
        let mut boids: Vec<Boid> = Vec::new();
        update_boids(&mut boids, Some(Vec2::ZERO), &SimulationParams::default());
        assert!(boids.is_empty());
    }
}
