/*
 * Flock Module
 *
 * The Flock owns the boids, the simulation parameters and the repulsor. It is
 * assembled once, validated, and then stepped once per frame by the host.
 * Boids keep their identity and order for the whole run.
 */

use std::collections::HashSet;

use glam::Vec2;
use log::debug;

use crate::boid::{Boid, BoidId};
use crate::error::FlockError;
use crate::params::SimulationParams;
use crate::physics;
use crate::vector::wrap;

pub struct Flock {
    boids: Vec<Boid>,
    params: SimulationParams,
    repulsor: Option<Vec2>,
    next_id: u32,
    tick: u64,
}

impl Flock {
    /// An empty flock. Fails if `params` does not validate.
    pub fn new(params: SimulationParams) -> Result<Self, FlockError> {
        params.validate()?;
        debug!(
            "flock created on a {}x{} field, cohesion {:?}",
            params.width, params.height, params.cohesion_mode
        );

        Ok(Self {
            boids: Vec::new(),
            params,
            repulsor: None,
            next_id: 0,
            tick: 0,
        })
    }

    /// A flock from pre-built boids, keeping their order and ids.
    pub fn with_boids(params: SimulationParams, boids: Vec<Boid>) -> Result<Self, FlockError> {
        let mut flock = Self::new(params)?;

        let mut seen = HashSet::with_capacity(boids.len());
        for boid in &boids {
            if !seen.insert(boid.id()) {
                return Err(FlockError::DuplicateId(boid.id()));
            }
        }

        for boid in boids {
            flock.push(boid)?;
        }
        Ok(flock)
    }

    /// Adds a boid with the next free id. Only allowed before the first tick.
    pub fn spawn(&mut self, position: Vec2, velocity: Vec2) -> Result<BoidId, FlockError> {
        let id = BoidId(self.next_id);
        self.push(Boid::new(id, position, velocity))?;
        Ok(id)
    }

    fn push(&mut self, mut boid: Boid) -> Result<(), FlockError> {
        if self.tick > 0 {
            return Err(FlockError::AlreadyStarted { tick: self.tick });
        }
        if !boid.position.is_finite() || !boid.velocity.is_finite() {
            return Err(FlockError::NonFiniteState(boid.id()));
        }
        if self.boids.iter().any(|other| other.id() == boid.id()) {
            return Err(FlockError::DuplicateId(boid.id()));
        }

        // Start on the field
        boid.position.x = wrap(boid.position.x, self.params.width);
        boid.position.y = wrap(boid.position.y, self.params.height);

        // Ids are never handed out twice, even past a manually chosen one
        self.next_id = self.next_id.max(boid.id().0.saturating_add(1));
        self.boids.push(boid);
        Ok(())
    }

    /// Advances every boid by one tick.
    pub fn step(&mut self) {
        physics::update_boids(&mut self.boids, self.repulsor, &self.params);
        self.tick += 1;
    }

    /// Sets the repulsor at `point` if there is none, removes it otherwise.
    /// Returns whether a repulsor is present afterwards.
    pub fn toggle_repulsor(&mut self, point: Vec2) -> bool {
        self.repulsor = match self.repulsor {
            Some(_) => None,
            None => Some(point),
        };
        debug!("repulsor {:?} at tick {}", self.repulsor, self.tick);
        self.repulsor.is_some()
    }

    pub fn repulsor(&self) -> Option<Vec2> {
        self.repulsor
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boid(&self, id: BoidId) -> Option<&Boid> {
        self.boids.iter().find(|boid| boid.id() == id)
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }
}
