/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * tunable constants of the flocking rules. Parameters are fixed once the
 * flock is built; `validate` rejects malformed values up front so the
 * per-tick code never has to.
 */

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

// Distance below which damped cohesion slows down
pub const DEFAULT_COHESION_DAMPING_DISTANCE: f32 = 100.0;

/// How the cohesion rule turns the offset to the local centre of mass into a
/// steering force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CohesionMode {
    /// Offset to the centre of mass, clamped to `max_force`.
    #[default]
    Plain,
    /// Experimental: desired velocity towards the centre, slowed down inside
    /// `cohesion_damping_distance`, minus the current velocity.
    Damped,
}

// Parameters for the simulation, fixed for the duration of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub width: f32,
    pub height: f32,
    pub neighbor_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub desired_separation: f32,
    pub repulsor_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub repulsor_weight: f32,
    pub cohesion_mode: CohesionMode,
    pub cohesion_damping_distance: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            neighbor_radius: 60.0,
            max_speed: 1.5,
            max_force: 0.04,
            desired_separation: 15.0,
            repulsor_radius: 30.0,
            separation_weight: 1.0,
            alignment_weight: 0.4,
            cohesion_weight: 0.2,
            repulsor_weight: 3.0,
            cohesion_mode: CohesionMode::Plain,
            cohesion_damping_distance: DEFAULT_COHESION_DAMPING_DISTANCE,
        }
    }
}

impl SimulationParams {
    /// Checks every value once, before any boid moves.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let all = [
            ("width", self.width),
            ("height", self.height),
            ("neighbor_radius", self.neighbor_radius),
            ("max_speed", self.max_speed),
            ("max_force", self.max_force),
            ("desired_separation", self.desired_separation),
            ("repulsor_radius", self.repulsor_radius),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("repulsor_weight", self.repulsor_weight),
            ("cohesion_damping_distance", self.cohesion_damping_distance),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name, value });
            }
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("max_speed", self.max_speed),
            ("cohesion_damping_distance", self.cohesion_damping_distance),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ParamsError::NotPositive { name, value });
            }
        }

        // Weights may be negative (inverting a rule is a valid experiment)
        let non_negative = [
            ("neighbor_radius", self.neighbor_radius),
            ("max_force", self.max_force),
            ("desired_separation", self.desired_separation),
            ("repulsor_radius", self.repulsor_radius),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ParamsError::Negative { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimulationParams::default().validate(), Ok(()));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let params = SimulationParams {
            neighbor_radius: -1.0,
            ..SimulationParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamsError::Negative { name: "neighbor_radius", value: -1.0 })
        );
    }

    #[test]
    fn zero_field_is_rejected() {
        let params = SimulationParams {
            height: 0.0,
            ..SimulationParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NotPositive { name: "height", .. })
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let params = SimulationParams {
            cohesion_weight: f32::NAN,
            ..SimulationParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NotFinite { name: "cohesion_weight", .. })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: SimulationParams =
            serde_json::from_str(r#"{ "max_speed": 3.0, "cohesion_mode": "damped" }"#).unwrap();
        assert_eq!(params.max_speed, 3.0);
        assert_eq!(params.cohesion_mode, CohesionMode::Damped);
        assert_eq!(params.neighbor_radius, 60.0);
    }
}
