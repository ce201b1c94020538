//! Setup-time error types.
//!
//! Nothing inside a tick can fail; these cover configuration and flock
//! construction, where bad input is rejected before the simulation starts.

use std::path::PathBuf;

use thiserror::Error;

use crate::boid::BoidId;

/// A simulation parameter outside its valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

/// Errors raised while assembling a flock.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("invalid simulation parameters: {0}")]
    InvalidParams(#[from] ParamsError),
    #[error("boid id {0} is used more than once")]
    DuplicateId(BoidId),
    #[error("boid {0} has a non-finite position or velocity")]
    NonFiniteState(BoidId),
    #[error("boids cannot be added after the simulation has started (tick {tick})")]
    AlreadyStarted { tick: u64 },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidParams(#[from] ParamsError),
}
