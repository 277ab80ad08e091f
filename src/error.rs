//! Errors raised while configuring a simulation.
//!
//! Command execution itself never fails; only building a grid from
//! user-supplied bounds or loading a configuration file can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid grid bounds: ({min_x},{min_y}) to ({max_x},{max_y}) is empty")]
    InvalidBounds {
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    },

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
