//! Error types for the grass simulation.

use thiserror::Error;

/// Errors raised while building or loading a scene configuration.
///
/// The simulation itself never fails once a scene exists.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
