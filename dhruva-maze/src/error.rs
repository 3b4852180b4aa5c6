//! Error types for DhruvaMaze

use thiserror::Error;
use vastu_maze::{ConfigLoadError, MazeError};

/// DhruvaMaze error type
#[derive(Error, Debug)]
pub enum DhruvaError {
    #[error("Simulator I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    #[error("Mouse crashed during {0}")]
    Crash(String),
}

impl From<toml::de::Error> for DhruvaError {
    fn from(e: toml::de::Error) -> Self {
        DhruvaError::Config(e.to_string())
    }
}

impl From<ConfigLoadError> for DhruvaError {
    fn from(e: ConfigLoadError) -> Self {
        DhruvaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DhruvaError>;
