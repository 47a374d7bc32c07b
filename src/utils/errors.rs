use std::io;
use thiserror::Error;

use crate::resources::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid navigation system: {0}")]
    InvalidNavigationSystem(String),

    #[error("State error: {0}")]
    StateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
