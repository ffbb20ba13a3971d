//! Error types
//!
//! Only construction and a missing velocity command are failures; everything
//! else the simulation reports through booleans and phases.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Missing velocity command for moving group {group_id}")]
    MissingCommand { group_id: u32 },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),
}

impl GroupError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        GroupError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

pub type GroupResult<T> = Result<T, GroupError>;
