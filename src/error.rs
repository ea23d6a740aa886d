//! Error taxonomy for the game core.

use crate::state::Screen;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Invalid name: {reason}")]
    Validation { reason: String },

    #[error("Choice {index} is out of range for node {node} ({available} choices)")]
    ChoiceOutOfRange {
        node: i32,
        index: usize,
        available: usize,
    },

    #[error("Story node not found: {0}")]
    NodeNotFound(i32),

    #[error("Cannot navigate from {from:?} to {to:?}")]
    InvalidTransition { from: Screen, to: Screen },

    #[error("Story graph is invalid: {0}")]
    InvalidGraph(String),

    #[error("Story data could not be parsed: {0}")]
    StoryData(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown package: {0}")]
    UnknownPackage(usize),
}

impl GameError {
    /// Structural defects halt play instead of being shown as a notice.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::NodeNotFound(_) | GameError::InvalidGraph(_) | GameError::StoryData(_)
        )
    }
}
