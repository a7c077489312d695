use thiserror::Error;

use crate::game::GameStateError;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("unknown scoring system: {0}")]
    UnknownSystem(String),

    #[error("invalid game state: {0}")]
    InvalidGameState(#[from] GameStateError),
}
