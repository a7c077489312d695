use thiserror::Error;
use uuid::Uuid;

use crate::game::{GameStateError, Power};

#[derive(Debug, Error, PartialEq)]
pub enum TournamentError {
    #[error("tournament {0} not found")]
    TournamentNotFound(Uuid),

    #[error("tournament {0} already exists")]
    DuplicateTournament(Uuid),

    #[error("round {0} not found")]
    RoundNotFound(u8),

    #[error("round {0} already exists")]
    DuplicateRound(u8),

    #[error("game {0} not found")]
    GameNotFound(String),

    #[error("game {0} already exists in this tournament")]
    DuplicateGame(String),

    #[error("player is not yet in the tournament")]
    PlayerNotInTournament(Uuid),

    #[error("player is already in the tournament")]
    DuplicatePlayer(Uuid),

    #[error("final season and final year must be specified together")]
    IncompleteTenureEnd,

    #[error("{0} already has a player for an overlapping period")]
    OverlappingTenure(Power),

    #[error("invalid game state: {0}")]
    Validation(#[from] GameStateError),
}
