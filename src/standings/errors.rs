use thiserror::Error;
use uuid::Uuid;

use crate::scoring::ScoringError;
use crate::tournament::TournamentError;

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("tournament {0} not found")]
    TournamentNotFound(Uuid),

    #[error("tournament has no players")]
    NoPlayers,

    #[error("repository error: {0}")]
    Repository(#[from] TournamentError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),
}
