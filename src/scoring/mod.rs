pub mod game;
pub mod round;
pub mod tournament;

mod errors;
mod rank;
mod registry;

pub use errors::ScoringError;
pub use rank::share_rank_points;
pub use registry::{
    find_game_scoring_system, find_round_scoring_system, find_tournament_scoring_system,
    game_scoring_system_names, game_scoring_systems, round_scoring_system_names,
    round_scoring_systems, tournament_scoring_system_names, tournament_scoring_systems,
};

use std::collections::HashMap;

use uuid::Uuid;

use crate::game::{GameSnapshot, Power};

/// Scores for every power in one game.
pub type PowerScores = HashMap<Power, f64>;

/// A score per player.
pub type PlayerScores = HashMap<Uuid, f64>;

/// Every score a player earned at one level, e.g. all of a player's game
/// scores within one round.
pub type PlayerScoreLists = HashMap<Uuid, Vec<f64>>;

/// A scoring system for a single game.
///
/// Implementations are stateless; identity is the display name, which is
/// what round configuration stores.
pub trait GameScoringSystem: Send + Sync {
    fn name(&self) -> &str;

    /// Computes a score for every power from the game's reported history.
    /// Only the final reported year matters.
    fn scores(&self, game: &GameSnapshot) -> Result<PowerScores, ScoringError>;
}

/// Combines a player's game scores within one round into a round score.
pub trait RoundScoringSystem: Send + Sync {
    fn name(&self) -> &str;

    /// `game_scores` holds, per player, every game score they earned in the
    /// round (several boards or a mid-game replacement give more than one).
    fn scores(&self, game_scores: &PlayerScoreLists) -> PlayerScores;
}

/// Combines a player's round scores into a tournament score.
pub trait TournamentScoringSystem: Send + Sync {
    fn name(&self) -> &str;

    fn scores(&self, round_scores: &PlayerScoreLists) -> PlayerScores;
}
