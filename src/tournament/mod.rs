// Public API
pub use errors::TournamentError;
pub use models::{
    BestCountryCriterion, Game, GamePlayer, Player, Round, RoundPlayer, Tournament,
    TournamentPlayer,
};
pub use repository::{InMemoryTournamentRepository, TournamentRepository};

// Internal modules
mod errors;
mod models;
mod repository;
