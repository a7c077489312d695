// Library crate for the Diplomacy tournament scoring engine
// This file exposes the public API for integration tests and embedders

pub mod game;
pub mod scoring;
pub mod standings;
pub mod tournament;

// Re-export commonly used types for easier access
pub use game::{CentreCount, DrawProposal, GameSnapshot, Power, Season};
pub use scoring::{
    find_game_scoring_system, find_round_scoring_system, find_tournament_scoring_system,
    ScoringError,
};
pub use standings::{Rank, Standings, StandingsError, StandingsService};
pub use tournament::{
    InMemoryTournamentRepository, Tournament, TournamentError, TournamentRepository,
};
