// Public API
pub use errors::StandingsError;
pub use models::{CountryPerformance, PlayerStanding, Rank, Standings};
pub use service::StandingsService;

// Internal modules
mod errors;
mod models;
mod service;
