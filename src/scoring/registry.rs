//! The closed sets of scoring systems the application supports. Rounds and
//! tournaments store a system's display name; configuration is validated
//! against these lists when saved, and resolved through them when scoring.

use std::sync::Arc;

use super::game::{CDiplo, Carnage, DrawSize, SoloOrBust, SumOfSquares};
use super::round::BestGame;
use super::tournament::SumBestRounds;
use super::{GameScoringSystem, RoundScoringSystem, TournamentScoringSystem};

/// Every supported game scoring system, including the fixed C-Diplo presets.
pub fn game_scoring_systems() -> Vec<Arc<dyn GameScoringSystem>> {
    vec![
        Arc::new(SoloOrBust),
        Arc::new(DrawSize),
        Arc::new(CDiplo::new("CDiplo 100", 100.0, 1.0, 38.0, 14.0, 7.0)),
        Arc::new(CDiplo::new("CDiplo 80", 80.0, 0.0, 25.0, 14.0, 7.0)),
        Arc::new(SumOfSquares),
        Arc::new(Carnage),
    ]
}

pub fn round_scoring_systems() -> Vec<Arc<dyn RoundScoringSystem>> {
    vec![Arc::new(BestGame)]
}

pub fn tournament_scoring_systems() -> Vec<Arc<dyn TournamentScoringSystem>> {
    vec![
        Arc::new(SumBestRounds::new("Sum best 2 rounds", 2)),
        Arc::new(SumBestRounds::new("Sum best 3 rounds", 3)),
        Arc::new(SumBestRounds::new("Sum best 4 rounds", 4)),
    ]
}

pub fn find_game_scoring_system(name: &str) -> Option<Arc<dyn GameScoringSystem>> {
    game_scoring_systems().into_iter().find(|s| s.name() == name)
}

pub fn find_round_scoring_system(name: &str) -> Option<Arc<dyn RoundScoringSystem>> {
    round_scoring_systems().into_iter().find(|s| s.name() == name)
}

pub fn find_tournament_scoring_system(name: &str) -> Option<Arc<dyn TournamentScoringSystem>> {
    tournament_scoring_systems()
        .into_iter()
        .find(|s| s.name() == name)
}

/// Sorted name lists for configuration UIs.
pub fn game_scoring_system_names() -> Vec<String> {
    sorted_names(game_scoring_systems().iter().map(|s| s.name().to_string()))
}

pub fn round_scoring_system_names() -> Vec<String> {
    sorted_names(round_scoring_systems().iter().map(|s| s.name().to_string()))
}

pub fn tournament_scoring_system_names() -> Vec<String> {
    sorted_names(
        tournament_scoring_systems()
            .iter()
            .map(|s| s.name().to_string()),
    )
}

fn sorted_names(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.collect();
    names.sort();
    names
}
