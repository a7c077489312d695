use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Power;
use crate::tournament::Player;

/// A tournament rank. Unranked players are listed after every numeric
/// rank and never consume a numeric slot, which the derived ordering
/// (`Ranked` before `Unranked`, numbers ascending) gives for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ranked(u32),
    Unranked,
}

impl Rank {
    pub fn is_ranked(&self) -> bool {
        matches!(self, Rank::Ranked(_))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(position) => write!(f, "{}", position),
            Rank::Unranked => write!(f, "Unranked"),
        }
    }
}

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub player: Player,
    pub rank: Rank,
    pub score: f64,
    /// Round score per round number, for the rounds the player played.
    pub round_scores: BTreeMap<u8, f64>,
}

/// Tournament standings, best first, usable both for the final result and
/// for "if the tournament ended now" on partial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub rows: Vec<PlayerStanding>,
}

impl Standings {
    pub fn winner(&self) -> Option<&PlayerStanding> {
        self.rows.first()
    }

    pub fn standing_for(&self, player_id: uuid::Uuid) -> Option<&PlayerStanding> {
        self.rows.iter().find(|row| row.player.id == player_id)
    }
}

/// One (player, power, game) performance in the best-country report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPerformance {
    pub player: Player,
    pub power: Power,
    pub game: String,
    pub final_centres: u8,
    pub score: f64,
}
