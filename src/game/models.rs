use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::GameStateError;
use super::power::{Power, WINNING_CENTRES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Fall,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Season::Spring => "S",
                Season::Fall => "F",
            }
        )
    }
}

/// Centres owned by one power at the end of one game year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentreCount {
    pub power: Power,
    pub year: u16,
    pub count: u8,
}

impl CentreCount {
    pub fn new(power: Power, year: u16, count: u8) -> Self {
        Self { power, year, count }
    }
}

/// A draw or concession proposal voted on in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawProposal {
    pub year: u16,
    pub season: Season,
    pub proposer: Power,
    pub passed: bool,
    pub powers: Vec<Power>,
}

impl DrawProposal {
    pub fn draw_size(&self) -> usize {
        self.powers.len()
    }

    pub fn includes(&self, power: Power) -> bool {
        self.powers.contains(&power)
    }
}

/// Immutable view of one game's reported state: the full centre-count
/// history plus the passed draw, if any. This is what the scoring systems
/// consume; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub counts: Vec<CentreCount>,
    pub passed_draw: Option<DrawProposal>,
    pub dias: bool,
}

impl GameSnapshot {
    pub fn new(counts: Vec<CentreCount>, passed_draw: Option<DrawProposal>, dias: bool) -> Self {
        Self {
            counts,
            passed_draw,
            dias,
        }
    }

    /// Years for which any centre count has been reported, ascending.
    pub fn years_played(&self) -> Vec<u16> {
        let years: HashSet<u16> = self.counts.iter().map(|cc| cc.year).collect();
        let mut years: Vec<u16> = years.into_iter().collect();
        years.sort_unstable();
        years
    }

    /// The most recent year with centre counts. A game with no counts at
    /// all is a caller error; creation always seeds the starting position.
    pub fn final_year(&self) -> Result<u16, GameStateError> {
        self.counts
            .iter()
            .map(|cc| cc.year)
            .max()
            .ok_or(GameStateError::NoCentreCounts)
    }

    /// Centre counts for the final year only, ordered largest first.
    pub fn final_year_counts(&self) -> Result<Vec<CentreCount>, GameStateError> {
        let year = self.final_year()?;
        let mut counts: Vec<CentreCount> = self
            .counts
            .iter()
            .filter(|cc| cc.year == year)
            .copied()
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.power.cmp(&b.power)));
        Ok(counts)
    }

    pub fn count_for(&self, power: Power, year: u16) -> Option<u8> {
        self.counts
            .iter()
            .find(|cc| cc.power == power && cc.year == year)
            .map(|cc| cc.count)
    }

    /// Number of powers still owning at least one centre.
    pub fn survivor_count(&self) -> Result<usize, GameStateError> {
        Ok(self
            .final_year_counts()?
            .iter()
            .filter(|cc| cc.count > 0)
            .count())
    }

    /// The power that won outright, if any.
    pub fn soloer(&self) -> Result<Option<Power>, GameStateError> {
        Ok(self
            .final_year_counts()?
            .first()
            .filter(|cc| cc.count >= WINNING_CENTRES)
            .map(|cc| cc.power))
    }

    /// The power(s) with the highest count in the final year.
    pub fn board_toppers(&self) -> Result<Vec<CentreCount>, GameStateError> {
        let counts = self.final_year_counts()?;
        let top = counts.first().map(|cc| cc.count).unwrap_or(0);
        Ok(counts.into_iter().filter(|cc| cc.count == top).collect())
    }

    /// Centres owned by nobody in the given year.
    pub fn neutral_count(&self, year: u16) -> u8 {
        let owned: u8 = self
            .counts
            .iter()
            .filter(|cc| cc.year == year)
            .map(|cc| cc.count)
            .sum();
        super::power::TOTAL_CENTRES.saturating_sub(owned)
    }
}
