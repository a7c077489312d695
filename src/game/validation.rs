//! Data-entry validation. Everything here runs when results are recorded,
//! so the scoring engine can assume a consistent game history.

use std::collections::HashSet;

use super::errors::GameStateError;
use super::models::{CentreCount, DrawProposal, GameSnapshot};
use super::power::{FIRST_YEAR, TOTAL_CENTRES};

pub fn validate_year(year: u16) -> Result<(), GameStateError> {
    if year < FIRST_YEAR {
        return Err(GameStateError::InvalidYear(year));
    }
    Ok(())
}

/// Like [`validate_year`] but also allows the seeded starting year.
pub fn validate_year_including_start(year: u16) -> Result<(), GameStateError> {
    if year < FIRST_YEAR - 1 {
        return Err(GameStateError::InvalidYear(year));
    }
    Ok(())
}

pub fn validate_centre_count_value(count: u8) -> Result<(), GameStateError> {
    if count > TOTAL_CENTRES {
        return Err(GameStateError::InvalidCentreCount(count));
    }
    Ok(())
}

/// Validates one new centre count against the history recorded so far.
///
/// `round_final_year` is the fixed end year of the round, if the round has
/// one; counts beyond it are rejected.
pub fn validate_centre_count(
    snapshot: &GameSnapshot,
    new: &CentreCount,
    round_final_year: Option<u16>,
) -> Result<(), GameStateError> {
    validate_year_including_start(new.year)?;
    validate_centre_count_value(new.count)?;

    if let Some(final_year) = round_final_year {
        if new.year > final_year {
            return Err(GameStateError::BeyondFinalYear { final_year });
        }
    }

    if snapshot.count_for(new.power, new.year).is_some() {
        return Err(GameStateError::DuplicateCentreCount {
            power: new.power,
            year: new.year,
        });
    }

    // A power cannot more than double in a year, and an eliminated power
    // stays eliminated. A missing previous year means a gap in the data or
    // the first entry; both are let go.
    if let Some(previous) = snapshot.count_for(new.power, new.year - 1) {
        if new.count > 2 * previous {
            return Err(GameStateError::MoreThanDoubled {
                power: new.power,
                previous,
                count: new.count,
            });
        }
        if previous == 0 && new.count > 0 {
            return Err(GameStateError::RevivedFromZero { power: new.power });
        }
    }

    Ok(())
}

/// Validates a draw proposal against the game state it was voted in.
pub fn validate_draw_proposal(
    snapshot: &GameSnapshot,
    proposal: &DrawProposal,
) -> Result<(), GameStateError> {
    validate_year(proposal.year)?;

    if proposal.powers.is_empty() {
        return Err(GameStateError::EmptyDraw);
    }

    let mut seen = HashSet::new();
    for power in &proposal.powers {
        if !seen.insert(*power) {
            return Err(GameStateError::DuplicateDrawPower(*power));
        }
    }

    // No dead powers included; under DIAS every living power must be in.
    for cc in snapshot.final_year_counts()? {
        if proposal.includes(cc.power) {
            if cc.count == 0 {
                return Err(GameStateError::DeadPowerInDraw(cc.power));
            }
        } else if snapshot.dias && cc.count > 0 {
            return Err(GameStateError::MissingSurvivor(cc.power));
        }
    }

    if proposal.passed && snapshot.passed_draw.is_some() {
        return Err(GameStateError::SecondPassedDraw);
    }

    Ok(())
}
