use thiserror::Error;

use super::Power;

#[derive(Debug, Error, PartialEq)]
pub enum GameStateError {
    #[error("{0} is not a valid game year")]
    InvalidYear(u16),

    #[error("{0} is not a valid centre count")]
    InvalidCentreCount(u8),

    #[error("game has no centre counts")]
    NoCentreCounts,

    #[error("{power} already has a centre count for {year}")]
    DuplicateCentreCount { power: Power, year: u16 },

    #[error("centre count for a power cannot more than double in a year ({previous} to {count})")]
    MoreThanDoubled { power: Power, previous: u8, count: u8 },

    #[error("centre count for {power} cannot increase from zero")]
    RevivedFromZero { power: Power },

    #[error("games in this round end with {final_year}")]
    BeyondFinalYear { final_year: u16 },

    #[error("draw proposal names no powers")]
    EmptyDraw,

    #[error("{0} present more than once in draw proposal")]
    DuplicateDrawPower(Power),

    #[error("dead power {0} included in draw proposal")]
    DeadPowerInDraw(Power),

    #[error("missing alive power {0} in DIAS game")]
    MissingSurvivor(Power),

    #[error("game already has a successful draw proposal")]
    SecondPassedDraw,
}
