use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Supply centres on the standard board.
pub const TOTAL_CENTRES: u8 = 34;
/// Centres needed to win outright (majority plus one).
pub const WINNING_CENTRES: u8 = 18;
/// First game year. The seeded starting position is recorded as the year before.
pub const FIRST_YEAR: u16 = 1901;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
pub enum Power {
    Austria,
    England,
    France,
    Germany,
    Italy,
    Russia,
    Turkey,
}

impl Power {
    /// One-letter abbreviation used in reports and data entry.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Power::Austria => "A",
            Power::England => "E",
            Power::France => "F",
            Power::Germany => "G",
            Power::Italy => "I",
            Power::Russia => "R",
            Power::Turkey => "T",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Power::Austria => "Austria-Hungary",
            Power::England => "England",
            Power::France => "France",
            Power::Germany => "Germany",
            Power::Italy => "Italy",
            Power::Russia => "Russia",
            Power::Turkey => "Turkey",
        }
    }

    /// Home centres owned at the start of the game.
    pub fn starting_centres(&self) -> u8 {
        match self {
            Power::Russia => 4,
            _ => 3,
        }
    }

    pub fn all() -> Vec<Power> {
        Power::iter().collect()
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Power {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "A" => Ok(Power::Austria),
            "E" => Ok(Power::England),
            "F" => Ok(Power::France),
            "G" => Ok(Power::Germany),
            "I" => Ok(Power::Italy),
            "R" => Ok(Power::Russia),
            "T" => Ok(Power::Turkey),
            _ => Err(s.to_string()),
        }
    }
}
