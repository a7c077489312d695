use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::{CentreCount, DrawProposal, GameSnapshot, Power, Season, FIRST_YEAR};

/// A person who plays Diplomacy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl Player {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Deterministic ordering key for breaking score ties.
    pub fn sort_key(&self) -> (String, String) {
        (self.last_name.clone(), self.first_name.clone())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// One player's membership of a tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentPlayer {
    pub player: Player,
    /// Cached tournament score, maintained by the surrounding application.
    pub score: f64,
    /// Unranked players (e.g. the tournament director) are listed but never
    /// occupy a numeric rank, and are left out of the best-country report.
    pub unranked: bool,
}

impl TournamentPlayer {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            score: 0.0,
            unranked: false,
        }
    }
}

/// One player's participation in a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundPlayer {
    pub player: Uuid,
    /// Cached round score, maintained by the surrounding application.
    pub score: f64,
}

impl RoundPlayer {
    pub fn new(player: Uuid) -> Self {
        Self { player, score: 0.0 }
    }
}

/// One player's tenure of a power in one game. Replacements get their own
/// entry with a later starting season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub player: Uuid,
    pub power: Power,
    pub first_year: u16,
    pub first_season: Season,
    pub last_year: Option<u16>,
    pub last_season: Option<Season>,
}

impl GamePlayer {
    pub fn new(player: Uuid, power: Power) -> Self {
        Self {
            player,
            power,
            first_year: FIRST_YEAR,
            first_season: Season::Spring,
            last_year: None,
            last_season: None,
        }
    }

    pub fn replacing_from(mut self, year: u16, season: Season) -> Self {
        self.first_year = year;
        self.first_season = season;
        self
    }

    pub fn until(mut self, year: u16, season: Season) -> Self {
        self.last_year = Some(year);
        self.last_season = Some(season);
        self
    }

    fn start_ordinal(&self) -> u32 {
        season_ordinal(self.first_year, self.first_season)
    }

    fn end_ordinal(&self) -> Option<u32> {
        match (self.last_year, self.last_season) {
            (Some(year), Some(season)) => Some(season_ordinal(year, season)),
            _ => None,
        }
    }

    /// Whether two tenures of the same power overlap in time. Open-ended
    /// tenures run to the end of the game.
    pub fn overlaps(&self, other: &GamePlayer) -> bool {
        let (earlier, later) = if self.start_ordinal() <= other.start_ordinal() {
            (self, other)
        } else {
            (other, self)
        };
        match earlier.end_ordinal() {
            Some(end) => end >= later.start_ordinal(),
            None => true,
        }
    }
}

fn season_ordinal(year: u16, season: Season) -> u32 {
    u32::from(year) * 2
        + match season {
            Season::Spring => 0,
            Season::Fall => 1,
        }
}

/// A single game of Diplomacy within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    pub counts: Vec<CentreCount>,
    pub draw_proposals: Vec<DrawProposal>,
    pub players: Vec<GamePlayer>,
    pub dias: bool,
    pub is_finished: bool,
}

impl Game {
    pub fn passed_draw(&self) -> Option<&DrawProposal> {
        self.draw_proposals.iter().find(|dp| dp.passed)
    }

    /// The immutable view the scoring engine consumes.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.counts.clone(), self.passed_draw().cloned(), self.dias)
    }

    /// The player currently (or finally) holding a power. Earlier holders
    /// of a replaced power keep their tenure entry but the power's score
    /// goes to its latest player.
    pub fn latest_player_for(&self, power: Power) -> Option<Uuid> {
        self.players
            .iter()
            .filter(|gp| gp.power == power)
            .max_by_key(|gp| gp.start_ordinal())
            .map(|gp| gp.player)
    }
}

/// A single round of a tournament. Picks the game scoring system for its
/// boards and whether draws must include all survivors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u8,
    pub scoring_system: String,
    pub dias: bool,
    pub final_year: Option<u16>,
    pub games: Vec<Game>,
    pub players: Vec<RoundPlayer>,
}

impl Round {
    pub fn new(number: u8, scoring_system: &str, dias: bool) -> Self {
        Self {
            number,
            scoring_system: scoring_system.to_string(),
            dias,
            final_year: None,
            games: Vec::new(),
            players: Vec::new(),
        }
    }

    pub fn with_final_year(mut self, final_year: u16) -> Self {
        self.final_year = Some(final_year);
        self
    }
}

/// Comparison key for the best-country report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestCountryCriterion {
    #[default]
    FinalCentreCount,
    GameScore,
}

/// A Diplomacy tournament: roster, rounds, and the scoring configuration
/// (system names resolved through the scoring registry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub round_scoring_system: String,
    pub tournament_scoring_system: String,
    pub best_country_criterion: BestCountryCriterion,
    pub players: Vec<TournamentPlayer>,
    pub rounds: Vec<Round>,
}

impl Tournament {
    pub fn player(&self, id: Uuid) -> Option<&TournamentPlayer> {
        self.players.iter().find(|tp| tp.player.id == id)
    }

    pub fn round(&self, number: u8) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    pub fn game(&self, name: &str) -> Option<&Game> {
        self.rounds.iter().flat_map(|r| &r.games).find(|g| g.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_display_and_sort_by_name() {
        let player = Player::new("Ada", "Lovelace");
        assert_eq!(player.to_string(), "Ada Lovelace");
        assert_eq!(
            player.sort_key(),
            ("Lovelace".to_string(), "Ada".to_string())
        );
    }

    #[test]
    fn closed_tenures_in_sequence_do_not_overlap() {
        let id = Uuid::new_v4();
        let first = GamePlayer::new(id, Power::France).until(1903, Season::Spring);
        let second =
            GamePlayer::new(Uuid::new_v4(), Power::France).replacing_from(1903, Season::Fall);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn open_tenure_overlaps_any_later_start() {
        let first = GamePlayer::new(Uuid::new_v4(), Power::France);
        let second =
            GamePlayer::new(Uuid::new_v4(), Power::France).replacing_from(1904, Season::Spring);
        assert!(first.overlaps(&second));
    }

    #[test]
    fn tenures_touching_the_same_season_overlap() {
        let first = GamePlayer::new(Uuid::new_v4(), Power::France).until(1903, Season::Fall);
        let second =
            GamePlayer::new(Uuid::new_v4(), Power::France).replacing_from(1903, Season::Fall);
        assert!(first.overlaps(&second));
    }

    #[test]
    fn latest_player_wins_the_power() {
        let original = Uuid::new_v4();
        let replacement = Uuid::new_v4();
        let game = Game {
            name: "g1".to_string(),
            counts: Vec::new(),
            draw_proposals: Vec::new(),
            players: vec![
                GamePlayer::new(original, Power::Italy).until(1902, Season::Spring),
                GamePlayer::new(replacement, Power::Italy).replacing_from(1902, Season::Fall),
            ],
            dias: false,
            is_finished: false,
        };
        assert_eq!(game.latest_player_for(Power::Italy), Some(replacement));
        assert_eq!(game.latest_player_for(Power::Turkey), None);
    }
}
