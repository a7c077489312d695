use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::game::Power;
use crate::scoring::{
    find_game_scoring_system, find_round_scoring_system, find_tournament_scoring_system,
    PlayerScoreLists, PlayerScores, ScoringError,
};
use crate::tournament::{
    BestCountryCriterion, Round, Tournament, TournamentPlayer, TournamentRepository,
};

use super::models::{CountryPerformance, PlayerStanding, Rank, Standings};
use super::StandingsError;

/// Computes standings and the best-country report for a tournament, from
/// whatever data the repository holds right now. Re-running on unchanged
/// data gives identical results, so the same call answers both the final
/// standings and "if the tournament ended now".
pub struct StandingsService {
    repository: Arc<dyn TournamentRepository>,
}

impl StandingsService {
    pub fn new(repository: Arc<dyn TournamentRepository>) -> Self {
        Self { repository }
    }

    pub async fn standings(&self, tournament_id: Uuid) -> Result<Standings, StandingsError> {
        let tournament = self.load(tournament_id).await?;
        if tournament.players.is_empty() {
            return Err(StandingsError::NoPlayers);
        }
        let round_system = find_round_scoring_system(&tournament.round_scoring_system)
            .ok_or_else(|| ScoringError::UnknownSystem(tournament.round_scoring_system.clone()))?;
        let tournament_system =
            find_tournament_scoring_system(&tournament.tournament_scoring_system).ok_or_else(
                || ScoringError::UnknownSystem(tournament.tournament_scoring_system.clone()),
            )?;

        tracing::debug!(
            tournament = %tournament.name,
            rounds = tournament.rounds.len(),
            players = tournament.players.len(),
            "computing standings"
        );

        // Game scores roll up into round scores, round by round
        let mut scores_by_round: BTreeMap<u8, PlayerScores> = BTreeMap::new();
        for round in &tournament.rounds {
            let game_scores = round_game_scores(round)?;
            scores_by_round.insert(round.number, round_system.scores(&game_scores));
        }

        // Round scores roll up into tournament scores; every tournament
        // player is included, scoring 0 if they played nothing
        let mut round_score_lists: PlayerScoreLists = tournament
            .players
            .iter()
            .map(|tp| (tp.player.id, Vec::new()))
            .collect();
        for round_scores in scores_by_round.values() {
            for (player, score) in round_scores {
                round_score_lists.entry(*player).or_default().push(*score);
            }
        }
        let tournament_scores = tournament_system.scores(&round_score_lists);

        let scored: Vec<(TournamentPlayer, f64, BTreeMap<u8, f64>)> = tournament
            .players
            .iter()
            .map(|tp| {
                let score = tournament_scores
                    .get(&tp.player.id)
                    .copied()
                    .unwrap_or_default();
                let per_round: BTreeMap<u8, f64> = scores_by_round
                    .iter()
                    .filter_map(|(number, scores)| {
                        scores.get(&tp.player.id).map(|s| (*number, *s))
                    })
                    .collect();
                (tp.clone(), score, per_round)
            })
            .collect();

        Ok(Standings {
            rows: rank_rows(scored),
        })
    }

    /// Every (player, power, game) performance in the tournament, grouped
    /// by power and ordered best first by the tournament's configured
    /// criterion. Unranked players are left out. Empty when no games exist.
    pub async fn best_countries(
        &self,
        tournament_id: Uuid,
    ) -> Result<HashMap<Power, Vec<CountryPerformance>>, StandingsError> {
        let tournament = self.load(tournament_id).await?;
        let mut report: HashMap<Power, Vec<CountryPerformance>> = HashMap::new();
        if tournament.rounds.iter().all(|r| r.games.is_empty()) {
            return Ok(report);
        }
        for power in Power::iter() {
            report.insert(power, Vec::new());
        }

        for round in &tournament.rounds {
            let system = find_game_scoring_system(&round.scoring_system)
                .ok_or_else(|| ScoringError::UnknownSystem(round.scoring_system.clone()))?;
            for game in &round.games {
                let snapshot = game.snapshot();
                let scores = system.scores(&snapshot)?;
                let final_counts: HashMap<Power, u8> = snapshot
                    .final_year_counts()
                    .map_err(ScoringError::from)?
                    .into_iter()
                    .map(|cc| (cc.power, cc.count))
                    .collect();
                for game_player in &game.players {
                    let Some(tp) = tournament.player(game_player.player) else {
                        continue;
                    };
                    if tp.unranked {
                        continue;
                    }
                    let performance = CountryPerformance {
                        player: tp.player.clone(),
                        power: game_player.power,
                        game: game.name.clone(),
                        final_centres: final_counts
                            .get(&game_player.power)
                            .copied()
                            .unwrap_or_default(),
                        score: scores.get(&game_player.power).copied().unwrap_or_default(),
                    };
                    report
                        .entry(game_player.power)
                        .or_default()
                        .push(performance);
                }
            }
        }

        let criterion = tournament.best_country_criterion;
        for performances in report.values_mut() {
            performances.sort_by(|a, b| {
                criterion_value(b, criterion)
                    .total_cmp(&criterion_value(a, criterion))
                    .then_with(|| a.player.sort_key().cmp(&b.player.sort_key()))
            });
        }
        Ok(report)
    }

    async fn load(&self, tournament_id: Uuid) -> Result<Tournament, StandingsError> {
        self.repository
            .get_tournament(tournament_id)
            .await?
            .ok_or(StandingsError::TournamentNotFound(tournament_id))
    }
}

fn criterion_value(performance: &CountryPerformance, criterion: BestCountryCriterion) -> f64 {
    match criterion {
        BestCountryCriterion::FinalCentreCount => f64::from(performance.final_centres),
        BestCountryCriterion::GameScore => performance.score,
    }
}

/// Scores every game of a round and collects, per player, the game scores
/// they earned. A power's score goes to its latest player; earlier holders
/// of a replaced power are not attributed a share.
fn round_game_scores(round: &Round) -> Result<PlayerScoreLists, StandingsError> {
    let system = find_game_scoring_system(&round.scoring_system)
        .ok_or_else(|| ScoringError::UnknownSystem(round.scoring_system.clone()))?;
    let mut lists = PlayerScoreLists::new();
    for game in &round.games {
        let scores = system.scores(&game.snapshot())?;
        for (power, score) in scores {
            if let Some(player) = game.latest_player_for(power) {
                lists.entry(player).or_default().push(score);
            }
        }
    }
    Ok(lists)
}

/// Sorts scored players and assigns dense competition ranks: equal scores
/// share a rank, the next distinct score ranks 1 + the number of ranked
/// players strictly ahead. Unranked players keep their score ordering but
/// always come last and never take a numeric rank.
fn rank_rows(
    mut scored: Vec<(TournamentPlayer, f64, BTreeMap<u8, f64>)>,
) -> Vec<PlayerStanding> {
    scored.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| a.0.player.sort_key().cmp(&b.0.player.sort_key()))
    });

    let mut rows = Vec::with_capacity(scored.len());
    let mut ranked_ahead = 0u32;
    let mut previous: Option<(f64, u32)> = None;
    for (tp, score, round_scores) in scored {
        let rank = if tp.unranked {
            Rank::Unranked
        } else {
            let position = match previous {
                Some((tied_score, rank)) if tied_score == score => rank,
                _ => ranked_ahead + 1,
            };
            previous = Some((score, position));
            ranked_ahead += 1;
            Rank::Ranked(position)
        };
        rows.push(PlayerStanding {
            player: tp.player,
            rank,
            score,
            round_scores,
        });
    }

    // Stable, so tied ranks keep their alphabetic order and unranked
    // players keep their score order at the back
    rows.sort_by_key(|row| row.rank);
    rows
}
