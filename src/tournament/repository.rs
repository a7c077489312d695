use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::game::{
    validation, CentreCount, DrawProposal, Power, FIRST_YEAR, WINNING_CENTRES,
};

use super::models::{Game, GamePlayer, Player, Round, RoundPlayer, Tournament, TournamentPlayer};
use super::TournamentError;

/// Storage seam for tournaments. The embedding application implements this
/// over its own store; [`InMemoryTournamentRepository`] is enough for tests
/// and in-process use. All data-entry validation happens here, so consumers
/// of the snapshots can assume a consistent history.
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    async fn create_tournament(&self, tournament: Tournament) -> Result<(), TournamentError>;

    async fn get_tournament(&self, id: Uuid) -> Result<Option<Tournament>, TournamentError>;

    async fn add_player(
        &self,
        tournament_id: Uuid,
        player: Player,
        unranked: bool,
    ) -> Result<(), TournamentError>;

    async fn add_round(&self, tournament_id: Uuid, round: Round) -> Result<(), TournamentError>;

    async fn add_round_player(
        &self,
        tournament_id: Uuid,
        round_number: u8,
        player: Uuid,
    ) -> Result<(), TournamentError>;

    /// Creates a game in a round and seeds its starting-position centre
    /// counts, so every game has a defined final year from the start.
    async fn add_game(
        &self,
        tournament_id: Uuid,
        round_number: u8,
        name: &str,
    ) -> Result<(), TournamentError>;

    async fn add_game_player(
        &self,
        tournament_id: Uuid,
        game_name: &str,
        game_player: GamePlayer,
    ) -> Result<(), TournamentError>;

    async fn record_centre_count(
        &self,
        tournament_id: Uuid,
        game_name: &str,
        count: CentreCount,
    ) -> Result<(), TournamentError>;

    async fn record_draw_proposal(
        &self,
        tournament_id: Uuid,
        game_name: &str,
        proposal: DrawProposal,
    ) -> Result<(), TournamentError>;
}

#[derive(Debug, Default)]
pub struct InMemoryTournamentRepository {
    tournaments: Arc<RwLock<HashMap<Uuid, Tournament>>>,
}

impl InMemoryTournamentRepository {
    pub fn new() -> Self {
        Self {
            tournaments: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn tournament_mut(
    tournaments: &mut HashMap<Uuid, Tournament>,
    id: Uuid,
) -> Result<&mut Tournament, TournamentError> {
    tournaments
        .get_mut(&id)
        .ok_or(TournamentError::TournamentNotFound(id))
}

fn game_mut<'a>(
    tournament: &'a mut Tournament,
    game_name: &str,
) -> Result<(&'a mut Game, Option<u16>), TournamentError> {
    for round in &mut tournament.rounds {
        let final_year = round.final_year;
        if let Some(game) = round.games.iter_mut().find(|g| g.name == game_name) {
            return Ok((game, final_year));
        }
    }
    Err(TournamentError::GameNotFound(game_name.to_string()))
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn create_tournament(&self, tournament: Tournament) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        if tournaments.contains_key(&tournament.id) {
            return Err(TournamentError::DuplicateTournament(tournament.id));
        }
        tracing::debug!(tournament = %tournament.name, "creating tournament");
        tournaments.insert(tournament.id, tournament);
        Ok(())
    }

    async fn get_tournament(&self, id: Uuid) -> Result<Option<Tournament>, TournamentError> {
        let tournaments = self.tournaments.read().await;
        Ok(tournaments.get(&id).cloned())
    }

    async fn add_player(
        &self,
        tournament_id: Uuid,
        player: Player,
        unranked: bool,
    ) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournament_mut(&mut tournaments, tournament_id)?;
        if tournament.player(player.id).is_some() {
            return Err(TournamentError::DuplicatePlayer(player.id));
        }
        let mut entry = TournamentPlayer::new(player);
        entry.unranked = unranked;
        tournament.players.push(entry);
        Ok(())
    }

    async fn add_round(&self, tournament_id: Uuid, round: Round) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournament_mut(&mut tournaments, tournament_id)?;
        if tournament.round(round.number).is_some() {
            return Err(TournamentError::DuplicateRound(round.number));
        }
        tournament.rounds.push(round);
        tournament.rounds.sort_by_key(|r| r.number);
        Ok(())
    }

    async fn add_round_player(
        &self,
        tournament_id: Uuid,
        round_number: u8,
        player: Uuid,
    ) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournament_mut(&mut tournaments, tournament_id)?;
        if tournament.player(player).is_none() {
            return Err(TournamentError::PlayerNotInTournament(player));
        }
        let round = tournament
            .rounds
            .iter_mut()
            .find(|r| r.number == round_number)
            .ok_or(TournamentError::RoundNotFound(round_number))?;
        if !round.players.iter().any(|rp| rp.player == player) {
            round.players.push(RoundPlayer::new(player));
        }
        Ok(())
    }

    async fn add_game(
        &self,
        tournament_id: Uuid,
        round_number: u8,
        name: &str,
    ) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournament_mut(&mut tournaments, tournament_id)?;
        // Game names double as identifiers in reports, so they must be
        // unique across the whole tournament, not just the round.
        if tournament.game(name).is_some() {
            return Err(TournamentError::DuplicateGame(name.to_string()));
        }
        let round = tournament
            .rounds
            .iter_mut()
            .find(|r| r.number == round_number)
            .ok_or(TournamentError::RoundNotFound(round_number))?;

        let seeded = Power::iter()
            .map(|p| CentreCount::new(p, FIRST_YEAR - 1, p.starting_centres()))
            .collect();
        round.games.push(Game {
            name: name.to_string(),
            counts: seeded,
            draw_proposals: Vec::new(),
            players: Vec::new(),
            dias: round.dias,
            is_finished: false,
        });
        Ok(())
    }

    async fn add_game_player(
        &self,
        tournament_id: Uuid,
        game_name: &str,
        game_player: GamePlayer,
    ) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournament_mut(&mut tournaments, tournament_id)?;
        if tournament.player(game_player.player).is_none() {
            return Err(TournamentError::PlayerNotInTournament(game_player.player));
        }
        if game_player.last_year.is_some() != game_player.last_season.is_some() {
            return Err(TournamentError::IncompleteTenureEnd);
        }
        let (game, _) = game_mut(tournament, game_name)?;
        let overlap = game
            .players
            .iter()
            .any(|existing| existing.power == game_player.power && existing.overlaps(&game_player));
        if overlap {
            return Err(TournamentError::OverlappingTenure(game_player.power));
        }
        game.players.push(game_player);
        Ok(())
    }

    async fn record_centre_count(
        &self,
        tournament_id: Uuid,
        game_name: &str,
        count: CentreCount,
    ) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournament_mut(&mut tournaments, tournament_id)?;
        let (game, round_final_year) = game_mut(tournament, game_name)?;
        validation::validate_centre_count(&game.snapshot(), &count, round_final_year)?;
        game.counts.push(count);
        // A solo or the round's fixed end year finishes the game
        if count.count >= WINNING_CENTRES || round_final_year == Some(count.year) {
            game.is_finished = true;
        }
        Ok(())
    }

    async fn record_draw_proposal(
        &self,
        tournament_id: Uuid,
        game_name: &str,
        proposal: DrawProposal,
    ) -> Result<(), TournamentError> {
        let mut tournaments = self.tournaments.write().await;
        let tournament = tournament_mut(&mut tournaments, tournament_id)?;
        let (game, _) = game_mut(tournament, game_name)?;
        validation::validate_draw_proposal(&game.snapshot(), &proposal)?;
        if proposal.passed {
            game.is_finished = true;
        }
        game.draw_proposals.push(proposal);
        Ok(())
    }
}
