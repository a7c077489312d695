use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use boardtop::game::{CentreCount, Power};
use boardtop::standings::StandingsService;
use boardtop::tournament::{
    BestCountryCriterion, GamePlayer, InMemoryTournamentRepository, Player, Round, Tournament,
    TournamentRepository,
};

/// Builds a tournament through the repository API, the way the surrounding
/// application would.
pub struct TournamentBuilder {
    name: String,
    round_scoring_system: String,
    tournament_scoring_system: String,
    best_country_criterion: BestCountryCriterion,
    players: Vec<(Player, bool)>,
}

impl TournamentBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            round_scoring_system: "Best game counts".to_string(),
            tournament_scoring_system: "Sum best 2 rounds".to_string(),
            best_country_criterion: BestCountryCriterion::FinalCentreCount,
            players: Vec::new(),
        }
    }

    pub fn with_tournament_scoring_system(mut self, name: &str) -> Self {
        self.tournament_scoring_system = name.to_string();
        self
    }

    pub fn with_best_country_criterion(mut self, criterion: BestCountryCriterion) -> Self {
        self.best_country_criterion = criterion;
        self
    }

    pub fn with_player(mut self, first_name: &str, last_name: &str) -> Self {
        self.players.push((Player::new(first_name, last_name), false));
        self
    }

    pub fn with_unranked_player(mut self, first_name: &str, last_name: &str) -> Self {
        self.players.push((Player::new(first_name, last_name), true));
        self
    }

    /// Seven players with alphabetically ordered last names.
    pub fn with_seven_players(mut self) -> Self {
        for (first, last) in [
            ("Alice", "Archer"),
            ("Bob", "Baker"),
            ("Carol", "Cooper"),
            ("Dave", "Davis"),
            ("Erin", "Evans"),
            ("Frank", "Foster"),
            ("Grace", "Gray"),
        ] {
            self.players.push((Player::new(first, last), false));
        }
        self
    }

    pub async fn build(self) -> TournamentFixture {
        let repository = Arc::new(InMemoryTournamentRepository::new());
        let tournament = Tournament {
            id: Uuid::new_v4(),
            name: self.name,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            round_scoring_system: self.round_scoring_system,
            tournament_scoring_system: self.tournament_scoring_system,
            best_country_criterion: self.best_country_criterion,
            players: Vec::new(),
            rounds: Vec::new(),
        };
        let tournament_id = tournament.id;
        repository.create_tournament(tournament).await.unwrap();

        let mut players = Vec::new();
        for (player, unranked) in self.players {
            repository
                .add_player(tournament_id, player.clone(), unranked)
                .await
                .unwrap();
            players.push(player);
        }

        TournamentFixture {
            service: StandingsService::new(repository.clone()),
            repository,
            tournament_id,
            players,
        }
    }
}

pub struct TournamentFixture {
    pub repository: Arc<InMemoryTournamentRepository>,
    pub service: StandingsService,
    pub tournament_id: Uuid,
    pub players: Vec<Player>,
}

impl TournamentFixture {
    pub fn player(&self, last_name: &str) -> &Player {
        self.players
            .iter()
            .find(|p| p.last_name == last_name)
            .expect("no such player in fixture")
    }

    pub async fn add_round(&self, number: u8, game_scoring_system: &str, dias: bool) {
        self.repository
            .add_round(
                self.tournament_id,
                Round::new(number, game_scoring_system, dias),
            )
            .await
            .unwrap();
    }

    /// Creates a game and seats `players` on the seven powers in power
    /// (alphabetical) order, registering each as a round player too.
    pub async fn add_game(&self, round_number: u8, name: &str, players: &[&Player]) {
        assert_eq!(players.len(), 7, "a board seats seven players");
        self.repository
            .add_game(self.tournament_id, round_number, name)
            .await
            .unwrap();
        for (power, player) in Power::all().into_iter().zip(players) {
            self.repository
                .add_game_player(self.tournament_id, name, GamePlayer::new(player.id, power))
                .await
                .unwrap();
            self.repository
                .add_round_player(self.tournament_id, round_number, player.id)
                .await
                .unwrap();
        }
    }

    /// Records one year of centre counts, given in power order.
    pub async fn report_year(&self, game: &str, year: u16, counts: [u8; 7]) {
        for (power, count) in Power::all().into_iter().zip(counts) {
            self.repository
                .record_centre_count(
                    self.tournament_id,
                    game,
                    CentreCount::new(power, year, count),
                )
                .await
                .unwrap();
        }
    }
}
