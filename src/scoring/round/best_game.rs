use super::super::{PlayerScoreLists, PlayerScores, RoundScoringSystem};

/// A player's round score is the best of their game scores in the round.
pub struct BestGame;

impl RoundScoringSystem for BestGame {
    fn name(&self) -> &str {
        "Best game counts"
    }

    fn scores(&self, game_scores: &PlayerScoreLists) -> PlayerScores {
        game_scores
            .iter()
            .map(|(player, scores)| {
                let best = scores.iter().copied().fold(0.0, f64::max);
                (*player, best)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn takes_the_best_of_several_games() {
        let player = Uuid::new_v4();
        let mut game_scores = PlayerScoreLists::new();
        game_scores.insert(player, vec![12.5, 40.0, 7.0]);

        let scores = BestGame.scores(&game_scores);
        assert_eq!(scores[&player], 40.0);
    }

    #[test]
    fn single_game_scores_pass_through() {
        let player = Uuid::new_v4();
        let mut game_scores = PlayerScoreLists::new();
        game_scores.insert(player, vec![33.0]);

        let scores = BestGame.scores(&game_scores);
        assert_eq!(scores[&player], 33.0);
    }

    #[test]
    fn player_with_no_games_scores_zero() {
        let player = Uuid::new_v4();
        let mut game_scores = PlayerScoreLists::new();
        game_scores.insert(player, Vec::new());

        let scores = BestGame.scores(&game_scores);
        assert_eq!(scores[&player], 0.0);
    }
}
