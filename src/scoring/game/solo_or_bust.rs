use crate::game::{GameSnapshot, WINNING_CENTRES};

use super::super::{GameScoringSystem, PowerScores, ScoringError};

/// Solos score 100 points; every other result scores 0.
pub struct SoloOrBust;

impl GameScoringSystem for SoloOrBust {
    fn name(&self) -> &str {
        "Solo or bust"
    }

    fn scores(&self, game: &GameSnapshot) -> Result<PowerScores, ScoringError> {
        let scores = game
            .final_year_counts()?
            .into_iter()
            .map(|cc| {
                let score = if cc.count >= WINNING_CENTRES { 100.0 } else { 0.0 };
                (cc.power, score)
            })
            .collect();
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{balanced_board, solo_board};
    use super::*;
    use crate::game::{GameStateError, Power};

    #[test]
    fn everyone_scores_zero_without_a_solo() {
        let scores = SoloOrBust.scores(&balanced_board()).unwrap();
        assert_eq!(scores.len(), 7);
        assert!(scores.values().all(|&s| s == 0.0));
    }

    #[test]
    fn soloer_scores_one_hundred() {
        let scores = SoloOrBust.scores(&solo_board()).unwrap();
        assert_eq!(scores.len(), 7);
        assert_eq!(scores[&Power::Germany], 100.0);
        for (power, score) in &scores {
            if *power != Power::Germany {
                assert_eq!(*score, 0.0);
            }
        }
    }

    #[test]
    fn empty_history_is_an_error() {
        let empty = GameSnapshot::new(Vec::new(), None, false);
        assert_eq!(
            SoloOrBust.scores(&empty),
            Err(ScoringError::InvalidGameState(
                GameStateError::NoCentreCounts
            ))
        );
    }
}
