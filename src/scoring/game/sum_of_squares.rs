use crate::game::{GameSnapshot, WINNING_CENTRES};

use super::super::{GameScoringSystem, PowerScores, ScoringError};

/// Each power scores 100 times its squared centre count, normalized over
/// the board's sum of squares. A soloer takes all 100 points.
pub struct SumOfSquares;

impl GameScoringSystem for SumOfSquares {
    fn name(&self) -> &str {
        "Sum of Squares"
    }

    fn scores(&self, game: &GameSnapshot) -> Result<PowerScores, ScoringError> {
        let final_counts = game.final_year_counts()?;
        let soloed = final_counts
            .first()
            .is_some_and(|cc| cc.count >= WINNING_CENTRES);

        let mut scores = PowerScores::new();
        if soloed {
            for cc in &final_counts {
                let score = if cc.count >= WINNING_CENTRES { 100.0 } else { 0.0 };
                scores.insert(cc.power, score);
            }
            return Ok(scores);
        }

        let sum_of_squares: f64 = final_counts
            .iter()
            .map(|cc| f64::from(cc.count) * f64::from(cc.count))
            .sum();
        for cc in &final_counts {
            let squared = f64::from(cc.count) * f64::from(cc.count);
            scores.insert(cc.power, squared * 100.0 / sum_of_squares);
        }
        Ok(scores)
    }
}
