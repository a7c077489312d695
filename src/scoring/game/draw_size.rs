use crate::game::{GameSnapshot, WINNING_CENTRES};

use super::super::{GameScoringSystem, PowerScores, ScoringError};

/// Solos score 100 points; otherwise the members of a passed draw split
/// 100 between them; otherwise all survivors split 100.
pub struct DrawSize;

impl GameScoringSystem for DrawSize {
    fn name(&self) -> &str {
        "Draw size"
    }

    fn scores(&self, game: &GameSnapshot) -> Result<PowerScores, ScoringError> {
        let final_counts = game.final_year_counts()?;
        let soloed = final_counts
            .first()
            .is_some_and(|cc| cc.count >= WINNING_CENTRES);
        let survivors = final_counts.iter().filter(|cc| cc.count > 0).count();

        let mut scores = PowerScores::new();
        for cc in &final_counts {
            let score = if cc.count >= WINNING_CENTRES {
                100.0
            } else if soloed {
                0.0
            } else if let Some(draw) = &game.passed_draw {
                if draw.includes(cc.power) {
                    100.0 / draw.draw_size() as f64
                } else {
                    0.0
                }
            } else if cc.count > 0 {
                100.0 / survivors as f64
            } else {
                0.0
            };
            scores.insert(cc.power, score);
        }
        Ok(scores)
    }
}
