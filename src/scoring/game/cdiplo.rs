use crate::game::{GameSnapshot, WINNING_CENTRES};

use super::super::{share_rank_points, GameScoringSystem, PowerScores, ScoringError};

/// C-Diplo family. On a solo the soloer takes `soloer_points` and everyone
/// else takes `loss_points`. Otherwise a power scores participation points
/// plus one point per centre plus its (tie-shared) placing points.
pub struct CDiplo {
    name: String,
    soloer_points: f64,
    played_points: f64,
    position_points: [f64; 3],
    loss_points: f64,
}

impl CDiplo {
    pub fn new(
        name: &str,
        soloer_points: f64,
        played_points: f64,
        first_points: f64,
        second_points: f64,
        third_points: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            soloer_points,
            played_points,
            position_points: [first_points, second_points, third_points],
            loss_points: 0.0,
        }
    }

    pub fn with_loss_points(mut self, loss_points: f64) -> Self {
        self.loss_points = loss_points;
        self
    }
}

impl GameScoringSystem for CDiplo {
    fn name(&self) -> &str {
        &self.name
    }

    fn scores(&self, game: &GameSnapshot) -> Result<PowerScores, ScoringError> {
        let final_counts = game.final_year_counts()?;
        let soloed = final_counts
            .first()
            .is_some_and(|cc| cc.count >= WINNING_CENTRES);

        let mut scores = PowerScores::new();
        if soloed {
            for cc in &final_counts {
                let score = if cc.count >= WINNING_CENTRES {
                    self.soloer_points
                } else {
                    self.loss_points
                };
                scores.insert(cc.power, score);
            }
            return Ok(scores);
        }

        let counts: Vec<u8> = final_counts.iter().map(|cc| cc.count).collect();
        let placing = share_rank_points(&counts, &self.position_points);
        for (cc, placing_points) in final_counts.iter().zip(placing) {
            scores.insert(
                cc.power,
                self.played_points + f64::from(cc.count) + placing_points,
            );
        }
        Ok(scores)
    }
}
