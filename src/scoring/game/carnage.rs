use crate::game::{GameSnapshot, TOTAL_CENTRES, WINNING_CENTRES};

use super::super::{share_rank_points, GameScoringSystem, PowerScores, ScoringError};

const POSITION_POINTS: [f64; 7] = [7000.0, 6000.0, 5000.0, 4000.0, 3000.0, 2000.0, 1000.0];

/// Carnage scoring. Placings are worth 7000 down to 1000 points, ties
/// (eliminated powers included, all tied on zero) splitting the points for
/// their positions, plus one point per centre. A soloer takes every
/// position point plus the whole board.
pub struct Carnage;

impl GameScoringSystem for Carnage {
    fn name(&self) -> &str {
        "Carnage with dead equal"
    }

    fn scores(&self, game: &GameSnapshot) -> Result<PowerScores, ScoringError> {
        let final_counts = game.final_year_counts()?;
        let soloed = final_counts
            .first()
            .is_some_and(|cc| cc.count >= WINNING_CENTRES);

        let mut scores = PowerScores::new();
        if soloed {
            let solo_score = POSITION_POINTS.iter().sum::<f64>() + f64::from(TOTAL_CENTRES);
            for cc in &final_counts {
                let score = if cc.count >= WINNING_CENTRES {
                    solo_score
                } else {
                    0.0
                };
                scores.insert(cc.power, score);
            }
            return Ok(scores);
        }

        let counts: Vec<u8> = final_counts.iter().map(|cc| cc.count).collect();
        let placing = share_rank_points(&counts, &POSITION_POINTS);
        for (cc, placing_points) in final_counts.iter().zip(placing) {
            scores.insert(cc.power, f64::from(cc.count) + placing_points);
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{balanced_board, solo_board, year_counts};
    use super::*;
    use crate::game::Power;

    #[test]
    fn ties_split_position_points() {
        let snapshot = balanced_board();
        let scores = Carnage.scores(&snapshot).unwrap();
        assert_eq!(scores.len(), 7);
        for cc in snapshot.final_year_counts().unwrap() {
            if cc.count == 5 {
                assert_eq!(
                    scores[&cc.power],
                    (7000.0 + 6000.0 + 5000.0 + 4000.0) / 4.0 + 5.0
                );
            } else {
                assert_eq!(scores[&cc.power], (3000.0 + 2000.0 + 1000.0) / 3.0 + 4.0);
            }
        }
        let expected_total = POSITION_POINTS.iter().sum::<f64>() + 34.0 - 2.0;
        assert_eq!(scores.values().sum::<f64>(), expected_total);
    }

    #[test]
    fn eliminated_powers_split_the_bottom_positions() {
        let scores = Carnage.scores(&year_counts(1906, &[0, 12, 10, 6, 4, 0, 0])).unwrap();
        // Three dead powers share positions five to seven
        let dead_share = (3000.0 + 2000.0 + 1000.0) / 3.0;
        assert_eq!(scores[&Power::Austria], dead_share);
        assert_eq!(scores[&Power::Russia], dead_share);
        assert_eq!(scores[&Power::Turkey], dead_share);
        assert_eq!(scores[&Power::England], 7000.0 + 12.0);
        assert_eq!(scores[&Power::Italy], 4000.0 + 4.0);
    }

    #[test]
    fn soloer_takes_all_position_points_and_the_board() {
        let scores = Carnage.scores(&solo_board()).unwrap();
        assert_eq!(scores[&Power::Germany], 28000.0 + 34.0);
        for (power, score) in &scores {
            if *power != Power::Germany {
                assert_eq!(*score, 0.0);
            }
        }
    }
}
