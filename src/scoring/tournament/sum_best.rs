use super::super::{PlayerScoreLists, PlayerScores, TournamentScoringSystem};

/// Sums each player's best N round scores. A player with fewer than N
/// rounds just sums what they have; no rounds at all is a plain 0.
pub struct SumBestRounds {
    name: String,
    scored_rounds: usize,
}

impl SumBestRounds {
    pub fn new(name: &str, scored_rounds: usize) -> Self {
        Self {
            name: name.to_string(),
            scored_rounds,
        }
    }
}

impl TournamentScoringSystem for SumBestRounds {
    fn name(&self) -> &str {
        &self.name
    }

    fn scores(&self, round_scores: &PlayerScoreLists) -> PlayerScores {
        round_scores
            .iter()
            .map(|(player, scores)| {
                let mut sorted = scores.clone();
                sorted.sort_by(|a, b| b.total_cmp(a));
                let total: f64 = sorted.iter().take(self.scored_rounds).sum();
                (*player, total)
            })
            .collect()
    }
}
