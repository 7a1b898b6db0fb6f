//! High score table
//!
//! Lives for the process lifetime only; nothing is written to disk.

use serde::Serialize;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// Level reached
    pub level: u32,
}

/// High score leaderboard, best first
#[derive(Debug, Clone, Default, Serialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank a run scoring `score` would take (1-indexed), `None` if it misses the table
    ///
    /// Ties land below the runs already holding that score.
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let index = self.entries.partition_point(|e| e.score >= score);
        (index < MAX_HIGH_SCORES).then_some(index + 1)
    }

    /// Insert a finished run, returning the rank it took
    pub fn add_score(&mut self, score: u64, level: u32) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries
            .insert(rank - 1, HighScoreEntry { score, level });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// The high score, 0 before any run has scored
    pub fn best(&self) -> u64 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 1), None);
        assert!(scores.entries.is_empty());
        assert_eq!(scores.best(), 0);
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(500, 1), Some(1));
        assert_eq!(scores.add_score(1500, 2), Some(1));
        assert_eq!(scores.add_score(900, 1), Some(2));
        let values: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![1500, 900, 500]);
        assert_eq!(scores.best(), 1500);
    }

    #[test]
    fn test_tie_does_not_displace_best() {
        let mut scores = HighScores::new();
        scores.add_score(800, 2);
        assert_eq!(scores.add_score(800, 3), Some(2));
        assert_eq!(scores.entries[0].level, 2);
    }

    #[test]
    fn test_table_is_capped() {
        let mut scores = HighScores::new();
        for i in 1..=15 {
            scores.add_score(i * 100, 1);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(600));
        assert_eq!(scores.potential_rank(600), None);
        assert_eq!(scores.potential_rank(650), Some(10));
        assert_eq!(scores.potential_rank(2000), Some(1));
    }
}
