//! Game result history and derived stats
//!
//! Results are append-only: one record per completed play, in
//! chronological order. High score and best time are recomputed from the
//! log on every query rather than cached.

use serde::{Deserialize, Serialize};

use crate::catalog::GameKind;

/// One completed play record
///
/// Scores and times are stored exactly as reported by the game; no range
/// validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// Which game was played
    pub game_id: GameKind,
    /// Final score (higher is better)
    pub score: f64,
    /// Elapsed time in seconds (lower is better)
    pub time: f64,
    /// ISO-8601 completion timestamp
    pub date: String,
    /// Whether this beat the high score at the moment it was recorded
    pub is_high_score: bool,
}

/// In-memory, append-only sequence of results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultLog {
    entries: Vec<GameResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<GameResult>) -> Self {
        Self { entries }
    }

    /// Append a result, preserving chronological order
    pub fn push(&mut self, result: GameResult) {
        self.entries.push(result);
    }

    pub fn entries(&self) -> &[GameResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score recorded for a game, or None if it was never played
    pub fn high_score(&self, id: GameKind) -> Option<f64> {
        self.entries
            .iter()
            .filter(|r| r.game_id == id)
            .map(|r| r.score)
            .reduce(f64::max)
    }

    /// Lowest time recorded for a game, or None if it was never played
    ///
    /// Note the asymmetry with [`high_score`](Self::high_score): a higher
    /// score is better, a lower time is better.
    pub fn best_time(&self, id: GameKind) -> Option<f64> {
        self.entries
            .iter()
            .filter(|r| r.game_id == id)
            .map(|r| r.time)
            .reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(id: GameKind, score: f64, time: f64) -> GameResult {
        GameResult {
            game_id: id,
            score,
            time,
            date: "2026-08-25T12:00:00.000Z".to_string(),
            is_high_score: false,
        }
    }

    #[test]
    fn empty_log_has_no_stats() {
        let log = ResultLog::new();
        assert_eq!(log.high_score(GameKind::ReflexTap), None);
        assert_eq!(log.best_time(GameKind::ReflexTap), None);
    }

    #[test]
    fn high_score_is_max_and_best_time_is_min() {
        let mut log = ResultLog::new();
        log.push(result(GameKind::ReflexTap, 10.0, 1.2));
        log.push(result(GameKind::ReflexTap, 25.0, 0.8));
        log.push(result(GameKind::ReflexTap, 18.0, 2.0));

        assert_eq!(log.high_score(GameKind::ReflexTap), Some(25.0));
        assert_eq!(log.best_time(GameKind::ReflexTap), Some(0.8));
    }

    #[test]
    fn stats_are_scoped_per_game() {
        let mut log = ResultLog::new();
        log.push(result(GameKind::ReflexTap, 10.0, 1.2));
        log.push(result(GameKind::QuickMath, 99.0, 0.1));

        assert_eq!(log.high_score(GameKind::ReflexTap), Some(10.0));
        assert_eq!(log.best_time(GameKind::ReflexTap), Some(1.2));
        assert_eq!(log.high_score(GameKind::MemoryMatch), None);
    }

    #[test]
    fn negative_and_duplicate_values_are_kept_as_is() {
        let mut log = ResultLog::new();
        log.push(result(GameKind::ColorSnap, -5.0, -1.0));
        log.push(result(GameKind::ColorSnap, -5.0, 3.0));

        assert_eq!(log.high_score(GameKind::ColorSnap), Some(-5.0));
        assert_eq!(log.best_time(GameKind::ColorSnap), Some(-1.0));
    }

    #[test]
    fn serialized_field_names_match_storage_shape() {
        let json = serde_json::to_string(&result(GameKind::ReflexTap, 25.0, 0.8)).unwrap();
        assert!(json.contains("\"gameId\":\"reflexTap\""));
        assert!(json.contains("\"isHighScore\":false"));
    }

    proptest! {
        #[test]
        fn high_score_equals_max_of_saved_scores(
            scores in proptest::collection::vec(-1000.0f64..1000.0, 1..50)
        ) {
            let mut log = ResultLog::new();
            for &s in &scores {
                log.push(result(GameKind::ReflexTap, s, 1.0));
            }
            let expected = scores.iter().copied().reduce(f64::max);
            prop_assert_eq!(log.high_score(GameKind::ReflexTap), expected);
        }

        #[test]
        fn best_time_equals_min_of_saved_times(
            times in proptest::collection::vec(0.0f64..1000.0, 1..50)
        ) {
            let mut log = ResultLog::new();
            for &t in &times {
                log.push(result(GameKind::ReflexTap, 1.0, t));
            }
            let expected = times.iter().copied().reduce(f64::min);
            prop_assert_eq!(log.best_time(GameKind::ReflexTap), expected);
        }
    }
}
