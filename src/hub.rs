//! The game hub state facade
//!
//! Single point of access for consumers: derived per-game stats, result
//! recording, the streak counter, and the session's daily challenge.
//! A hub is constructed explicitly from a [`ResultStore`], which hydrates
//! all state up front; there is no global instance to look up.

use serde::Serialize;

use crate::catalog::{Catalog, GameInfo, GameKind};
use crate::platform;
use crate::results::{GameResult, ResultLog};
use crate::store::ResultStore;
use crate::storage::StorageBackend;

/// A catalog entry annotated with its current derived stats
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    #[serde(flatten)]
    pub info: GameInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<f64>,
}

/// Session-scoped state manager for the mini-game hub
#[derive(Debug)]
pub struct GameHub<B: StorageBackend> {
    store: ResultStore<B>,
    catalog: Catalog,
    results: ResultLog,
    streak: u32,
    daily: Option<GameInfo>,
}

impl<B: StorageBackend> GameHub<B> {
    /// Hydrate a hub over the builtin catalog for the current day
    pub fn new(store: ResultStore<B>) -> Self {
        Self::with_catalog(store, Catalog::builtin())
    }

    /// Hydrate a hub over an explicit catalog for the current day
    pub fn with_catalog(store: ResultStore<B>, catalog: Catalog) -> Self {
        let today = platform::today_date_string();
        Self::with_catalog_on(store, catalog, &today)
    }

    /// Hydrate a hub with a fixed "today"
    ///
    /// The daily challenge is resolved once here and kept for the whole
    /// session, even if the calendar day rolls over while it stays open.
    pub fn with_catalog_on(store: ResultStore<B>, catalog: Catalog, today: &str) -> Self {
        let results = ResultLog::from_entries(store.load_results());
        let streak = store.load_streak();
        let daily = store
            .resolve_daily_challenge(&catalog, today)
            .map(|challenge| challenge.game);

        Self {
            store,
            catalog,
            results,
            streak,
            daily,
        }
    }

    /// Append a completed result and persist the updated sequence
    ///
    /// Values are stored as reported; no score/time validation happens.
    pub fn save_result(&mut self, result: GameResult) {
        self.results.push(result);
        self.store.persist_results(self.results.entries());
    }

    /// Record a finished play: stamps the time, computes whether it set a
    /// new high score, saves, and returns the record
    pub fn record_play(&mut self, kind: GameKind, score: f64, time: f64) -> GameResult {
        let prior = self.high_score(kind).unwrap_or(0.0);
        let result = GameResult {
            game_id: kind,
            score,
            time,
            date: platform::now_iso8601(),
            is_high_score: score > prior,
        };
        self.save_result(result.clone());
        result
    }

    /// Highest recorded score for a game, if it was ever played
    pub fn high_score(&self, kind: GameKind) -> Option<f64> {
        self.results.high_score(kind)
    }

    /// Lowest recorded time for a game, if it was ever played
    pub fn best_time(&self, kind: GameKind) -> Option<f64> {
        self.results.best_time(kind)
    }

    /// The session's daily challenge; `None` only for an empty catalog
    pub fn daily_challenge(&self) -> Option<&GameInfo> {
        self.daily.as_ref()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn increment_streak(&mut self) {
        self.streak = self.streak.saturating_add(1);
        self.store.persist_streak(self.streak);
    }

    pub fn reset_streak(&mut self) {
        self.streak = 0;
        self.store.persist_streak(self.streak);
    }

    /// The catalog, each entry annotated with stats fresh as of this call
    pub fn games(&self) -> Vec<GameSummary> {
        self.catalog
            .games()
            .iter()
            .map(|info| GameSummary {
                info: info.clone(),
                high_score: self.high_score(info.id),
                best_time: self.best_time(info.id),
            })
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn results(&self) -> &[GameResult] {
        self.results.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const TODAY: &str = "Mon Aug 24 2026";

    fn hub_over(backend: &MemoryStore) -> GameHub<&MemoryStore> {
        GameHub::with_catalog_on(ResultStore::new(backend), Catalog::builtin(), TODAY)
    }

    #[test]
    fn fresh_hub_has_empty_state() {
        let backend = MemoryStore::new();
        let hub = hub_over(&backend);

        assert_eq!(hub.streak(), 0);
        assert!(hub.results().is_empty());
        assert_eq!(hub.high_score(GameKind::ReflexTap), None);
        assert_eq!(hub.best_time(GameKind::ReflexTap), None);
    }

    #[test]
    fn saved_results_are_visible_to_subsequent_queries() {
        let backend = MemoryStore::new();
        let mut hub = hub_over(&backend);

        hub.record_play(GameKind::ReflexTap, 10.0, 1.2);
        hub.record_play(GameKind::ReflexTap, 25.0, 0.8);
        hub.record_play(GameKind::ReflexTap, 18.0, 2.0);

        assert_eq!(hub.high_score(GameKind::ReflexTap), Some(25.0));
        assert_eq!(hub.best_time(GameKind::ReflexTap), Some(0.8));
    }

    #[test]
    fn record_play_flags_new_high_scores_only() {
        let backend = MemoryStore::new();
        let mut hub = hub_over(&backend);

        assert!(hub.record_play(GameKind::QuickMath, 10.0, 5.0).is_high_score);
        assert!(!hub.record_play(GameKind::QuickMath, 8.0, 4.0).is_high_score);
        assert!(hub.record_play(GameKind::QuickMath, 11.0, 6.0).is_high_score);
    }

    #[test]
    fn streak_counts_up_and_resets() {
        let backend = MemoryStore::new();
        let mut hub = hub_over(&backend);

        for _ in 0..5 {
            hub.increment_streak();
        }
        assert_eq!(hub.streak(), 5);

        hub.reset_streak();
        assert_eq!(hub.streak(), 0);
    }

    #[test]
    fn state_survives_a_simulated_reload() {
        let backend = MemoryStore::new();
        let first_daily;
        {
            let mut hub = hub_over(&backend);
            hub.record_play(GameKind::ReflexTap, 25.0, 0.8);
            hub.increment_streak();
            hub.increment_streak();
            first_daily = hub.daily_challenge().unwrap().clone();
        }

        let hub = hub_over(&backend);
        assert_eq!(hub.high_score(GameKind::ReflexTap), Some(25.0));
        assert_eq!(hub.streak(), 2);
        assert_eq!(hub.daily_challenge(), Some(&first_daily));
    }

    #[test]
    fn games_are_annotated_with_fresh_stats() {
        let backend = MemoryStore::new();
        let mut hub = hub_over(&backend);

        let before = hub.games();
        let reflex = before.iter().find(|g| g.info.id == GameKind::ReflexTap).unwrap();
        assert_eq!(reflex.high_score, None);

        hub.record_play(GameKind::ReflexTap, 25.0, 0.8);

        let after = hub.games();
        let reflex = after.iter().find(|g| g.info.id == GameKind::ReflexTap).unwrap();
        assert_eq!(reflex.high_score, Some(25.0));
        assert_eq!(reflex.best_time, Some(0.8));
    }

    #[test]
    fn summary_serialization_spreads_info_fields() {
        let backend = MemoryStore::new();
        let mut hub = hub_over(&backend);
        hub.record_play(GameKind::ReflexTap, 25.0, 0.8);

        let json = serde_json::to_string(&hub.games()).unwrap();
        assert!(json.contains("\"id\":\"reflexTap\""));
        assert!(json.contains("\"highScore\":25.0"));
        // unplayed games omit their stats entirely
        assert!(!json.contains("\"highScore\":null"));
    }

    #[test]
    fn corrupt_storage_degrades_to_defaults() {
        let backend = MemoryStore::new();
        backend.set(crate::storage::keys::RESULTS, "not json");
        backend.set(crate::storage::keys::STREAK, "NaN");

        let hub = hub_over(&backend);
        assert!(hub.results().is_empty());
        assert_eq!(hub.streak(), 0);
    }
}
