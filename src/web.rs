//! wasm-bindgen boundary for the JS page layer
//!
//! Exposes the hub over LocalStorage with JSON-string payloads so the
//! page components can list games, record plays, and read streak and
//! daily-challenge state.

use wasm_bindgen::prelude::*;

use crate::catalog::GameKind;
use crate::hub::GameHub;
use crate::results::GameResult;
use crate::storage::LocalStorage;
use crate::store::ResultStore;
use crate::tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// The mini-game hub, exported to JS
#[wasm_bindgen]
pub struct Arcade {
    hub: GameHub<LocalStorage>,
}

#[wasm_bindgen]
impl Arcade {
    /// Hydrate the hub from LocalStorage and resolve today's challenge
    #[wasm_bindgen(constructor)]
    pub fn new() -> Arcade {
        Arcade {
            hub: GameHub::new(ResultStore::new(LocalStorage::new())),
        }
    }

    /// JSON array of catalog entries annotated with current stats
    pub fn games(&self) -> String {
        serde_json::to_string(&self.hub.games()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn high_score(&self, game_id: &str) -> Option<f64> {
        GameKind::from_str(game_id).and_then(|kind| self.hub.high_score(kind))
    }

    pub fn best_time(&self, game_id: &str) -> Option<f64> {
        GameKind::from_str(game_id).and_then(|kind| self.hub.best_time(kind))
    }

    /// Record a finished play; returns the saved result as JSON, or
    /// `None` for an unknown game id
    pub fn record_play(&mut self, game_id: &str, score: f64, time: f64) -> Option<String> {
        let kind = match GameKind::from_str(game_id) {
            Some(kind) => kind,
            None => {
                log::warn!("record_play: unknown game id {game_id:?}");
                return None;
            }
        };
        let result = self.hub.record_play(kind, score, time);
        serde_json::to_string(&result).ok()
    }

    /// Save a pre-built result record (JSON GameResult)
    pub fn save_result(&mut self, json: &str) {
        match serde_json::from_str::<GameResult>(json) {
            Ok(result) => self.hub.save_result(result),
            Err(e) => log::warn!("save_result: rejected malformed payload ({e})"),
        }
    }

    /// Today's challenge as JSON, if the catalog is non-empty
    pub fn daily_challenge(&self) -> Option<String> {
        self.hub
            .daily_challenge()
            .and_then(|game| serde_json::to_string(game).ok())
    }

    #[wasm_bindgen(getter)]
    pub fn streak(&self) -> u32 {
        self.hub.streak()
    }

    pub fn increment_streak(&mut self) {
        self.hub.increment_streak();
    }

    pub fn reset_streak(&mut self) {
        self.hub.reset_streak();
    }

    /// Reference timing for the results-screen comparison display
    pub fn standard_best_average(&self, game_id: &str) -> Option<f64> {
        GameKind::from_str(game_id).map(tuning::standard_best_average)
    }
}
