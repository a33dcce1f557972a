//! Persistent result store
//!
//! Sole writer to durable storage. Every read fails open: absent or
//! unparsable data degrades to that key's default instead of surfacing an
//! error. Writes are fire-and-forget, matching the backend contract.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, GameInfo};
use crate::results::GameResult;
use crate::storage::{StorageBackend, keys};

/// The game featured for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChallenge {
    /// The featured game
    pub game: GameInfo,
    /// Local date string (day granularity) the pick was made on
    pub date: String,
}

/// Durable persistence for results, streak, and the daily challenge
#[derive(Debug)]
pub struct ResultStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ResultStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the full result sequence; absent or corrupt data yields empty
    pub fn load_results(&self) -> Vec<GameResult> {
        match self.backend.get(keys::RESULTS) {
            Some(json) => match serde_json::from_str::<Vec<GameResult>>(&json) {
                Ok(results) => {
                    log::info!("Loaded {} game results", results.len());
                    results
                }
                Err(e) => {
                    log::warn!("Stored results unparsable ({e}), starting fresh");
                    Vec::new()
                }
            },
            None => {
                log::info!("No game results found, starting fresh");
                Vec::new()
            }
        }
    }

    /// Serialize and write the full result sequence
    pub fn persist_results(&self, results: &[GameResult]) {
        if let Ok(json) = serde_json::to_string(results) {
            self.backend.set(keys::RESULTS, &json);
            log::debug!("Game results saved ({} entries)", results.len());
        }
    }

    /// Read the streak counter; absent or corrupt data yields zero
    pub fn load_streak(&self) -> u32 {
        self.backend
            .get(keys::STREAK)
            .and_then(|raw| raw.parse::<u32>().ok())
            .unwrap_or(0)
    }

    /// Write the streak counter as decimal text
    pub fn persist_streak(&self, streak: u32) {
        self.backend.set(keys::STREAK, &streak.to_string());
        log::debug!("Streak saved ({streak})");
    }

    /// Return the daily challenge valid for `today`, generating and
    /// caching a fresh pick when the stored one is stale
    ///
    /// A date stamp matching `today` with a missing or unparsable payload
    /// falls through to regeneration rather than erroring. Returns `None`
    /// only for an empty catalog.
    pub fn resolve_daily_challenge(
        &self,
        catalog: &Catalog,
        today: &str,
    ) -> Option<DailyChallenge> {
        self.resolve_daily_challenge_with_rng(catalog, today, &mut rand::rng())
    }

    /// [`resolve_daily_challenge`](Self::resolve_daily_challenge) with an
    /// injected RNG, for deterministic selection in tests
    pub fn resolve_daily_challenge_with_rng<R: Rng>(
        &self,
        catalog: &Catalog,
        today: &str,
        rng: &mut R,
    ) -> Option<DailyChallenge> {
        if self.backend.get(keys::DAILY_CHALLENGE_DATE).as_deref() == Some(today) {
            if let Some(json) = self.backend.get(keys::DAILY_CHALLENGE) {
                if let Ok(game) = serde_json::from_str::<GameInfo>(&json) {
                    return Some(DailyChallenge {
                        game,
                        date: today.to_string(),
                    });
                }
            }
            log::warn!("Daily challenge stamp matched but payload was unusable, re-picking");
        }

        let games = catalog.games();
        if games.is_empty() {
            return None;
        }
        let game = games[rng.random_range(0..games.len())].clone();

        self.backend.set(keys::DAILY_CHALLENGE_DATE, today);
        if let Ok(json) = serde_json::to_string(&game) {
            self.backend.set(keys::DAILY_CHALLENGE, &json);
        }
        log::info!("Daily challenge for {today}: {}", game.name);

        Some(DailyChallenge {
            game,
            date: today.to_string(),
        })
    }
}
