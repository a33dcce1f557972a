//! Tap Arcade - a browser mini-game hub core
//!
//! Core modules:
//! - `catalog`: The static game catalog
//! - `results`: Result history and derived high-score/best-time stats
//! - `storage`: String key-value persistence port (LocalStorage on web)
//! - `store`: Durable results, streak, and daily-challenge persistence
//! - `hub`: Session-scoped state facade consumed by the page layer
//! - `platform`: Browser/native date and time abstraction
//! - `tuning`: Display-only game balance reference values

pub mod catalog;
pub mod hub;
pub mod platform;
pub mod results;
pub mod storage;
pub mod store;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use catalog::{Catalog, GameInfo, GameKind};
pub use hub::{GameHub, GameSummary};
pub use results::{GameResult, ResultLog};
pub use store::{DailyChallenge, ResultStore};
