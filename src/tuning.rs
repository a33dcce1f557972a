//! Static game balance reference values
//!
//! Display-only numbers for the results screen; none of this is
//! persisted or fed back into scoring.

use crate::catalog::GameKind;

/// Reference "standard best average" timing in seconds for a game
///
/// Shown next to the player's time so they can gauge how a run compares
/// to a typical good play.
pub fn standard_best_average(kind: GameKind) -> f64 {
    match kind {
        GameKind::ReflexTap => 5.0,
        GameKind::MemoryMatch => 45.0,
        GameKind::QuickMath => 30.0,
        GameKind::ColorSnap => 12.0,
    }
}
