//! The static game catalog
//!
//! Every game the hub knows about is declared here. Entries are immutable
//! and defined at startup; per-game stats are derived elsewhere and never
//! stored on the catalog itself.

use serde::{Deserialize, Serialize};

/// Identifier for a known game type
///
/// Serializes to the camelCase ids used in storage and by the page layer
/// (e.g. `"reflexTap"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameKind {
    ReflexTap,
    MemoryMatch,
    QuickMath,
    ColorSnap,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::ReflexTap => "reflexTap",
            GameKind::MemoryMatch => "memoryMatch",
            GameKind::QuickMath => "quickMath",
            GameKind::ColorSnap => "colorSnap",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reflexTap" => Some(GameKind::ReflexTap),
            "memoryMatch" => Some(GameKind::MemoryMatch),
            "quickMath" => Some(GameKind::QuickMath),
            "colorSnap" => Some(GameKind::ColorSnap),
            _ => None,
        }
    }
}

/// A catalog entry: everything the UI needs to present a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Game identifier
    pub id: GameKind,
    /// Display name
    pub name: String,
    /// Short blurb shown on the hub page
    pub description: String,
    /// How-to-play text shown before the game starts
    pub instructions: String,
    /// Emoji glyph used as the game's icon
    pub icon: String,
}

impl GameInfo {
    fn new(id: GameKind, name: &str, description: &str, instructions: &str, icon: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            instructions: instructions.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Ordered, immutable list of available games
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<GameInfo>,
}

impl Catalog {
    /// Build a catalog from an explicit game list (tests use this)
    pub fn new(games: Vec<GameInfo>) -> Self {
        Self { games }
    }

    /// The full builtin game set
    pub fn builtin() -> Self {
        Self::new(vec![
            GameInfo::new(
                GameKind::ReflexTap,
                "Reflex Tap",
                "Tap as quickly as possible",
                "Tap as quickly as possible when a shape appears on screen.",
                "⚡️",
            ),
            GameInfo::new(
                GameKind::MemoryMatch,
                "Memory Match",
                "Flip cards and find the pairs",
                "Flip two cards at a time and clear the board by matching every pair.",
                "🃏",
            ),
            GameInfo::new(
                GameKind::QuickMath,
                "Quick Math",
                "Solve sums against the clock",
                "Answer as many arithmetic problems as you can before the timer runs out.",
                "🧮",
            ),
            GameInfo::new(
                GameKind::ColorSnap,
                "Color Snap",
                "Match the word to the color",
                "Tap only when the word on screen matches the color it is drawn in.",
                "🎨",
            ),
        ])
    }

    pub fn games(&self) -> &[GameInfo] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Look up a catalog entry by id
    pub fn get(&self, id: GameKind) -> Option<&GameInfo> {
        self.games.iter().find(|g| g.id == id)
    }
}
