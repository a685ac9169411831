pub mod board;
pub mod error;
pub mod eval;
pub mod events;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::*;
pub use events::*;
pub use game::*;
pub use movegen::*;
pub use notation::*;
pub use rules::*;
pub use types::*;

use rand::RngCore;

// =============================================================================
// Engine trait: implemented by every bot tier
// =============================================================================

/// Result of a move selection
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the engine found nothing)
    pub best_move: Option<Move>,
    /// Material score of the chosen line from the engine's side, when the
    /// engine scores positions at all
    pub score: i32,
    /// Number of candidate moves examined
    pub nodes: u64,
}

impl SearchResult {
    pub fn none(nodes: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes,
        }
    }
}

/// Trait that all bot tiers implement.
///
/// Randomness is supplied by the caller so that tests can seed it.
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    ///
    /// The board is borrowed immutably; engines simulate on copies.
    fn search(&mut self, board: &Board, side: Color, rng: &mut dyn RngCore) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "Magic Chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
