//! Intermediate Bot Tier
//!
//! Takes something whenever it can: every legal move that lands on an enemy
//! piece is a candidate, and one is picked uniformly at random. Returns no
//! move when nothing can be captured; the bot then falls back to the novice
//! tier.

use magic_core::{legal_moves_into, piece_value, Board, Color, Engine, Move, SearchResult};
use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;


#[derive(Debug, Clone, Default)]
pub struct CaptureEngine {
    nodes: u64,
    moves: Vec<Move>,
}

impl CaptureEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for CaptureEngine {
    fn search(&mut self, board: &Board, side: Color, rng: &mut dyn RngCore) -> SearchResult {
        legal_moves_into(board, side, &mut self.moves);
        self.nodes = self.moves.len() as u64;

        // Legal moves never land on a friendly piece.
        self.moves.retain(|mv| !board.is_empty(mv.to));
        debug!(%side, captures = self.moves.len(), "capture candidates");

        let Some(&mv) = self.moves.choose(rng) else {
            return SearchResult::none(self.nodes);
        };
        SearchResult {
            best_move: Some(mv),
            score: board.piece_at(mv.to).map(|p| piece_value(p.kind)).unwrap_or(0),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Intermediate"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.moves.clear();
    }
}
