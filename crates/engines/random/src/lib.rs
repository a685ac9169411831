//! Novice Bot Tier
//!
//! Picks a random piece of its own color and a random destination square,
//! and keeps the first pair that turns out to be legal. The number of tries
//! is bounded by the number of pieces, so on a crowded board with few legal
//! moves it can give up even though a move exists.
//!
//! Also the fallback for the stronger tiers when they find nothing.

use magic_core::{is_legal, Board, Color, Engine, Move, SearchResult, Square, BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;


/// Sampling attempts granted per piece the side owns.
pub const ATTEMPTS_PER_PIECE: usize = 20;

/// Samples (piece, destination) pairs until one is legal.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Color, rng: &mut dyn RngCore) -> SearchResult {
        self.nodes = 0;

        let pieces: Vec<Square> = board.pieces(side).map(|(s, _)| s).collect();
        let attempts = pieces.len() * ATTEMPTS_PER_PIECE;

        for _ in 0..attempts {
            let Some(&from) = pieces.choose(rng) else {
                break;
            };
            let Ok(to) = Square::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE))
            else {
                continue;
            };
            self.nodes += 1;

            let mv = Move::new(from, to);
            if is_legal(board, side, mv) {
                return SearchResult {
                    best_move: Some(mv),
                    score: 0,
                    nodes: self.nodes,
                };
            }
        }

        debug!(%side, attempts, "random sampling found no legal move");
        SearchResult::none(self.nodes)
    }

    fn name(&self) -> &str {
        "Novice"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
