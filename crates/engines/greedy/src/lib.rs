//! Expert Bot Tier
//!
//! Greedy one-ply search: every legal move is tried on a copy of the board
//! and the resulting position is scored with the material evaluator from the
//! mover's side. No lookahead beyond that single ply.

use magic_core::{evaluate, legal_moves_into, Board, Color, Engine, Move, SearchResult};
use rand::RngCore;
use tracing::debug;

#[cfg(test)]
mod lib_tests;

/// Picks the move with the strictly greatest evaluation.
///
/// Ties keep the first move in generation order (pieces row-major, then
/// destinations row-major), so the choice is a pure function of the board.
#[derive(Debug, Clone, Default)]
pub struct GreedyEngine {
    nodes: u64,
    moves: Vec<Move>,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The best move and its score, without touching the node counter.
    pub fn best_move(board: &Board, side: Color, moves: &[Move]) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;
        for &mv in moves {
            let (next, _) = board.after_move(mv);
            let score = evaluate(&next, side);
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((mv, score));
            }
        }
        best
    }
}

impl Engine for GreedyEngine {
    fn search(&mut self, board: &Board, side: Color, _rng: &mut dyn RngCore) -> SearchResult {
        legal_moves_into(board, side, &mut self.moves);
        self.nodes = self.moves.len() as u64;

        match Self::best_move(board, side, &self.moves) {
            Some((mv, score)) => {
                debug!(%side, %mv, score, nodes = self.nodes, "greedy choice");
                SearchResult {
                    best_move: Some(mv),
                    score,
                    nodes: self.nodes,
                }
            }
            None => SearchResult::none(self.nodes),
        }
    }

    fn name(&self) -> &str {
        "Expert"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.moves.clear();
    }
}
