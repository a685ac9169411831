use crate::{board::Board, types::*};

/// Material values indexed by `PieceKind::idx()`.
/// Order: King, Queen, Rook, Bishop, Knight, Pawn, Mage, Dragon,
/// Necromancer, Archangel, Warlock
pub const PIECE_VALUES: [i32; 11] = [100, 9, 5, 3, 3, 1, 7, 8, 6, 7, 6];

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Material balance seen from `perspective`: own pieces add, enemy pieces
/// subtract. No positional terms.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    Square::all()
        .filter_map(|s| board.piece_at(s))
        .map(|pc| {
            let v = piece_value(pc.kind);
            if pc.color == perspective { v } else { -v }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
