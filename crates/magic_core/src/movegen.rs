use crate::{
    board::Board,
    error::Rejection,
    rules::{PathPolicy, rule_for},
    types::*,
};

/// Decides whether `side` may play `mv`.
///
/// Pure and total: every pair of on-board squares yields an answer.
pub fn is_legal(board: &Board, side: Color, mv: Move) -> bool {
    check_move(board, side, mv).is_ok()
}

/// Same decision as `is_legal`, with the reason when the move is refused.
pub fn check_move(board: &Board, side: Color, mv: Move) -> Result<(), Rejection> {
    let pc = board.piece_at(mv.from).ok_or(Rejection::NoPiece)?;
    if pc.color != side {
        return Err(Rejection::WrongSide);
    }
    if mv.from == mv.to {
        return Err(Rejection::NullMove);
    }
    let target = board.piece_at(mv.to);
    if let Some(t) = target
        && t.color == pc.color
    {
        return Err(Rejection::SelfCapture);
    }

    if pc.kind == PieceKind::Pawn {
        return check_pawn(board, pc, mv, target);
    }

    let rule = rule_for(pc.kind);
    let shaped = rule.geometry.admits(&mv);
    if shaped && (rule.path == PathPolicy::Ignore || is_path_clear(board, mv.from, mv.to)) {
        return Ok(());
    }
    if let Some(radius) = rule.teleport_radius
        && pc.can_teleport()
        && mv.chebyshev() <= radius
    {
        return Ok(());
    }
    if shaped {
        Err(Rejection::Blocked)
    } else {
        Err(Rejection::Geometry)
    }
}

fn check_pawn(board: &Board, pc: Piece, mv: Move, target: Option<Piece>) -> Result<(), Rejection> {
    let dir = pc.color.forward();
    let dr = mv.to.row() as i8 - mv.from.row() as i8;
    let dc = mv.col_diff();

    if dc == 0 {
        if dr == dir {
            return if target.is_none() {
                Ok(())
            } else {
                Err(Rejection::Blocked)
            };
        }
        if dr == 2 * dir && mv.from.row() == pc.color.pawn_row() {
            let mid_empty = mv
                .from
                .offset(dir, 0)
                .map(|mid| board.is_empty(mid))
                .unwrap_or(false);
            return if mid_empty && target.is_none() {
                Ok(())
            } else {
                Err(Rejection::Blocked)
            };
        }
        return Err(Rejection::Geometry);
    }

    // Diagonal steps only capture; self-capture was already ruled out.
    if dc == 1 && dr == dir && target.is_some() {
        return Ok(());
    }
    Err(Rejection::Geometry)
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Walks the unit direction one square at a time. Pairs that do not share a
/// row, column or diagonal have no path and report false.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return false;
    }
    let (sr, sc) = (dr.signum(), dc.signum());

    let mut cur = from;
    loop {
        cur = match cur.offset(sr, sc) {
            Some(s) => s,
            None => return false,
        };
        if cur == to {
            return true;
        }
        if !board.is_empty(cur) {
            return false;
        }
    }
}

/// Whether a (legal) move is a mage teleport rather than a diagonal slide.
///
/// Callers use this to raise the teleport presentation event.
pub fn is_teleport(board: &Board, mv: Move) -> bool {
    let Some(pc) = board.piece_at(mv.from) else {
        return false;
    };
    let Some(radius) = rule_for(pc.kind).teleport_radius else {
        return false;
    };
    if !pc.can_teleport() || mv.from == mv.to || mv.chebyshev() > radius {
        return false;
    }
    let slide = mv.row_diff() == mv.col_diff() && is_path_clear(board, mv.from, mv.to);
    !slide
}

/// Legal destinations of the piece on `from`, row-major.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    Square::all()
        .map(|to| Move::new(from, to))
        .filter(|&mv| is_legal(board, pc.color, mv))
        .collect()
}

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(128);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Order: pieces in discovery order, then destinations row-major.
pub fn legal_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    for (from, _) in board.pieces(side) {
        for to in Square::all() {
            let mv = Move::new(from, to);
            if is_legal(board, side, mv) {
                out.push(mv);
            }
        }
    }
}

/// True when `side` has at least one legal move anywhere.
pub fn has_legal_move(board: &Board, side: Color) -> bool {
    board.pieces(side).any(|(from, _)| {
        Square::all().any(|to| is_legal(board, side, Move::new(from, to)))
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
