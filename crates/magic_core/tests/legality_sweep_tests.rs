use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use magic_core::{
    Board, Color, Move, Piece, PieceKind, Square, check_move, evaluate, is_legal, legal_moves,
    piece_value,
};

const FULL_SWEEP_ENV: &str = "FULL_SWEEP";

/// Scatters a random mix of pieces over an otherwise empty board.
fn random_board(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::empty();
    let count = rng.gen_range(4..48);
    for _ in 0..count {
        let s = Square::new(rng.gen_range(0..16), rng.gen_range(0..16)).unwrap();
        let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
        let color = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
        let mut piece = Piece::new(kind, color);
        if kind == PieceKind::Mage && rng.gen_bool(0.3) {
            piece = piece.with_teleport(false);
        }
        board.set_piece(s, Some(piece));
    }
    board
}

fn seeds() -> Vec<u64> {
    let n = if std::env::var(FULL_SWEEP_ENV).is_ok() { 2_000 } else { 64 };
    (0..n).collect()
}

#[test]
fn null_moves_rejected_on_random_boards() {
    seeds().par_iter().for_each(|&seed| {
        let board = random_board(seed);
        for s in Square::all() {
            for side in [Color::White, Color::Black] {
                assert!(
                    !is_legal(&board, side, Move::new(s, s)),
                    "seed {seed}: null move on {s} accepted"
                );
            }
        }
    });
}

#[test]
fn generated_moves_respect_ownership() {
    seeds().par_iter().for_each(|&seed| {
        let board = random_board(seed);
        for side in [Color::White, Color::Black] {
            for mv in legal_moves(&board, side) {
                let mover = board.piece_at(mv.from).unwrap();
                assert_eq!(mover.color, side, "seed {seed}: {mv}");
                if let Some(target) = board.piece_at(mv.to) {
                    assert_ne!(target.color, side, "seed {seed}: self-capture {mv}");
                }
                assert_eq!(check_move(&board, side, mv), Ok(()));
            }
        }
    });
}

#[test]
fn applying_legal_moves_relocates_piece() {
    seeds().par_iter().for_each(|&seed| {
        let board = random_board(seed);
        let before = evaluate(&board, Color::White);
        for mv in legal_moves(&board, Color::White) {
            let mover = board.piece_at(mv.from).unwrap();
            let (next, captured) = board.after_move(mv);
            assert!(next.is_empty(mv.from));
            let landed = next.piece_at(mv.to).unwrap();
            assert_eq!((landed.kind, landed.color), (mover.kind, mover.color));
            assert!(landed.has_moved);

            let gain = captured.map(|p| piece_value(p.kind)).unwrap_or(0);
            assert_eq!(evaluate(&next, Color::White), before + gain, "seed {seed}: {mv}");
        }
    });
}

#[test]
fn evaluation_is_antisymmetric() {
    seeds().par_iter().for_each(|&seed| {
        let board = random_board(seed);
        assert_eq!(
            evaluate(&board, Color::White),
            -evaluate(&board, Color::Black),
            "seed {seed}"
        );
    });
}

#[test]
fn board_survives_layout_and_json() {
    seeds().par_iter().for_each(|&seed| {
        let board = random_board(seed);
        // Layout text carries kinds and colors only, not ability flags.
        let layout = board.to_layout();
        let reparsed = Board::from_layout(&layout).unwrap();
        assert_eq!(reparsed.to_layout(), layout, "seed {seed}");

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board, "seed {seed}");
    });
}
