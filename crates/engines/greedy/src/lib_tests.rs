use super::*;
use magic_core::{Piece, PieceKind, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn place(board: &mut Board, row: usize, col: usize, kind: PieceKind, color: Color) {
    board.set_piece(at(row, col), Some(Piece::new(kind, color)));
}

#[test]
fn greedy_engine_takes_most_valuable_piece() {
    let mut board = Board::empty();
    place(&mut board, 8, 8, PieceKind::Queen, Color::White);
    place(&mut board, 8, 12, PieceKind::Pawn, Color::Black);
    place(&mut board, 4, 8, PieceKind::Dragon, Color::Black);
    place(&mut board, 4, 4, PieceKind::Knight, Color::Black);
    let mut engine = GreedyEngine::new();
    let mut rng = StdRng::seed_from_u64(0);

    let result = engine.search(&board, Color::White, &mut rng);

    assert_eq!(result.best_move, Some(Move::new(at(8, 8), at(4, 8))));
    assert_eq!(result.score, 9 - 1 - 3);
}

#[test]
fn greedy_engine_is_deterministic() {
    let board = Board::standard();
    let mut engine = GreedyEngine::new();

    let moves: Vec<_> = (0..5)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.search(&board, Color::Black, &mut rng).best_move
        })
        .collect();

    assert!(moves.iter().all(|m| *m == moves[0]));
}

#[test]
fn greedy_engine_keeps_first_of_equal_moves() {
    let mut board = Board::empty();
    place(&mut board, 10, 3, PieceKind::Rook, Color::White);
    place(&mut board, 12, 12, PieceKind::Knight, Color::White);
    place(&mut board, 0, 15, PieceKind::Pawn, Color::Black);
    let mut engine = GreedyEngine::new();
    let mut rng = StdRng::seed_from_u64(0);

    let result = engine.search(&board, Color::White, &mut rng);

    // Nothing can be captured, so every move scores the same and the first
    // generated one is kept: the rook, to the top of its file.
    assert_eq!(result.best_move, Some(Move::new(at(10, 3), at(0, 3))));
    assert_eq!(result.score, 5 + 3 - 1);
}

#[test]
fn greedy_engine_opening_trades_dragons() {
    let board = Board::standard();
    let mut engine = GreedyEngine::new();
    let mut rng = StdRng::seed_from_u64(0);

    let result = engine.search(&board, Color::White, &mut rng);

    // Both dragons can take their counterpart; the left one is found first.
    assert_eq!(result.best_move, Some(Move::new(at(15, 4), at(0, 4))));
    assert_eq!(result.score, 8);
}

#[test]
fn greedy_engine_does_not_touch_board() {
    let mut board = Board::empty();
    place(&mut board, 3, 3, PieceKind::Dragon, Color::Black);
    place(&mut board, 10, 10, PieceKind::King, Color::White);
    let snapshot = board.clone();
    let mut engine = GreedyEngine::new();
    let mut rng = StdRng::seed_from_u64(0);

    let result = engine.search(&board, Color::Black, &mut rng);

    assert_eq!(board, snapshot);
    assert_eq!(result.best_move, Some(Move::new(at(3, 3), at(10, 10))));
}

#[test]
fn greedy_engine_with_no_moves() {
    let mut engine = GreedyEngine::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = engine.search(&Board::empty(), Color::White, &mut rng);
    assert!(result.best_move.is_none());
}
