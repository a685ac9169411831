use super::*;
use crate::error::Rejection;
use crate::events::NullSink;

fn at(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn mv(fr: usize, fc: usize, tr: usize, tc: usize) -> Move {
    Move::new(at(fr, fc), at(tr, tc))
}

fn layout(rows: &[(usize, &str)]) -> Board {
    let mut txt: Vec<String> = vec!["16".to_string(); BOARD_SIZE];
    for &(row, r) in rows {
        txt[row] = r.to_string();
    }
    Board::from_layout(&txt.join("/")).unwrap()
}

#[test]
fn test_new_game_starts_with_white() {
    let game = Game::new(GameMode::Local);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board(), &Board::standard());
    assert!(game.history().is_empty());
    assert!(!game.is_over());
    assert_eq!(game.legal_moves().len(), legal_moves(&Board::standard(), Color::White).len());
}

#[test]
fn test_play_flips_turn_and_records_history() {
    let mut game = Game::new(GameMode::Bot { difficulty: 3 });
    let report = game.play(mv(14, 2, 12, 2)).unwrap();

    assert_eq!(report.side, Color::White);
    assert_eq!(report.piece.kind, PieceKind::Pawn);
    assert!(!report.piece.has_moved);
    assert_eq!(report.captured, None);
    assert_eq!(report.outcome, None);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].from, at(14, 2));
    assert!(game.board().piece_at(at(12, 2)).unwrap().has_moved);
}

#[test]
fn test_illegal_move_leaves_game_untouched() {
    let mut game = Game::new(GameMode::Local);
    assert_eq!(
        game.play(mv(14, 2, 11, 2)),
        Err(CoreError::IllegalMove(Rejection::Geometry))
    );
    assert_eq!(
        game.play(mv(1, 2, 2, 2)),
        Err(CoreError::IllegalMove(Rejection::WrongSide))
    );
    assert_eq!(
        game.play(mv(8, 8, 7, 8)),
        Err(CoreError::IllegalMove(Rejection::NoPiece))
    );
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board(), &Board::standard());
    assert!(game.history().is_empty());
}

#[test]
fn test_capture_is_recorded_for_captor() {
    let board = layout(&[(0, "7k8"), (5, "5p10"), (8, "8M7"), (15, "7K8")]);
    let mut game = Game::from_board(board, Color::White, GameMode::Local);
    let report = game.play(mv(8, 8, 5, 5)).unwrap();

    assert_eq!(report.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    assert!(!report.teleport);
    assert_eq!(game.captures().by(Color::White).len(), 1);
    assert!(game.captures().by(Color::Black).is_empty());
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_king_capture_ends_game() {
    let board = layout(&[(8, "R4k10"), (15, "7K8")]);
    let mut game = Game::from_board(board, Color::White, GameMode::Local);
    let report = game.play(mv(8, 0, 8, 5)).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Win(Color::White)));
    assert!(game.is_over());
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.play(mv(15, 7, 14, 7)), Err(CoreError::GameOver));
    assert_eq!(game.resign(Color::Black), Err(CoreError::GameOver));
}

#[test]
fn test_teleport_and_dragon_flags() {
    let board = layout(&[(0, "7k8"), (8, "8M7"), (12, "3D12"), (13, "3P12"), (15, "7K8")]);
    let mut game = Game::from_board(board, Color::White, GameMode::Local);

    let report = game.play(mv(8, 8, 8, 6)).unwrap();
    assert!(report.teleport && !report.dragon);

    game.play(mv(0, 7, 1, 7)).unwrap();

    // Dragon over its own pawn.
    let report = game.play(mv(12, 3, 14, 3)).unwrap();
    assert!(report.dragon && !report.teleport);
}

#[test]
fn test_report_events_in_order() {
    let board = layout(&[(0, "7k8"), (5, "5p10"), (8, "8M7"), (15, "7K8")]);
    let mut game = Game::from_board(board, Color::White, GameMode::Local);
    let report = game.play(mv(8, 8, 5, 5)).unwrap();

    let mut sink: Vec<GameEvent> = Vec::new();
    report.publish(&mut sink);
    assert_eq!(sink.len(), 2);
    assert!(matches!(sink[0], GameEvent::Moved { .. }));
    assert!(matches!(sink[1], GameEvent::Captured { at: s, .. } if s == at(5, 5)));

    report.publish(&mut NullSink);
}

#[test]
fn test_game_over_event_on_king_capture() {
    let board = layout(&[(8, "R4k10"), (15, "7K8")]);
    let mut game = Game::from_board(board, Color::White, GameMode::Local);
    let events = game.play(mv(8, 0, 8, 5)).unwrap().events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver(Outcome::Win(Color::White)))
    );
}

#[test]
fn test_resign_and_draw() {
    let mut game = Game::new(GameMode::Online);
    assert_eq!(game.resign(Color::White), Ok(Outcome::Win(Color::Black)));
    assert_eq!(game.outcome().and_then(Outcome::winner), Some(Color::Black));

    let mut game = Game::new(GameMode::Local);
    assert_eq!(game.declare_draw(), Ok(Outcome::Draw));
    assert_eq!(game.declare_draw(), Err(CoreError::GameOver));
    assert_eq!(Outcome::Draw.winner(), None);
}

#[test]
fn test_game_mode_serde_shape() {
    let json = serde_json::to_string(&GameMode::Bot { difficulty: 7 }).unwrap();
    assert_eq!(json, r#"{"kind":"bot","difficulty":7}"#);
    let back: GameMode = serde_json::from_str(r#"{"kind":"local"}"#).unwrap();
    assert_eq!(back, GameMode::Local);
}
