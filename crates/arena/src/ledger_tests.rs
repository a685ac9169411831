use super::*;
use crate::achievements::Progress;
use magic_core::{Board, Piece, PieceKind, Square};

fn finished(mode: GameMode, loser: Color) -> Game {
    let mut game = Game::new(mode);
    game.resign(loser).unwrap();
    game
}

fn record(game: &Game, white: Option<&str>, black: Option<&str>) -> GameRecord {
    GameRecord::from_game(
        game,
        white.map(str::to_string),
        black.map(str::to_string),
        GameTally::default(),
    )
    .unwrap()
}

#[test]
fn test_profile_is_created_once() {
    let mut ledger = Ledger::in_memory();
    let first = ledger.profile("alice").unwrap();
    assert_eq!(first.rating, 1200);
    let second = ledger.profile("alice").unwrap();
    assert_eq!(first, second);
    assert_eq!(ledger.leaderboard(10).len(), 1);
}

#[test]
fn test_blank_username_rejected() {
    let mut ledger = Ledger::in_memory();
    assert!(matches!(ledger.profile("   "), Err(StoreError::InvalidUsername(_))));
    assert!(matches!(ledger.find_profile("nobody"), Err(StoreError::UnknownPlayer(_))));
}

#[test]
fn test_unfinished_game_cannot_be_recorded() {
    let game = Game::new(GameMode::Local);
    let err = GameRecord::from_game(&game, None, None, GameTally::default()).unwrap_err();
    assert!(matches!(err, StoreError::Unfinished));
}

#[test]
fn test_white_win_against_bot() {
    let mut ledger = Ledger::in_memory();
    let game = finished(GameMode::Bot { difficulty: 9 }, Color::Black);

    let updates = ledger.record_game(record(&game, Some("alice"), None)).unwrap();

    assert_eq!(updates.len(), 1);
    let u = &updates[0];
    assert_eq!(u.color, Color::White);
    assert_eq!(u.result, GameResult::Win);
    assert_eq!(u.rating_delta, 15);
    assert_eq!(u.profile.rating, 1215);
    assert_eq!(u.unlocked, vec![Achievement::FirstVictory]);
    assert_eq!(ledger.achievements().progress("alice").expert_wins, 1);

    let stored = &ledger.games()[0];
    assert_eq!(stored.id, 1);
    assert_eq!(stored.bot_difficulty, Some(9));
    assert_eq!(stored.board_state, Board::standard().to_layout());
}

#[test]
fn test_invalid_seat_leaves_ledger_untouched() {
    let mut ledger = Ledger::in_memory();
    let before = ledger.profile("ada").unwrap();
    let game = finished(GameMode::Local, Color::Black);

    let err = ledger
        .record_game(record(&game, Some("ada"), Some("   ")))
        .unwrap_err();

    assert!(matches!(err, StoreError::InvalidUsername(_)));
    assert!(ledger.games().is_empty());
    assert_eq!(ledger.find_profile("ada").unwrap(), &before);
    assert!(ledger.achievements().unlocked("ada").is_empty());
    assert_eq!(ledger.achievements().progress("ada"), Progress::default());
    assert_eq!(ledger.leaderboard(10).len(), 1);
}

#[test]
fn test_both_seats_updated_from_their_side() {
    let mut ledger = Ledger::in_memory();
    let game = finished(GameMode::Local, Color::White);

    let updates = ledger
        .record_game(record(&game, Some("alice"), Some("bob")))
        .unwrap();

    assert_eq!(updates[0].profile.username, "alice");
    assert_eq!(updates[0].rating_delta, -10);
    assert_eq!(updates[1].profile.username, "bob");
    assert_eq!(updates[1].rating_delta, 15);
    // Neither seat was a bot.
    assert_eq!(ledger.achievements().progress("bob").novice_wins, 0);
}

#[test]
fn test_draw_changes_nothing_but_counts() {
    let mut ledger = Ledger::in_memory();
    let mut game = Game::new(GameMode::Online);
    game.declare_draw().unwrap();

    let updates = ledger.record_game(record(&game, Some("carol"), None)).unwrap();

    assert_eq!(updates[0].rating_delta, 0);
    let p = ledger.find_profile("carol").unwrap();
    assert_eq!((p.rating, p.draws, p.total_games), (1200, 1, 1));
}

#[test]
fn test_moves_and_tally_are_kept() {
    let mut board = Board::empty();
    let at = |r, c| Square::new(r, c).unwrap();
    board.set_piece(at(8, 8), Some(Piece::new(PieceKind::Mage, Color::White)));
    board.set_piece(at(8, 6), Some(Piece::new(PieceKind::King, Color::Black)));
    let mut game = Game::from_board(board, Color::White, GameMode::Local);
    let mut tally = GameTally::default();

    let report = game.play(Move::new(at(8, 8), at(8, 6))).unwrap();
    tally.observe(&report);

    let rec = GameRecord::from_game(&game, Some("dan".into()), None, tally).unwrap();
    assert_eq!(rec.outcome, Outcome::Win(Color::White));
    assert_eq!(rec.moves, vec!["i8g8".to_string()]);
    assert_eq!(rec.tally.white.teleports, 1);
    assert_eq!(rec.tally.white.captures, 1);
    assert_eq!(rec.tally.black, SideStats::default());
}

#[test]
fn test_leaderboard_order_and_limit() {
    let mut ledger = Ledger::in_memory();
    for (name, loser) in [
        ("amy", Color::Black),
        ("amy", Color::Black),
        ("ben", Color::White),
        ("cat", Color::Black),
    ] {
        let game = finished(GameMode::Local, loser);
        ledger.record_game(record(&game, Some(name), None)).unwrap();
    }
    ledger.profile("dee").unwrap();

    let top = ledger.leaderboard(DEFAULT_LEADERBOARD_LIMIT);
    let names: Vec<&str> = top.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["amy", "cat", "dee", "ben"]);
    assert_eq!(ledger.leaderboard(2).len(), 2);
}

#[test]
fn test_in_memory_save_is_noop() {
    let ledger = Ledger::in_memory();
    assert!(ledger.path().is_none());
    assert!(ledger.save().is_ok());
}

#[test]
fn test_leaderboard_report_lists_profiles_without_games() {
    let mut ledger = Ledger::in_memory();
    assert!(ledger.leaderboard_report(10).starts_with("No players yet"));

    ledger.profile("bob").unwrap();
    assert!(ledger.games().is_empty());
    let report = ledger.leaderboard_report(10);
    assert!(report.contains("=== Leaderboard ==="));
    assert!(report.contains("bob"));
    assert!(report.contains("1200"));
}

