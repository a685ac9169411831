use super::*;

fn sq(txt: &str) -> Square {
    parse_square(txt).unwrap()
}

#[test]
fn test_new_game_commands() {
    assert_eq!(parse_command("new local").unwrap(), Some(Command::New(NewGame::Local)));
    assert_eq!(parse_command("new online").unwrap(), Some(Command::New(NewGame::Online)));
    assert_eq!(parse_command("new bot").unwrap(), Some(Command::New(NewGame::Bot(None))));
    assert_eq!(
        parse_command("  new bot 7 ").unwrap(),
        Some(Command::New(NewGame::Bot(Some(Difficulty::new(7).unwrap()))))
    );
    assert!(parse_command("new bot 0").is_err());
    assert!(parse_command("new bot eleven").is_err());
    assert!(parse_command("new chess960").is_err());
}

#[test]
fn test_move_commands() {
    let expected = Command::Move(Move::new(sq("e2"), sq("e4")));
    assert_eq!(parse_command("move e2 e4").unwrap(), Some(expected));
    assert_eq!(parse_command("m e2e4").unwrap(), Some(expected));
    assert!(parse_command("move e2").is_err());
    assert!(parse_command("move e2 z9").is_err());
}

#[test]
fn test_other_commands() {
    assert_eq!(parse_command("board").unwrap(), Some(Command::Board));
    assert_eq!(parse_command("moves f1").unwrap(), Some(Command::Moves(sq("f1"))));
    assert_eq!(parse_command("resign").unwrap(), Some(Command::Resign));
    assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
    assert_eq!(parse_command("help").unwrap(), Some(Command::Help));
    assert_eq!(parse_command("   ").unwrap(), None);
    assert!(parse_command("castle").is_err());
}

#[test]
fn test_bot_mode_uses_default_level() {
    let default = Difficulty::new(4).unwrap();
    assert_eq!(
        NewGame::Bot(None).mode(default),
        GameMode::Bot { difficulty: 4 }
    );
    assert_eq!(
        NewGame::Bot(Some(Difficulty::new(10).unwrap())).mode(default),
        GameMode::Bot { difficulty: 10 }
    );
    assert_eq!(NewGame::Local.mode(default), GameMode::Local);
}
