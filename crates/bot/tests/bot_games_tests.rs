use rand::SeedableRng;
use rand::rngs::StdRng;

use bot::{BotPlayer, Difficulty};
use magic_core::{Color, CoreError, Game, GameMode, is_legal};

const PLY_LIMIT: usize = 120;

/// Plays two bots against each other, checking each move before it lands.
fn play_out(white: u8, black: u8, seed: u64) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(GameMode::Local);
    let mut players = [
        BotPlayer::new(Difficulty::new(white).unwrap(), Color::White),
        BotPlayer::new(Difficulty::new(black).unwrap(), Color::Black),
    ];

    for _ in 0..PLY_LIMIT {
        if game.is_over() {
            break;
        }
        let before = game.board().clone();
        let side = game.turn();
        match players[side.idx()].play_turn(&mut game, &mut rng) {
            Ok(report) => assert!(is_legal(&before, side, report.mv)),
            Err(CoreError::NoLegalMove(_)) => {
                game.declare_draw().unwrap();
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    game
}

#[test]
fn bots_of_every_tier_play_legal_games() {
    for (white, black) in [(1, 1), (5, 2), (9, 6), (10, 10)] {
        let game = play_out(white, black, 17);
        assert!(!game.history().is_empty(), "{white} vs {black}");
    }
}

#[test]
fn expert_mirror_match_is_reproducible() {
    let a = play_out(10, 10, 1);
    let b = play_out(10, 10, 999);
    assert_eq!(a.history(), b.history());
    assert_eq!(a.outcome(), b.outcome());
}

#[test]
fn expert_beats_novice_on_material() {
    let game = play_out(10, 1, 3);
    let white_taken: i32 = game
        .captures()
        .by(Color::White)
        .iter()
        .map(|p| magic_core::piece_value(p.kind))
        .sum();
    let black_taken: i32 = game
        .captures()
        .by(Color::Black)
        .iter()
        .map(|p| magic_core::piece_value(p.kind))
        .sum();
    assert!(white_taken > black_taken);
}
