//! Match runner for playing games between bots

use bot::{Bot, Difficulty};
use magic_core::{Color, Engine, Game, GameMode, Outcome};
use rand::RngCore;
use tracing::{info, warn};

use crate::ledger::GameTally;
use crate::profile::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 400,
            alternate_colors: true,
        }
    }
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    KingCaptured,
    /// The side to move had no legal move.
    NoMoves(Color),
    /// An engine proposed a move the rules refuse; that side forfeits.
    Forfeit(Color),
    PlyLimit,
}

/// Summary of one finished bot game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: Outcome,
    pub end: GameEnd,
    pub plies: u32,
    pub tally: GameTally,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
        rng: &mut dyn RngCore,
    ) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (report, engine1_color) = if engine1_white {
                (self.play_game(engine1, engine2, rng), Color::White)
            } else {
                (self.play_game(engine2, engine1, rng), Color::Black)
            };
            let game_result = GameResult::for_side(report.outcome, engine1_color);
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                color = %engine1_color,
                result = ?game_result,
                end = ?report.end,
                plies = report.plies,
                "score {}-{}-{}",
                result.wins,
                result.losses,
                result.draws
            );
        }

        result
    }

    /// Play a single game from the standard position
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
        rng: &mut dyn RngCore,
    ) -> GameReport {
        let mut game = Game::new(GameMode::Local);
        let mut tally = GameTally::default();
        white.new_game();
        black.new_game();

        let mut plies = 0;
        let end = loop {
            if plies >= self.config.max_plies {
                break GameEnd::PlyLimit;
            }
            let side = game.turn();
            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let Some(mv) = engine.search(game.board(), side, rng).best_move else {
                break GameEnd::NoMoves(side);
            };
            match game.play(mv) {
                Ok(report) => {
                    tally.observe(&report);
                    plies += 1;
                    if report.outcome.is_some() {
                        break GameEnd::KingCaptured;
                    }
                }
                Err(e) => {
                    warn!(engine = engine.name(), %mv, error = %e, "engine move refused");
                    break GameEnd::Forfeit(side);
                }
            }
        };

        let outcome = match end {
            GameEnd::KingCaptured => game.outcome().unwrap_or(Outcome::Draw),
            GameEnd::Forfeit(side) => Outcome::Win(side.other()),
            GameEnd::NoMoves(_) | GameEnd::PlyLimit => Outcome::Draw,
        };
        GameReport {
            outcome,
            end,
            plies,
            tally,
        }
    }
}

/// Quick utility to run a match between two difficulty levels
pub fn quick_match(
    level1: Difficulty,
    level2: Difficulty,
    num_games: u32,
    rng: &mut dyn RngCore,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(&mut Bot::new(level1), &mut Bot::new(level2), rng)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
