//! Bot Decision Engine
//!
//! Dispatches a difficulty level onto one of three engine tiers:
//!
//! - levels 8-10 use [`GreedyEngine`] (deterministic one-ply material search)
//! - levels 4-7 use [`CaptureEngine`] (random capture)
//! - levels 1-3 use [`RandomEngine`] (bounded random sampling)
//!
//! When the expert or intermediate tier finds nothing, the novice tier gets
//! a turn before the bot gives up.

mod difficulty;

pub use difficulty::*;

use capture_engine::CaptureEngine;
use greedy_engine::GreedyEngine;
use magic_core::{Board, Color, CoreError, Engine, Game, Move, MoveReport, Rejection, SearchResult};
use random_engine::RandomEngine;
use rand::RngCore;
use tracing::debug;


/// All three tiers behind one difficulty setting.
#[derive(Debug, Clone)]
pub struct Bot {
    difficulty: Difficulty,
    novice: RandomEngine,
    intermediate: CaptureEngine,
    expert: GreedyEngine,
    name: String,
}

impl Bot {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            novice: RandomEngine::new(),
            intermediate: CaptureEngine::new(),
            expert: GreedyEngine::new(),
            name: format!("Bot {} ({})", difficulty.level(), difficulty.tier()),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The move the bot would play for `color`, or None when it found none.
    pub fn select(&mut self, board: &Board, color: Color, rng: &mut dyn RngCore) -> Option<Move> {
        self.search(board, color, rng).best_move
    }
}

impl Engine for Bot {
    fn search(&mut self, board: &Board, side: Color, rng: &mut dyn RngCore) -> SearchResult {
        let tier = self.difficulty.tier();
        let primary = match tier {
            Tier::Expert => self.expert.search(board, side, rng),
            Tier::Intermediate => self.intermediate.search(board, side, rng),
            Tier::Novice => return self.novice.search(board, side, rng),
        };
        if primary.best_move.is_some() {
            return primary;
        }

        debug!(%side, %tier, "tier found nothing, falling back to sampling");
        let mut fallback = self.novice.search(board, side, rng);
        fallback.nodes += primary.nodes;
        fallback
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.novice.new_game();
        self.intermediate.new_game();
        self.expert.new_game();
    }
}

/// One-shot move selection.
///
/// Returns None when no legal move was found for any of `color`'s pieces.
pub fn select_move(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    rng: &mut dyn RngCore,
) -> Option<Move> {
    Bot::new(difficulty).select(board, color, rng)
}

/// A bot seated at one color of a game session.
#[derive(Debug, Clone)]
pub struct BotPlayer {
    bot: Bot,
    color: Color,
}

impl BotPlayer {
    pub fn new(difficulty: Difficulty, color: Color) -> Self {
        Self {
            bot: Bot::new(difficulty),
            color,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn difficulty(&self) -> Difficulty {
        self.bot.difficulty()
    }

    /// Chooses and plays the bot's move.
    ///
    /// `NoLegalMove` is the terminal signal; what it means for the game is up
    /// to the caller.
    pub fn play_turn(
        &mut self,
        game: &mut Game,
        rng: &mut dyn RngCore,
    ) -> Result<MoveReport, CoreError> {
        if game.is_over() {
            return Err(CoreError::GameOver);
        }
        if game.turn() != self.color {
            return Err(CoreError::IllegalMove(Rejection::WrongSide));
        }
        let mv = self
            .bot
            .select(game.board(), self.color, rng)
            .ok_or(CoreError::NoLegalMove(self.color))?;
        debug!(color = %self.color, %mv, difficulty = self.bot.difficulty().level(), "bot move");
        game.play(mv)
    }
}
