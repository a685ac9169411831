//! Player profiles and the fixed-delta rating

use magic_core::{Color, Outcome};
use serde::{Deserialize, Serialize};

/// Rating of a freshly created profile
pub const STARTING_RATING: i32 = 1200;

/// Rating change for a won game
pub const WIN_DELTA: i32 = 15;

/// Rating change for a lost game
pub const LOSS_DELTA: i32 = -10;

/// Result of a single game from one side's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// How `outcome` looks from the seat of `side`.
    pub fn for_side(outcome: Outcome, side: Color) -> Self {
        match outcome.winner() {
            Some(winner) if winner == side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Not Elo: every result moves the rating by a fixed amount.
    pub fn rating_delta(self) -> i32 {
        match self {
            GameResult::Win => WIN_DELTA,
            GameResult::Loss => LOSS_DELTA,
            GameResult::Draw => 0,
        }
    }
}

/// Aggregate statistics of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub username: String,
    pub rating: i32,
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl PlayerProfile {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            rating: STARTING_RATING,
            total_games: 0,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Counts one finished game and returns the rating change.
    pub fn apply(&mut self, result: GameResult) -> i32 {
        self.total_games += 1;
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        let delta = result.rating_delta();
        self.rating += delta;
        delta
    }

    /// Share of games won, 0.0 before the first game
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total_games as f64
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first side's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod profile_tests;
