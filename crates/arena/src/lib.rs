//! Arena for magic chess
//!
//! This crate provides the collaborators around the engine:
//! - Player profiles with a fixed-delta rating
//! - A JSON ledger of finished games behind the `GameStore` trait
//! - The achievement catalog and per-player progress
//! - Bot-vs-bot matches between difficulty levels
//! - `Settings` loaded from TOML
//!
//! # Usage
//!
//! ```bash
//! # Ten games between a level 3 and a level 9 bot
//! cargo run -p arena -- match 3 9 --games 10 --seed 7
//!
//! # Top players
//! cargo run -p arena -- leaderboard --limit 5
//! ```

mod achievements;
mod config;
mod error;
mod ledger;
mod match_runner;
mod profile;

pub use achievements::*;
pub use config::*;
pub use error::*;
pub use ledger::*;
pub use match_runner::*;
pub use profile::*;
