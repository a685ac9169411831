//! Finished-game storage: the `GameStore` trait and its JSON file backend.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bot::Tier;
use magic_core::{move_to_text, Color, Game, GameMode, Move, MoveReport, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::achievements::{Achievement, AchievementService, GameSummary};
use crate::error::StoreError;
use crate::profile::{GameResult, PlayerProfile};

/// Per-side counters gathered while a game is played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStats {
    pub teleports: u32,
    pub dragon_moves: u32,
    pub captures: u32,
    pub revivals: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTally {
    pub white: SideStats,
    pub black: SideStats,
}

impl GameTally {
    /// Counts one applied move for the side that made it.
    pub fn observe(&mut self, report: &MoveReport) {
        let stats = match report.side {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        if report.teleport {
            stats.teleports += 1;
        }
        if report.dragon {
            stats.dragon_moves += 1;
        }
        if report.captured.is_some() {
            stats.captures += 1;
        }
    }

    pub fn side(&self, color: Color) -> SideStats {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// A completed game as the store keeps it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Assigned by the store; 0 until recorded
    pub id: u64,
    pub white_player: Option<String>,
    pub black_player: Option<String>,
    pub game_mode: GameMode,
    pub bot_difficulty: Option<u8>,
    pub outcome: Outcome,
    pub moves: Vec<String>,
    /// Final position in layout notation
    pub board_state: String,
    pub tally: GameTally,
    pub completed_at: u64,
}

impl GameRecord {
    /// Snapshot of a finished game. Unnamed seats (bots, guests) get no
    /// profile update.
    pub fn from_game(
        game: &Game,
        white_player: Option<String>,
        black_player: Option<String>,
        tally: GameTally,
    ) -> Result<Self, StoreError> {
        let outcome = game.outcome().ok_or(StoreError::Unfinished)?;
        let bot_difficulty = match game.mode() {
            GameMode::Bot { difficulty } => Some(difficulty),
            GameMode::Local | GameMode::Online => None,
        };
        Ok(Self {
            id: 0,
            white_player,
            black_player,
            game_mode: game.mode(),
            bot_difficulty,
            outcome,
            moves: game
                .history()
                .iter()
                .map(|h| move_to_text(Move::new(h.from, h.to)))
                .collect(),
            board_state: game.board().to_layout(),
            tally,
            completed_at: unix_now(),
        })
    }

    pub fn seat(&self, color: Color) -> Option<&str> {
        match color {
            Color::White => self.white_player.as_deref(),
            Color::Black => self.black_player.as_deref(),
        }
    }

    /// Tier of the bot sitting opposite `color`, for bot games.
    fn opponent_tier(&self, color: Color) -> Option<Tier> {
        match self.seat(color.other()) {
            None => self.bot_difficulty.map(Tier::for_level),
            Some(_) => None,
        }
    }
}

/// Returned per named seat by `GameStore::record_game`
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerUpdate {
    pub profile: PlayerProfile,
    pub color: Color,
    pub result: GameResult,
    pub rating_delta: i32,
    pub unlocked: Vec<Achievement>,
}

/// Persistence collaborator of the game front ends.
pub trait GameStore {
    /// Get or create the profile for `username`.
    fn profile(&mut self, username: &str) -> Result<PlayerProfile, StoreError>;

    /// Store a finished game and update the profiles of its named seats.
    fn record_game(&mut self, record: GameRecord) -> Result<Vec<PlayerUpdate>, StoreError>;

    /// Profiles by rating, highest first.
    fn leaderboard(&self, limit: usize) -> Vec<PlayerProfile>;
}

/// Default number of rows shown by the leaderboard
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Everything in one JSON file, read and written whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(skip)]
    path: Option<PathBuf>,
    profiles: BTreeMap<String, PlayerProfile>,
    games: Vec<GameRecord>,
    achievements: AchievementService,
}

impl Ledger {
    /// A ledger that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let mut ledger: Ledger = serde_json::from_str(&contents)?;
        ledger.path = Some(path.to_path_buf());
        Ok(ledger)
    }

    /// Like `load`, but a missing file starts an empty ledger at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "starting a new ledger");
            return Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }
        Self::load(path)
    }

    /// Save to the file this ledger was opened from; in-memory ledgers
    /// skip the write.
    pub fn save(&self) -> Result<(), StoreError> {
        match &self.path {
            Some(path) => self.save_to(path),
            None => Ok(()),
        }
    }

    /// Save to a JSON file
    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// An existing profile; unlike `GameStore::profile` this never creates one.
    pub fn find_profile(&self, username: &str) -> Result<&PlayerProfile, StoreError> {
        self.profiles
            .get(username)
            .ok_or_else(|| StoreError::UnknownPlayer(username.to_string()))
    }

    pub fn achievements(&self) -> &AchievementService {
        &self.achievements
    }

    pub fn achievements_mut(&mut self) -> &mut AchievementService {
        &mut self.achievements
    }

    /// Leaderboard as a printable table, or a hint when nobody has a profile yet
    pub fn leaderboard_report(&self, limit: usize) -> String {
        use std::fmt::Write;

        let entries = self.leaderboard(limit);
        if entries.is_empty() {
            return "No players yet. Play some games first!\n".to_string();
        }

        let mut out = String::from("\n=== Leaderboard ===\n");
        writeln!(
            out,
            "{:<4} {:<24} {:>6} {:>6} {:>6} {:>6}",
            "#", "Player", "Rating", "W", "L", "D"
        )
        .ok();
        writeln!(out, "{}", "-".repeat(56)).ok();
        for (rank, p) in entries.iter().enumerate() {
            writeln!(
                out,
                "{:<4} {:<24} {:>6} {:>6} {:>6} {:>6}",
                rank + 1,
                p.username,
                p.rating,
                p.wins,
                p.losses,
                p.draws
            )
            .ok();
        }
        out
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self, limit: usize) {
        println!("{}", self.leaderboard_report(limit));
    }
}

fn check_username(username: &str) -> Result<&str, StoreError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidUsername(username.to_string()));
    }
    Ok(trimmed)
}

impl GameStore for Ledger {
    fn profile(&mut self, username: &str) -> Result<PlayerProfile, StoreError> {
        let username = check_username(username)?;
        if let Some(p) = self.profiles.get(username) {
            return Ok(p.clone());
        }
        let profile = PlayerProfile::new(username);
        self.profiles.insert(username.to_string(), profile.clone());
        self.save()?;
        info!(username, "profile created");
        Ok(profile)
    }

    fn record_game(&mut self, mut record: GameRecord) -> Result<Vec<PlayerUpdate>, StoreError> {
        // Every seat is checked before any profile is touched.
        let mut seats = Vec::new();
        for color in [Color::White, Color::Black] {
            if let Some(name) = record.seat(color) {
                seats.push((color, check_username(name)?.to_string()));
            }
        }
        record.id = self.games.len() as u64 + 1;

        let mut updates = Vec::new();
        for (color, name) in seats {
            let result = GameResult::for_side(record.outcome, color);

            let profile = self
                .profiles
                .entry(name.clone())
                .or_insert_with(|| PlayerProfile::new(&name));
            let rating_delta = profile.apply(result);

            let summary = GameSummary {
                result,
                opponent: record.opponent_tier(color),
                stats: record.tally.side(color),
                rating: profile.rating,
            };
            let profile = profile.clone();
            let unlocked = self.achievements.record_game(&name, &summary);

            updates.push(PlayerUpdate {
                profile,
                color,
                result,
                rating_delta,
                unlocked,
            });
        }

        info!(
            id = record.id,
            outcome = ?record.outcome,
            plies = record.moves.len(),
            "game recorded"
        );
        self.games.push(record);
        self.save()?;
        Ok(updates)
    }

    fn leaderboard(&self, limit: usize) -> Vec<PlayerProfile> {
        let mut entries: Vec<PlayerProfile> = self.profiles.values().cloned().collect();
        // Stable sort keeps name order among equal ratings.
        entries.sort_by(|a, b| b.rating.cmp(&a.rating));
        entries.truncate(limit);
        entries
    }
}

/// Seconds since the Unix epoch
fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod ledger_tests;
