//! Achievement catalog and per-player progress
//!
//! Progress counters are updated from every recorded game; any achievement
//! whose requirement is met afterwards is unlocked. Unlocking is idempotent.

use std::collections::{BTreeMap, BTreeSet};

use bot::Tier;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ledger::SideStats;
use crate::profile::GameResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstVictory,
    NoviceConqueror,
    Strategist,
    Grandmaster,
    WinStreak,
    TeleportMaster,
    DragonRider,
    Necromancer,
    Marathon,
    Legend,
}

impl Achievement {
    pub const ALL: [Achievement; 10] = [
        Achievement::FirstVictory,
        Achievement::NoviceConqueror,
        Achievement::Strategist,
        Achievement::Grandmaster,
        Achievement::WinStreak,
        Achievement::TeleportMaster,
        Achievement::DragonRider,
        Achievement::Necromancer,
        Achievement::Marathon,
        Achievement::Legend,
    ];

    /// Stable numeric id, 1..=10
    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_id(id: u8) -> Option<Achievement> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Achievement::FirstVictory => "First Victory",
            Achievement::NoviceConqueror => "Novice Conqueror",
            Achievement::Strategist => "Strategist",
            Achievement::Grandmaster => "Grandmaster",
            Achievement::WinStreak => "Win Streak",
            Achievement::TeleportMaster => "Teleport Master",
            Achievement::DragonRider => "Dragon Rider",
            Achievement::Necromancer => "Necromancer",
            Achievement::Marathon => "Marathon",
            Achievement::Legend => "Legend",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstVictory => "Win your first game",
            Achievement::NoviceConqueror => "Beat a level 1-3 bot 10 times",
            Achievement::Strategist => "Beat a level 4-7 bot 5 times",
            Achievement::Grandmaster => "Beat a level 8-10 bot 3 times",
            Achievement::WinStreak => "Win 5 games in a row",
            Achievement::TeleportMaster => "Teleport with a mage 50 times",
            Achievement::DragonRider => "Win 10 games with a dragon",
            Achievement::Necromancer => "Revive 25 pieces",
            Achievement::Marathon => "Play 100 games",
            Achievement::Legend => "Reach a rating of 2000",
        }
    }

    pub fn requirement(self) -> u32 {
        match self {
            Achievement::FirstVictory => 1,
            Achievement::NoviceConqueror => 10,
            Achievement::Strategist => 5,
            Achievement::Grandmaster => 3,
            Achievement::WinStreak => 5,
            Achievement::TeleportMaster => 50,
            Achievement::DragonRider => 10,
            Achievement::Necromancer => 25,
            Achievement::Marathon => 100,
            Achievement::Legend => 2000,
        }
    }

    /// Current value of the counter this achievement watches.
    pub fn progress(self, p: &Progress) -> u32 {
        match self {
            Achievement::FirstVictory => p.wins,
            Achievement::NoviceConqueror => p.novice_wins,
            Achievement::Strategist => p.intermediate_wins,
            Achievement::Grandmaster => p.expert_wins,
            Achievement::WinStreak => p.best_streak,
            Achievement::TeleportMaster => p.teleports,
            Achievement::DragonRider => p.dragon_wins,
            Achievement::Necromancer => p.revivals,
            Achievement::Marathon => p.games,
            Achievement::Legend => p.rating.max(0) as u32,
        }
    }

    pub fn is_met(self, p: &Progress) -> bool {
        self.progress(p) >= self.requirement()
    }
}

/// Counters behind the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub games: u32,
    pub wins: u32,
    pub novice_wins: u32,
    pub intermediate_wins: u32,
    pub expert_wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub teleports: u32,
    pub dragon_wins: u32,
    pub revivals: u32,
    pub rating: i32,
}

/// What one player did in one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub result: GameResult,
    /// Tier of the bot on the other side, if it was a bot game
    pub opponent: Option<Tier>,
    pub stats: SideStats,
    /// Rating after the game
    pub rating: i32,
}

impl Progress {
    fn observe(&mut self, game: &GameSummary) {
        self.games += 1;
        self.teleports += game.stats.teleports;
        self.revivals += game.stats.revivals;
        self.rating = game.rating;

        if game.result != GameResult::Win {
            self.current_streak = 0;
            return;
        }
        self.wins += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
        if game.stats.dragon_moves > 0 {
            self.dragon_wins += 1;
        }
        match game.opponent {
            Some(Tier::Novice) => self.novice_wins += 1,
            Some(Tier::Intermediate) => self.intermediate_wins += 1,
            Some(Tier::Expert) => self.expert_wins += 1,
            None => {}
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PlayerAchievements {
    progress: Progress,
    unlocked: BTreeSet<Achievement>,
}

/// Unlocked achievements and progress for every player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementService {
    players: BTreeMap<String, PlayerAchievements>,
}

impl AchievementService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only the first time `achievement` is unlocked for `player`.
    pub fn unlock(&mut self, player: &str, achievement: Achievement) -> bool {
        let entry = self.players.entry(player.to_string()).or_default();
        let fresh = entry.unlocked.insert(achievement);
        if fresh {
            info!(player, achievement = achievement.name(), "achievement unlocked");
        }
        fresh
    }

    pub fn is_unlocked(&self, player: &str, achievement: Achievement) -> bool {
        self.players
            .get(player)
            .is_some_and(|p| p.unlocked.contains(&achievement))
    }

    /// Unlocked achievements in catalog order
    pub fn unlocked(&self, player: &str) -> Vec<Achievement> {
        self.players
            .get(player)
            .map(|p| p.unlocked.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn progress(&self, player: &str) -> Progress {
        self.players
            .get(player)
            .map(|p| p.progress.clone())
            .unwrap_or_default()
    }

    /// Folds one finished game into the player's counters and unlocks
    /// whatever became reachable. Returns the newly unlocked achievements.
    pub fn record_game(&mut self, player: &str, game: &GameSummary) -> Vec<Achievement> {
        let entry = self.players.entry(player.to_string()).or_default();
        entry.progress.observe(game);
        let progress = entry.progress.clone();

        Achievement::ALL
            .into_iter()
            .filter(|a| a.is_met(&progress))
            .filter(|&a| self.unlock(player, a))
            .collect()
    }
}

#[cfg(test)]
#[path = "achievements_tests.rs"]
mod achievements_tests;
