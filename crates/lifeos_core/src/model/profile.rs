//! User profile, XP curve and leveling.
//!
//! # Responsibility
//! - Hold the gamification state: level, XP, title, daily-bonus streak.
//! - Implement the leveling algorithm with multi-level rollover.
//!
//! # Invariants
//! - `level >= 1` and `xp < xp_for_level(level)` after every grant.
//! - `total_xp` is lifetime-cumulative and never decreases.
//! - Title is a pure function of level.

use serde::{Deserialize, Serialize};

/// Rank titles, one tier per five levels.
const TITLES: [&str; 10] = [
    "Новичок",
    "Ученик",
    "Практик",
    "Воин",
    "Мастер",
    "Эксперт",
    "Гуру",
    "Легенда",
    "Титан",
    "Бог дисциплины",
];

/// XP required to advance from the given level to the next one.
///
/// Strictly increasing in `level`.
pub fn xp_for_level(level: u32) -> i64 {
    i64::from(level) * 100 + i64::from(level.saturating_sub(1)) * 50
}

/// Title for a level, clamped to the top tier.
pub fn title_for_level(level: u32) -> &'static str {
    let tier = ((level / 5) as usize).min(TITLES.len() - 1);
    TITLES[tier]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub level: u32,
    /// Progress within the current level, always below the level threshold.
    pub xp: i64,
    /// Lifetime XP across all levels.
    pub total_xp: i64,
    pub title: String,
    /// Consecutive daily-bonus claims.
    pub streak: u32,
    /// ISO date of the last claimed daily bonus.
    pub daily_bonus_claimed: Option<String>,
    pub joined_at: String,
    pub theme: Theme,
}

/// Updatable profile fields. Gamification state only moves through
/// `grant_xp` and the daily bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub theme: Option<Theme>,
}

impl UserProfile {
    pub fn fresh(joined_at: String) -> Self {
        Self {
            name: "User".to_string(),
            level: 1,
            xp: 0,
            total_xp: 0,
            title: title_for_level(1).to_string(),
            streak: 0,
            daily_bonus_claimed: None,
            joined_at,
            theme: Theme::Light,
        }
    }

    /// Adds XP, rolling overflow into level-ups.
    ///
    /// Cumulative: granting `a` then `b` lands on the same level/xp as a
    /// single grant of `a + b`.
    pub fn grant_xp(&mut self, amount: i64) {
        self.xp += amount;
        self.total_xp += amount;

        while self.xp >= xp_for_level(self.level) {
            self.xp -= xp_for_level(self.level);
            self.level += 1;
        }

        self.title = title_for_level(self.level).to_string();
    }

    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
    }
}
