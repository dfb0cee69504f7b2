//! Habit domain model.
//!
//! # Responsibility
//! - Define the habit record and its completion/streak lifecycle.
//!
//! # Invariants
//! - `best_streak >= streak >= 0` after every toggle.
//! - `completed_dates` holds each ISO date at most once (set semantics).
//! - `quit_date` is fixed at creation for quit habits.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Cadence category of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    Daily,
    Weekly,
    /// Specific weekdays, listed in `Habit::frequency`.
    Custom,
    /// Breaking a bad habit; tracks days since `quit_date`.
    Quit,
}

/// A tracked habit with an incrementally maintained completion streak.
///
/// The streak is deliberately a toggle counter, not a calendar-consecutive-day
/// count: toggling a date on increments it, toggling the same date off
/// decrements it (floored at zero). Callers that need calendar math should
/// derive it from `completed_dates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    #[serde(rename = "type")]
    pub kind: HabitKind,
    /// Weekday numbers (0 = Monday) for `HabitKind::Custom`.
    pub frequency: Option<Vec<u8>>,
    pub streak: u32,
    pub best_streak: u32,
    pub completed_dates: BTreeSet<String>,
    pub created_at: String,
    pub color: String,
    /// Set once at creation for `HabitKind::Quit`.
    pub quit_date: Option<String>,
    pub money_saved_per_day: Option<f64>,
}

/// Caller-supplied fields for creating a habit.
///
/// The store fills id, timestamps and the zeroed streak state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    pub emoji: String,
    pub kind: HabitKind,
    pub frequency: Option<Vec<u8>>,
    pub color: String,
    pub quit_date: Option<String>,
    pub money_saved_per_day: Option<f64>,
}

impl Habit {
    /// Materializes a draft into a fresh habit with zeroed streak state.
    pub fn from_draft(draft: HabitDraft, created_at: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            emoji: draft.emoji,
            kind: draft.kind,
            frequency: draft.frequency,
            streak: 0,
            best_streak: 0,
            completed_dates: BTreeSet::new(),
            created_at,
            color: draft.color,
            quit_date: draft.quit_date,
            money_saved_per_day: draft.money_saved_per_day,
        }
    }

    /// Flips completion state for one calendar day.
    ///
    /// Returns `true` when the date became completed, `false` when it was
    /// removed. Maintains `best_streak >= streak >= 0`.
    pub fn toggle_date(&mut self, date: &str) -> bool {
        let newly_completed = if self.completed_dates.contains(date) {
            self.completed_dates.remove(date);
            self.streak = self.streak.saturating_sub(1);
            false
        } else {
            self.completed_dates.insert(date.to_string());
            self.streak += 1;
            true
        };

        self.best_streak = self.best_streak.max(self.streak);
        newly_completed
    }

    /// Drops the current streak to zero. `best_streak` is preserved.
    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{Habit, HabitDraft, HabitKind};

    fn draft(name: &str) -> HabitDraft {
        HabitDraft {
            name: name.to_string(),
            emoji: "📚".to_string(),
            kind: HabitKind::Daily,
            frequency: None,
            color: "#6366f1".to_string(),
            quit_date: None,
            money_saved_per_day: None,
        }
    }

    #[test]
    fn from_draft_zeroes_streak_state() {
        let habit = Habit::from_draft(draft("Read"), "2024-01-01T08:00:00Z".to_string());
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.best_streak, 0);
        assert!(habit.completed_dates.is_empty());
        assert!(!habit.id.is_nil());
    }

    #[test]
    fn toggle_twice_is_identity_on_dates_and_streak() {
        let mut habit = Habit::from_draft(draft("Read"), "2024-01-01T08:00:00Z".to_string());

        assert!(habit.toggle_date("2024-01-01"));
        assert_eq!(habit.streak, 1);
        assert!(habit.completed_dates.contains("2024-01-01"));

        assert!(!habit.toggle_date("2024-01-01"));
        assert_eq!(habit.streak, 0);
        assert!(habit.completed_dates.is_empty());
        // Best streak keeps the high-water mark.
        assert_eq!(habit.best_streak, 1);
    }

    #[test]
    fn best_streak_never_drops_below_streak() {
        let mut habit = Habit::from_draft(draft("Run"), "2024-01-01T08:00:00Z".to_string());
        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            habit.toggle_date(day);
        }
        habit.toggle_date("2024-01-02");
        assert_eq!(habit.streak, 2);
        assert_eq!(habit.best_streak, 3);
        assert!(habit.best_streak >= habit.streak);
    }

    #[test]
    fn reset_streak_keeps_best() {
        let mut habit = Habit::from_draft(draft("Run"), "2024-01-01T08:00:00Z".to_string());
        habit.toggle_date("2024-01-01");
        habit.toggle_date("2024-01-02");
        habit.reset_streak();
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.best_streak, 2);
    }
}
