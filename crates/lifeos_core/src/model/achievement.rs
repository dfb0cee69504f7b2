//! Achievement records and requirement kinds.
//!
//! # Responsibility
//! - Define the unlockable achievement record.
//! - Enumerate the aggregate formulas that gate unlocks, so dispatch stays
//!   exhaustive at compile time.
//!
//! # Invariants
//! - `unlocked_at`, once set, is never cleared or re-evaluated.
//! - `progress` may recompute freely while an achievement stays locked.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate formula gating an achievement's unlock.
///
/// Each variant names a computation over one entity collection; the
/// evaluator matches exhaustively, so adding a variant without a formula is
/// a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Total completed dates across all habits.
    HabitCompletions,
    /// Highest current streak across all habits.
    HabitStreak,
    /// Count of completed tasks.
    TasksCompleted,
    /// Total minutes of completed work pomodoros.
    PomodoroMinutes,
    /// Distinct days with summed water intake at or above the goal.
    WaterGoalDays,
    /// Sum of all savings-goal current amounts.
    SavingsTotal,
    /// Count of sleep entries with quality 4 or 5.
    QualitySleepNights,
    /// Count of completed breathing sessions.
    BreathingSessions,
    /// Count of journal entries.
    JournalEntries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub xp_reward: i64,
    pub requirement: Requirement,
    pub target: f64,
    pub progress: f64,
    /// Timestamp of the unlock; monotonic once set.
    pub unlocked_at: Option<String>,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}
