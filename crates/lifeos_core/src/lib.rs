//! Core domain logic for LifeOS, a local-first life tracker.
//! This crate is the single source of truth for business invariants:
//! habits, tasks, budgeting, focus sessions, wellness logs, XP/leveling,
//! achievements and derived statistics.

pub mod achievements;
pub mod clock;
pub mod date;
pub mod db;
pub mod logging;
pub mod model;
pub mod snapshot;
pub mod stats;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging};
pub use model::achievement::{Achievement, Requirement};
pub use model::finance::{
    CategoryDraft, Expense, ExpenseDraft, FinanceCategory, FinanceSettings, FinanceSettingsPatch,
    IncomeSource, IncomeSourceDraft, SavingsGoal, SavingsGoalDraft,
};
pub use model::focus::{
    PomodoroSession, PomodoroSessionDraft, PomodoroSettings, PomodoroSettingsPatch, SessionKind,
};
pub use model::habit::{Habit, HabitDraft, HabitKind};
pub use model::profile::{xp_for_level, ProfilePatch, Theme, UserProfile};
pub use model::quote::DailyQuote;
pub use model::task::{Priority, Task, TaskDraft, TaskPatch};
pub use model::wellness::{
    BreathingDraft, BreathingSession, BreathingTechnique, JournalDraft, JournalEntry, MoodDraft,
    MoodEntry, SleepDraft, SleepEntry, SleepFactor, SleepPatch, WaterEntry,
};
pub use snapshot::{SnapshotError, SnapshotRepository, SqliteSnapshotRepository, STORAGE_VERSION};
pub use store::{AppState, ExportBundle, Store};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
