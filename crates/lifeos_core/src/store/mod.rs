//! Single-writer state container over all entity collections.
//!
//! # Responsibility
//! - Own every entity collection plus profile and settings.
//! - Expose one operation per logical mutation, each keeping its entity
//!   invariants.
//! - Run the XP pipeline (award → leveling → achievement pass) after every
//!   XP-relevant mutation.
//!
//! # Invariants
//! - There is exactly one logical writer; operations are synchronous and
//!   ordered mutation → XP → achievement scan.
//! - Mutations against missing ids are no-ops, never errors.
//! - No XP trigger is skipped or double-applied: triggers are decided
//!   against pre-mutation state.

mod backup;
mod finance;
mod focus;
mod habits;
mod tasks;
mod wellness;

pub use backup::ExportBundle;

use crate::achievements;
use crate::clock::{Clock, SystemClock};
use crate::model::achievement::Achievement;
use crate::model::finance::{
    default_categories, Expense, FinanceCategory, FinanceSettings, IncomeSource, SavingsGoal,
};
use crate::model::focus::{PomodoroSession, PomodoroSettings};
use crate::model::habit::Habit;
use crate::model::profile::{ProfilePatch, UserProfile};
use crate::model::quote::{quote_for, DailyQuote};
use crate::model::task::Task;
use crate::model::wellness::{
    BreathingSession, JournalEntry, MoodEntry, SleepEntry, WaterEntry,
};
use log::info;
use serde::{Deserialize, Serialize};

pub(crate) const XP_HABIT_COMPLETED: i64 = 15;
pub(crate) const XP_WORK_POMODORO: i64 = 25;
pub(crate) const XP_WATER_GOAL_REACHED: i64 = 20;
pub(crate) const XP_QUALITY_SLEEP: i64 = 20;
pub(crate) const XP_JOURNAL_ENTRY: i64 = 30;
pub(crate) const XP_BREATHING_COMPLETED: i64 = 15;
pub(crate) const XP_DAILY_BONUS: i64 = 50;

/// The whole persisted domain state.
///
/// Collections own their entities exclusively; cross-references go through
/// ids. The struct serializes as one JSON document for snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub profile: UserProfile,
    pub habits: Vec<Habit>,
    pub tasks: Vec<Task>,
    pub finance_settings: FinanceSettings,
    pub categories: Vec<FinanceCategory>,
    pub income_sources: Vec<IncomeSource>,
    pub expenses: Vec<Expense>,
    pub savings_goals: Vec<SavingsGoal>,
    pub pomodoro_sessions: Vec<PomodoroSession>,
    pub pomodoro_settings: PomodoroSettings,
    pub water_entries: Vec<WaterEntry>,
    /// Daily water target in millilitres.
    pub water_goal: u32,
    pub sleep_entries: Vec<SleepEntry>,
    /// Nightly sleep target in minutes.
    pub sleep_goal: u32,
    pub mood_entries: Vec<MoodEntry>,
    pub journal_entries: Vec<JournalEntry>,
    pub breathing_sessions: Vec<BreathingSession>,
    pub achievements: Vec<Achievement>,
    pub daily_quote: DailyQuote,
}

impl AppState {
    /// Fresh defaults: empty collections, default finance categories, the
    /// full locked achievement catalog and today's quote.
    pub fn initial(now_iso: &str, today: &str) -> Self {
        Self {
            profile: UserProfile::fresh(now_iso.to_string()),
            habits: Vec::new(),
            tasks: Vec::new(),
            finance_settings: FinanceSettings::default(),
            categories: default_categories(),
            income_sources: Vec::new(),
            expenses: Vec::new(),
            savings_goals: Vec::new(),
            pomodoro_sessions: Vec::new(),
            pomodoro_settings: PomodoroSettings::default(),
            water_entries: Vec::new(),
            water_goal: 2000,
            sleep_entries: Vec::new(),
            sleep_goal: 480,
            mood_entries: Vec::new(),
            journal_entries: Vec::new(),
            breathing_sessions: Vec::new(),
            achievements: achievements::default_catalog(),
            daily_quote: quote_for(today),
        }
    }
}

/// The state container: owns the state and a clock, exposes mutations.
///
/// Constructed explicitly and passed where needed; there is no ambient
/// global instance, so tests build as many independent stores as they like.
pub struct Store {
    state: AppState,
    clock: Box<dyn Clock>,
}

impl Store {
    /// Creates a store with fresh default state and the given clock.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        let state = AppState::initial(&clock.now_iso(), &clock.today());
        Self { state, clock }
    }

    /// Production constructor using the system clock.
    pub fn with_system_clock() -> Self {
        Self::new(Box::new(SystemClock))
    }

    /// Rehydrates a store from previously persisted state.
    pub fn from_state(state: AppState, clock: Box<dyn Clock>) -> Self {
        Self { state, clock }
    }

    /// Read access to the whole state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn now_iso(&self) -> String {
        self.clock.now_iso()
    }

    pub(crate) fn today(&self) -> String {
        self.clock.today()
    }

    pub(crate) fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Grants XP and runs the achievement pipeline to fixpoint.
    ///
    /// Unlock rewards feed back into leveling; the loop terminates because
    /// unlocking is monotone and progress never depends on XP itself.
    pub fn add_xp(&mut self, amount: i64) {
        let now = self.now_iso();
        self.state.profile.grant_xp(amount);
        info!(
            "event=xp_award module=store status=ok amount={} level={} total_xp={}",
            amount, self.state.profile.level, self.state.profile.total_xp
        );

        loop {
            let reward = achievements::evaluate(&mut self.state, &now);
            if reward == 0 {
                break;
            }
            self.state.profile.grant_xp(reward);
        }
    }

    /// Claims the once-per-day bonus: +50 XP and a bonus-streak increment.
    ///
    /// Re-claiming on the same calendar day is a no-op.
    pub fn claim_daily_bonus(&mut self) {
        let today = self.today();
        if self.state.profile.daily_bonus_claimed.as_deref() == Some(today.as_str()) {
            return;
        }

        self.state.profile.daily_bonus_claimed = Some(today);
        self.state.profile.streak += 1;
        info!(
            "event=daily_bonus_claimed module=store status=ok streak={}",
            self.state.profile.streak
        );
        self.add_xp(XP_DAILY_BONUS);
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.state.profile.apply_patch(patch);
    }

    /// Replaces the cached quote once per calendar day.
    pub fn refresh_quote(&mut self) {
        let today = self.today();
        if self.state.daily_quote.date == today {
            return;
        }
        self.state.daily_quote = quote_for(&today);
    }
}
