//! Export, import and full reset.
//!
//! # Responsibility
//! - Serialize the mutable collections to a single JSON blob.
//! - Merge imported blobs shallowly: only fields present in the blob
//!   overwrite state; malformed input is logged and changes nothing.
//!
//! # Invariants
//! - Import never partially applies: the blob is parsed in full before any
//!   field is written.

use super::{AppState, Store};
use crate::model::finance::{
    Expense, FinanceCategory, FinanceSettings, IncomeSource, SavingsGoal,
};
use crate::model::focus::PomodoroSession;
use crate::model::habit::Habit;
use crate::model::profile::UserProfile;
use crate::model::task::Task;
use crate::model::wellness::{
    BreathingSession, JournalEntry, MoodEntry, SleepEntry, WaterEntry,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

/// The export wire shape: every section optional so partial blobs merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habits: Option<Vec<Habit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_settings: Option<FinanceSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<FinanceCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_sources: Option<Vec<IncomeSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses: Option<Vec<Expense>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_goals: Option<Vec<SavingsGoal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pomodoro_sessions: Option<Vec<PomodoroSession>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_entries: Option<Vec<WaterEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_entries: Option<Vec<SleepEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_entries: Option<Vec<MoodEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_entries: Option<Vec<JournalEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breathing_sessions: Option<Vec<BreathingSession>>,
}

impl ExportBundle {
    fn from_state(state: &AppState) -> Self {
        Self {
            profile: Some(state.profile.clone()),
            habits: Some(state.habits.clone()),
            tasks: Some(state.tasks.clone()),
            finance_settings: Some(state.finance_settings.clone()),
            categories: Some(state.categories.clone()),
            income_sources: Some(state.income_sources.clone()),
            expenses: Some(state.expenses.clone()),
            savings_goals: Some(state.savings_goals.clone()),
            pomodoro_sessions: Some(state.pomodoro_sessions.clone()),
            water_entries: Some(state.water_entries.clone()),
            sleep_entries: Some(state.sleep_entries.clone()),
            mood_entries: Some(state.mood_entries.clone()),
            journal_entries: Some(state.journal_entries.clone()),
            breathing_sessions: Some(state.breathing_sessions.clone()),
        }
    }

    fn apply_to(self, state: &mut AppState) {
        if let Some(profile) = self.profile {
            state.profile = profile;
        }
        if let Some(habits) = self.habits {
            state.habits = habits;
        }
        if let Some(tasks) = self.tasks {
            state.tasks = tasks;
        }
        if let Some(finance_settings) = self.finance_settings {
            state.finance_settings = finance_settings;
        }
        if let Some(categories) = self.categories {
            state.categories = categories;
        }
        if let Some(income_sources) = self.income_sources {
            state.income_sources = income_sources;
        }
        if let Some(expenses) = self.expenses {
            state.expenses = expenses;
        }
        if let Some(savings_goals) = self.savings_goals {
            state.savings_goals = savings_goals;
        }
        if let Some(pomodoro_sessions) = self.pomodoro_sessions {
            state.pomodoro_sessions = pomodoro_sessions;
        }
        if let Some(water_entries) = self.water_entries {
            state.water_entries = water_entries;
        }
        if let Some(sleep_entries) = self.sleep_entries {
            state.sleep_entries = sleep_entries;
        }
        if let Some(mood_entries) = self.mood_entries {
            state.mood_entries = mood_entries;
        }
        if let Some(journal_entries) = self.journal_entries {
            state.journal_entries = journal_entries;
        }
        if let Some(breathing_sessions) = self.breathing_sessions {
            state.breathing_sessions = breathing_sessions;
        }
    }
}

impl Store {
    /// Serializes the mutable collections to a pretty JSON blob.
    pub fn export_data(&self) -> String {
        let bundle = ExportBundle::from_state(self.state());
        match serde_json::to_string_pretty(&bundle) {
            Ok(blob) => blob,
            Err(err) => {
                error!("event=export_data module=store status=error error={err}");
                "{}".to_string()
            }
        }
    }

    /// Merges an exported blob back into state.
    ///
    /// Fields absent from the blob keep their current values. Malformed
    /// JSON is logged and leaves the state untouched.
    pub fn import_data(&mut self, raw: &str) {
        let bundle: ExportBundle = match serde_json::from_str(raw) {
            Ok(bundle) => bundle,
            Err(err) => {
                warn!("event=import_data module=store status=error error={err}");
                return;
            }
        };

        bundle.apply_to(self.state_mut());
        info!("event=import_data module=store status=ok");
    }

    /// Restores the initial defaults: fresh profile, empty collections,
    /// default categories, relocked achievement catalog.
    pub fn reset_all(&mut self) {
        let now = self.now_iso();
        let today = self.today();
        *self.state_mut() = AppState::initial(&now, &today);
        info!("event=reset_all module=store status=ok");
    }
}
