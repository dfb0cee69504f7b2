//! Wellness mutations: water, sleep, mood, journal, breathing.
//!
//! # Responsibility
//! - Append wellbeing log entries and award their XP triggers.
//! - Detect the daily water-goal crossing against pre-mutation state so the
//!   award fires exactly once per day.

use super::{
    Store, XP_BREATHING_COMPLETED, XP_JOURNAL_ENTRY, XP_QUALITY_SLEEP, XP_WATER_GOAL_REACHED,
};
use crate::model::wellness::{
    BreathingDraft, BreathingSession, JournalDraft, JournalEntry, MoodDraft, MoodEntry,
    SleepDraft, SleepEntry, SleepPatch, WaterEntry,
};
use log::info;
use uuid::Uuid;

impl Store {
    /// Logs a water intake for today.
    ///
    /// Awards XP when this entry is the one that first pushes today's total
    /// across the goal; later entries the same day award nothing.
    pub fn add_water_entry(&mut self, amount: u32) -> Uuid {
        let today = self.today();
        let time = self.now_iso();

        let state = self.state_mut();
        let previous_total: u64 = state
            .water_entries
            .iter()
            .filter(|entry| entry.date == today)
            .map(|entry| u64::from(entry.amount))
            .sum();
        let goal = u64::from(state.water_goal);
        let crossed_goal =
            previous_total < goal && previous_total + u64::from(amount) >= goal;

        let entry = WaterEntry {
            id: Uuid::new_v4(),
            amount,
            time,
            date: today,
        };
        let id = entry.id;
        state.water_entries.push(entry);

        if crossed_goal {
            info!("event=water_goal_reached module=store status=ok amount={}", amount);
            self.add_xp(XP_WATER_GOAL_REACHED);
        }
        id
    }

    pub fn set_water_goal(&mut self, goal: u32) {
        self.state_mut().water_goal = goal;
    }

    /// Logs a night of sleep; good quality (4+) earns XP.
    pub fn add_sleep_entry(&mut self, draft: SleepDraft) -> Uuid {
        let entry = SleepEntry::from_draft(draft);
        let id = entry.id;
        let good_quality = entry.is_good_quality();
        info!(
            "event=sleep_add module=store status=ok id={} duration={} quality={}",
            id, entry.duration, entry.quality
        );
        self.state_mut().sleep_entries.push(entry);

        if good_quality {
            self.add_xp(XP_QUALITY_SLEEP);
        }
        id
    }

    /// Patches a sleep entry; no XP implications even if quality rises.
    pub fn update_sleep_entry(&mut self, id: Uuid, patch: SleepPatch) {
        if let Some(entry) = self.state_mut().sleep_entries.iter_mut().find(|s| s.id == id) {
            entry.apply_patch(patch);
        }
    }

    pub fn set_sleep_goal(&mut self, goal: u32) {
        self.state_mut().sleep_goal = goal;
    }

    /// Appends a mood check-in. No XP trigger.
    pub fn add_mood_entry(&mut self, draft: MoodDraft) -> Uuid {
        let entry = MoodEntry::from_draft(draft, self.today(), self.now_iso());
        let id = entry.id;
        self.state_mut().mood_entries.push(entry);
        id
    }

    /// Appends a journal entry; always earns XP.
    pub fn add_journal_entry(&mut self, draft: JournalDraft) -> Uuid {
        let entry = JournalEntry::from_draft(draft);
        let id = entry.id;
        self.state_mut().journal_entries.push(entry);
        self.add_xp(XP_JOURNAL_ENTRY);
        id
    }

    /// Records a finished breathing run; completed runs earn XP.
    pub fn add_breathing_session(&mut self, draft: BreathingDraft) -> Uuid {
        let session = BreathingSession::from_draft(draft);
        let id = session.id;
        let completed = session.completed;
        self.state_mut().breathing_sessions.push(session);

        if completed {
            self.add_xp(XP_BREATHING_COMPLETED);
        }
        id
    }
}
