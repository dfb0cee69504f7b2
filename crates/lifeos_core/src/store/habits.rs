//! Habit mutations.
//!
//! # Responsibility
//! - Create, toggle, reset and delete habits.
//! - Award completion XP exactly once per newly completed date.

use super::{Store, XP_HABIT_COMPLETED};
use crate::model::habit::{Habit, HabitDraft};
use log::info;
use uuid::Uuid;

impl Store {
    /// Creates a habit from a draft and returns its id.
    pub fn add_habit(&mut self, draft: HabitDraft) -> Uuid {
        let habit = Habit::from_draft(draft, self.now_iso());
        let id = habit.id;
        info!(
            "event=habit_add module=store status=ok id={} kind={:?}",
            id, habit.kind
        );
        self.state_mut().habits.push(habit);
        id
    }

    /// Toggles completion of one habit for one calendar day.
    ///
    /// Toggling to completed awards XP; toggling back off does not claw it
    /// back. Unknown ids are a no-op.
    pub fn toggle_habit(&mut self, id: Uuid, date: &str) {
        let Some(habit) = self.state_mut().habits.iter_mut().find(|h| h.id == id) else {
            return;
        };

        let newly_completed = habit.toggle_date(date);
        info!(
            "event=habit_toggle module=store status=ok id={} date={} completed={} streak={}",
            id, date, newly_completed, habit.streak
        );

        if newly_completed {
            self.add_xp(XP_HABIT_COMPLETED);
        }
    }

    /// Drops a habit's current streak to zero, keeping its best streak.
    pub fn reset_habit_streak(&mut self, id: Uuid) {
        if let Some(habit) = self.state_mut().habits.iter_mut().find(|h| h.id == id) {
            habit.reset_streak();
        }
    }

    /// Removes a habit. Unknown ids are a no-op.
    pub fn delete_habit(&mut self, id: Uuid) {
        self.state_mut().habits.retain(|h| h.id != id);
    }
}
