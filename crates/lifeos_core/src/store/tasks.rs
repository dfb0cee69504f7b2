//! Task mutations.
//!
//! # Responsibility
//! - Create, toggle, patch and delete tasks.
//! - Keep `completed == completed_at.is_some()` and award priority-tiered XP
//!   on the incomplete → complete transition only.

use super::Store;
use crate::model::task::{Task, TaskDraft, TaskPatch};
use log::info;
use uuid::Uuid;

impl Store {
    pub fn add_task(&mut self, draft: TaskDraft) -> Uuid {
        let task = Task::from_draft(draft, self.now_iso());
        let id = task.id;
        info!(
            "event=task_add module=store status=ok id={} priority={:?}",
            id, task.priority
        );
        self.state_mut().tasks.push(task);
        id
    }

    /// Flips completion state. Completing sets `completed_at` and awards
    /// XP by priority; un-completing clears the timestamp without clawing
    /// XP back. Unknown ids are a no-op.
    pub fn toggle_task(&mut self, id: Uuid) {
        let now = self.now_iso();
        let mut award = None;

        if let Some(task) = self.state_mut().tasks.iter_mut().find(|t| t.id == id) {
            if task.completed {
                task.completed = false;
                task.completed_at = None;
            } else {
                task.completed = true;
                task.completed_at = Some(now);
                award = Some(task.priority.xp_reward());
            }
            info!(
                "event=task_toggle module=store status=ok id={} completed={}",
                id, task.completed
            );
        }

        if let Some(xp) = award {
            self.add_xp(xp);
        }
    }

    /// Applies a partial update; completion state is not patchable.
    pub fn update_task(&mut self, id: Uuid, patch: TaskPatch) {
        if let Some(task) = self.state_mut().tasks.iter_mut().find(|t| t.id == id) {
            task.apply_patch(patch);
        }
    }

    pub fn delete_task(&mut self, id: Uuid) {
        self.state_mut().tasks.retain(|t| t.id != id);
    }
}
