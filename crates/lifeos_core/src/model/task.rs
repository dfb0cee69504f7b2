//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its completion invariant.
//!
//! # Invariants
//! - `completed == completed_at.is_some()` at all times.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// XP granted when a task of this priority is completed.
    pub fn xp_reward(self) -> i64 {
        match self {
            Self::High => 30,
            Self::Medium => 20,
            Self::Low => 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub deadline: Option<String>,
    pub tags: Vec<String>,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub created_at: String,
}

/// Caller-supplied fields for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub deadline: Option<String>,
    pub tags: Vec<String>,
}

/// Updatable task fields.
///
/// Completion state is deliberately absent: it only changes through the
/// store's toggle operation so XP awards cannot be bypassed or duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub deadline: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

impl Task {
    pub fn from_draft(draft: TaskDraft, created_at: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            deadline: draft.deadline,
            tags: draft.tags,
            completed: false,
            completed_at: None,
            created_at,
        }
    }

    /// Applies a partial update, leaving completion state untouched.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}
