//! Pomodoro focus models.
//!
//! # Responsibility
//! - Define completed timer sessions and the timer configuration.
//!
//! # Invariants
//! - Sessions are recorded only when an interval ends; partial intervals are
//!   never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Work,
    Break,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSession {
    pub id: Uuid,
    pub start_time: String,
    pub end_time: String,
    /// Interval length in minutes.
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSessionDraft {
    pub start_time: String,
    pub end_time: String,
    pub duration: u32,
    pub kind: SessionKind,
    pub completed: bool,
}

impl PomodoroSession {
    pub fn from_draft(draft: PomodoroSessionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_time: draft.start_time,
            end_time: draft.end_time,
            duration: draft.duration,
            kind: draft.kind,
            completed: draft.completed,
        }
    }

    /// Whether this session counts towards focus stats and XP.
    pub fn counts_as_work(&self) -> bool {
        self.kind == SessionKind::Work && self.completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    /// Minutes per work interval.
    pub work_duration: u32,
    pub break_duration: u32,
    pub long_break_duration: u32,
    pub sessions_until_long_break: u32,
    pub sound_enabled: bool,
    pub auto_start: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_duration: 25,
            break_duration: 5,
            long_break_duration: 15,
            sessions_until_long_break: 4,
            sound_enabled: true,
            auto_start: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettingsPatch {
    pub work_duration: Option<u32>,
    pub break_duration: Option<u32>,
    pub long_break_duration: Option<u32>,
    pub sessions_until_long_break: Option<u32>,
    pub sound_enabled: Option<bool>,
    pub auto_start: Option<bool>,
}

impl PomodoroSettings {
    pub fn apply_patch(&mut self, patch: PomodoroSettingsPatch) {
        if let Some(value) = patch.work_duration {
            self.work_duration = value;
        }
        if let Some(value) = patch.break_duration {
            self.break_duration = value;
        }
        if let Some(value) = patch.long_break_duration {
            self.long_break_duration = value;
        }
        if let Some(value) = patch.sessions_until_long_break {
            self.sessions_until_long_break = value;
        }
        if let Some(value) = patch.sound_enabled {
            self.sound_enabled = value;
        }
        if let Some(value) = patch.auto_start {
            self.auto_start = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PomodoroSession, PomodoroSessionDraft, SessionKind};

    #[test]
    fn only_completed_work_sessions_count() {
        let work = PomodoroSession::from_draft(PomodoroSessionDraft {
            start_time: "2024-01-01T09:00:00Z".to_string(),
            end_time: "2024-01-01T09:25:00Z".to_string(),
            duration: 25,
            kind: SessionKind::Work,
            completed: true,
        });
        assert!(work.counts_as_work());

        let rest = PomodoroSession::from_draft(PomodoroSessionDraft {
            start_time: "2024-01-01T09:25:00Z".to_string(),
            end_time: "2024-01-01T09:30:00Z".to_string(),
            duration: 5,
            kind: SessionKind::Break,
            completed: true,
        });
        assert!(!rest.counts_as_work());
    }
}
