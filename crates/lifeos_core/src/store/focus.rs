//! Focus timer mutations.
//!
//! # Responsibility
//! - Record naturally completed pomodoro intervals and patch timer settings.
//! - Award XP for completed work intervals only.

use super::{Store, XP_WORK_POMODORO};
use crate::model::focus::{PomodoroSession, PomodoroSessionDraft, PomodoroSettingsPatch};
use log::info;
use uuid::Uuid;

impl Store {
    /// Records a finished timer interval.
    ///
    /// Callers only invoke this when an interval ran to its natural end;
    /// partial intervals are never recorded.
    pub fn add_pomodoro_session(&mut self, draft: PomodoroSessionDraft) -> Uuid {
        let session = PomodoroSession::from_draft(draft);
        let id = session.id;
        let earns_xp = session.counts_as_work();
        info!(
            "event=pomodoro_add module=store status=ok id={} kind={:?} duration={}",
            id, session.kind, session.duration
        );
        self.state_mut().pomodoro_sessions.push(session);

        if earns_xp {
            self.add_xp(XP_WORK_POMODORO);
        }
        id
    }

    pub fn update_pomodoro_settings(&mut self, patch: PomodoroSettingsPatch) {
        self.state_mut().pomodoro_settings.apply_patch(patch);
    }
}
