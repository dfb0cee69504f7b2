//! Wellness domain models: water, sleep, mood, journal, breathing.
//!
//! # Responsibility
//! - Define the daily wellbeing logs consumed by stats and achievements.
//!
//! # Invariants
//! - Sleep duration is derived from bed/wake times with overnight wraparound.
//! - Mood, energy and sleep quality are clamped to the 1..=5 scale.
//! - Mood and water logs are append-only in the current scope.

use crate::date::sleep_duration_minutes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn clamp_scale(value: u8) -> u8 {
    value.clamp(1, 5)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub id: Uuid,
    /// Millilitres.
    pub amount: u32,
    pub time: String,
    /// Calendar-day bucket used by aggregates.
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepFactor {
    Caffeine,
    Exercise,
    Screen,
    Stress,
    Alcohol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub id: Uuid,
    pub date: String,
    /// `HH:MM` wall-clock time of going to bed.
    pub bed_time: String,
    pub wake_time: String,
    /// Minutes asleep, derived from bed/wake times.
    pub duration: u32,
    /// 1 (poor) to 5 (excellent).
    pub quality: u8,
    pub notes: Option<String>,
    pub factors: Vec<SleepFactor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepDraft {
    pub date: String,
    pub bed_time: String,
    pub wake_time: String,
    pub quality: u8,
    pub notes: Option<String>,
    pub factors: Vec<SleepFactor>,
}

/// Updatable sleep entry fields. Duration is recomputed by the store when
/// either wall-clock time changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepPatch {
    pub bed_time: Option<String>,
    pub wake_time: Option<String>,
    pub quality: Option<u8>,
    pub notes: Option<Option<String>>,
    pub factors: Option<Vec<SleepFactor>>,
}

impl SleepEntry {
    pub fn from_draft(draft: SleepDraft) -> Self {
        let duration = sleep_duration_minutes(&draft.bed_time, &draft.wake_time);
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            bed_time: draft.bed_time,
            wake_time: draft.wake_time,
            duration,
            quality: clamp_scale(draft.quality),
            notes: draft.notes,
            factors: draft.factors,
        }
    }

    pub fn apply_patch(&mut self, patch: SleepPatch) {
        let times_changed = patch.bed_time.is_some() || patch.wake_time.is_some();
        if let Some(bed_time) = patch.bed_time {
            self.bed_time = bed_time;
        }
        if let Some(wake_time) = patch.wake_time {
            self.wake_time = wake_time;
        }
        if times_changed {
            self.duration = sleep_duration_minutes(&self.bed_time, &self.wake_time);
        }
        if let Some(quality) = patch.quality {
            self.quality = clamp_scale(quality);
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(factors) = patch.factors {
            self.factors = factors;
        }
    }

    /// Whether this night counts as restful for XP and achievements.
    pub fn is_good_quality(&self) -> bool {
        self.quality >= 4
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub date: String,
    pub time: String,
    /// 1 (terrible) to 5 (amazing).
    pub mood: u8,
    pub energy: u8,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDraft {
    pub mood: u8,
    pub energy: u8,
    pub note: Option<String>,
}

impl MoodEntry {
    pub fn from_draft(draft: MoodDraft, date: String, time: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            time,
            mood: clamp_scale(draft.mood),
            energy: clamp_scale(draft.energy),
            note: draft.note,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: String,
    pub gratitude: Vec<String>,
    pub highlights: String,
    pub improvements: String,
    pub mood: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalDraft {
    pub date: String,
    pub gratitude: Vec<String>,
    pub highlights: String,
    pub improvements: String,
    pub mood: u8,
}

impl JournalEntry {
    pub fn from_draft(draft: JournalDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            gratitude: draft.gratitude,
            highlights: draft.highlights,
            improvements: draft.improvements,
            mood: clamp_scale(draft.mood),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreathingTechnique {
    #[serde(rename = "box")]
    Box,
    #[serde(rename = "478")]
    FourSevenEight,
    #[serde(rename = "calm")]
    Calm,
    #[serde(rename = "energize")]
    Energize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingSession {
    pub id: Uuid,
    pub date: String,
    pub technique: BreathingTechnique,
    /// Seconds spent breathing.
    pub duration: u32,
    /// A run counts as completed once at least three cycles were finished.
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingDraft {
    pub date: String,
    pub technique: BreathingTechnique,
    pub duration: u32,
    pub completed: bool,
}

impl BreathingSession {
    pub fn from_draft(draft: BreathingDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            technique: draft.technique,
            duration: draft.duration,
            completed: draft.completed,
        }
    }
}
