//! Derived statistics over the entity collections.
//!
//! # Responsibility
//! - Compute daily snapshots, rolling series and the discipline index as
//!   pure functions; nothing here caches or mutates.
//!
//! # Invariants
//! - Every ratio is guarded: empty collections and zero goals yield 0,
//!   never NaN or infinity.
//! - Series recompute each day independently by a full scan; acceptable at
//!   personal-scale data volumes.

use crate::date::{is_on_day, last_n_days};
use crate::model::finance::FinanceSettings;
use crate::store::AppState;
use serde::Serialize;

/// All per-day aggregates a dashboard needs for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySnapshot {
    pub date: String,
    pub habits_completed: usize,
    pub habits_total: usize,
    pub tasks_completed: usize,
    pub pomodoro_minutes: u32,
    pub water_ml: u32,
    pub sleep_minutes: u32,
    pub sleep_quality: u8,
    /// Average of the day's mood check-ins, 0 when there are none.
    pub mood: f64,
    pub energy: f64,
}

/// One point of a rolling series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// Monthly income split into the four allocation buckets, in currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceAllocations {
    pub investment: f64,
    pub savings: f64,
    pub expenses: f64,
    pub emergency: f64,
}

/// Recomputes every aggregate for one calendar day from scratch.
pub fn daily_snapshot(state: &AppState, date: &str) -> DailySnapshot {
    let habits_completed = state
        .habits
        .iter()
        .filter(|habit| habit.completed_dates.contains(date))
        .count();

    let tasks_completed = tasks_completed_on(state, date);

    let pomodoro_minutes = state
        .pomodoro_sessions
        .iter()
        .filter(|session| session.counts_as_work() && is_on_day(&session.start_time, date))
        .map(|session| session.duration)
        .sum();

    let water_ml = water_on(state, date);

    let sleep = state.sleep_entries.iter().find(|entry| entry.date == date);

    let day_moods: Vec<_> = state
        .mood_entries
        .iter()
        .filter(|entry| entry.date == date)
        .collect();
    let mood_count = day_moods.len() as f64;
    let (mood, energy) = if day_moods.is_empty() {
        (0.0, 0.0)
    } else {
        (
            day_moods.iter().map(|m| f64::from(m.mood)).sum::<f64>() / mood_count,
            day_moods.iter().map(|m| f64::from(m.energy)).sum::<f64>() / mood_count,
        )
    };

    DailySnapshot {
        date: date.to_string(),
        habits_completed,
        habits_total: state.habits.len(),
        tasks_completed,
        pomodoro_minutes,
        water_ml,
        sleep_minutes: sleep.map_or(0, |entry| entry.duration),
        sleep_quality: sleep.map_or(0, |entry| entry.quality),
        mood,
        energy,
    }
}

/// Habit completion percentage (0-100) per day over the window ending at
/// `end` inclusive.
pub fn habit_series(state: &AppState, end: &str, days: u32) -> Vec<SeriesPoint> {
    last_n_days(end, days)
        .into_iter()
        .map(|date| {
            let value = if state.habits.is_empty() {
                0.0
            } else {
                let completed = state
                    .habits
                    .iter()
                    .filter(|habit| habit.completed_dates.contains(date.as_str()))
                    .count();
                completed as f64 / state.habits.len() as f64 * 100.0
            };
            SeriesPoint { date, value }
        })
        .collect()
}

/// Completed work-pomodoro minutes per day.
pub fn pomodoro_series(state: &AppState, end: &str, days: u32) -> Vec<SeriesPoint> {
    last_n_days(end, days)
        .into_iter()
        .map(|date| {
            let minutes: u32 = state
                .pomodoro_sessions
                .iter()
                .filter(|session| session.counts_as_work() && is_on_day(&session.start_time, &date))
                .map(|session| session.duration)
                .sum();
            SeriesPoint {
                date,
                value: f64::from(minutes),
            }
        })
        .collect()
}

/// Water millilitres per day.
pub fn water_series(state: &AppState, end: &str, days: u32) -> Vec<SeriesPoint> {
    last_n_days(end, days)
        .into_iter()
        .map(|date| {
            let total = water_on(state, &date);
            SeriesPoint {
                date,
                value: f64::from(total),
            }
        })
        .collect()
}

/// 28-day consistency heatmap scores.
///
/// Per day: `habit_ratio * 0.4 + min(1, tasks/5) * 0.3 + water_ratio * 0.3`
/// scaled to 0-100, where `water_ratio` is capped at 1.
pub fn consistency_series(state: &AppState, end: &str) -> Vec<SeriesPoint> {
    last_n_days(end, 28)
        .into_iter()
        .map(|date| {
            let habit_ratio = if state.habits.is_empty() {
                0.0
            } else {
                let completed = state
                    .habits
                    .iter()
                    .filter(|habit| habit.completed_dates.contains(date.as_str()))
                    .count();
                completed as f64 / state.habits.len() as f64
            };

            let task_ratio = (tasks_completed_on(state, &date) as f64 / 5.0).min(1.0);

            let water_ratio = if state.water_goal == 0 {
                0.0
            } else {
                (f64::from(water_on(state, &date)) / f64::from(state.water_goal)).min(1.0)
            };

            let score = (habit_ratio * 0.4 + task_ratio * 0.3 + water_ratio * 0.3) * 100.0;
            SeriesPoint {
                date,
                value: score.round(),
            }
        })
        .collect()
}

/// Composite 0-100 discipline score for one day.
///
/// Policy: sub-scores whose data source is absent are excluded from the
/// denominator entirely (they are not averaged in as zero). Included
/// sub-scores:
/// - habit completion percentage, when at least one habit exists;
/// - `min(100, tasks_completed_today * 25)`, when at least one task exists;
/// - water percentage capped at 100, always;
/// - `sleep_quality * 20`, when the day has a sleep entry.
///
/// An empty score set yields 0.
pub fn discipline_index(state: &AppState, date: &str) -> u32 {
    let mut scores: Vec<f64> = Vec::new();

    if !state.habits.is_empty() {
        let completed = state
            .habits
            .iter()
            .filter(|habit| habit.completed_dates.contains(date))
            .count();
        scores.push(completed as f64 / state.habits.len() as f64 * 100.0);
    }

    if !state.tasks.is_empty() {
        let completed = tasks_completed_on(state, date);
        scores.push((completed as f64 * 25.0).min(100.0));
    }

    let water_score = if state.water_goal == 0 {
        0.0
    } else {
        (f64::from(water_on(state, date)) / f64::from(state.water_goal) * 100.0).min(100.0)
    };
    scores.push(water_score);

    if let Some(sleep) = state.sleep_entries.iter().find(|entry| entry.date == date) {
        scores.push(f64::from(sleep.quality) * 20.0);
    }

    if scores.is_empty() {
        return 0;
    }
    (scores.iter().sum::<f64>() / scores.len() as f64).round() as u32
}

/// Splits monthly income across the four allocation buckets.
pub fn finance_allocations(settings: &FinanceSettings) -> FinanceAllocations {
    let bucket = |percent: f64| settings.monthly_income * percent / 100.0;
    FinanceAllocations {
        investment: bucket(settings.investment_percent),
        savings: bucket(settings.savings_percent),
        expenses: bucket(settings.expenses_percent),
        emergency: bucket(settings.emergency_percent),
    }
}

fn tasks_completed_on(state: &AppState, date: &str) -> usize {
    state
        .tasks
        .iter()
        .filter(|task| {
            task.completed_at
                .as_deref()
                .map(|at| is_on_day(at, date))
                .unwrap_or(false)
        })
        .count()
}

fn water_on(state: &AppState, date: &str) -> u32 {
    state
        .water_entries
        .iter()
        .filter(|entry| entry.date == date)
        .map(|entry| entry.amount)
        .sum()
}
