//! Achievement catalog and unlock evaluator.
//!
//! # Responsibility
//! - Seed the fixed achievement catalog.
//! - Recompute progress for locked achievements and flip unlocks exactly once.
//!
//! # Invariants
//! - Unlocking is monotonic: an unlocked achievement is skipped by every
//!   later pass, even if its aggregate would recompute below target.
//! - Progress formulas read entity collections only, never profile XP, so an
//!   evaluation pass cannot unlock further achievements by itself.

use crate::model::achievement::{Achievement, Requirement};
use crate::store::AppState;
use log::info;
use std::collections::BTreeMap;
use uuid::Uuid;

/// The ten achievements a fresh state starts with.
pub fn default_catalog() -> Vec<Achievement> {
    let seed: [(&str, &str, &str, i64, Requirement, f64); 10] = [
        (
            "Первые шаги",
            "Выполни первую привычку",
            "👣",
            50,
            Requirement::HabitCompletions,
            1.0,
        ),
        (
            "На неделе",
            "7-дневная серия привычек",
            "🔥",
            200,
            Requirement::HabitStreak,
            7.0,
        ),
        (
            "Месяц силы",
            "30-дневная серия",
            "💪",
            500,
            Requirement::HabitStreak,
            30.0,
        ),
        (
            "Мастер задач",
            "Выполни 50 задач",
            "✅",
            300,
            Requirement::TasksCompleted,
            50.0,
        ),
        (
            "Фокус-мастер",
            "10 часов в Pomodoro",
            "🎯",
            400,
            Requirement::PomodoroMinutes,
            600.0,
        ),
        (
            "Водный баланс",
            "7 дней с нормой воды",
            "💧",
            150,
            Requirement::WaterGoalDays,
            7.0,
        ),
        (
            "Финансовый гуру",
            "Накопи 100,000₽",
            "💰",
            1000,
            Requirement::SavingsTotal,
            100_000.0,
        ),
        (
            "Сонное царство",
            "7 дней качественного сна",
            "😴",
            200,
            Requirement::QualitySleepNights,
            7.0,
        ),
        (
            "Дзен мастер",
            "10 сессий дыхания",
            "🧘",
            150,
            Requirement::BreathingSessions,
            10.0,
        ),
        (
            "Писатель",
            "7 записей в дневнике",
            "📝",
            200,
            Requirement::JournalEntries,
            7.0,
        ),
    ];

    seed.into_iter()
        .map(
            |(name, description, emoji, xp_reward, requirement, target)| Achievement {
                id: Uuid::new_v4(),
                name: name.to_string(),
                description: description.to_string(),
                emoji: emoji.to_string(),
                xp_reward,
                requirement,
                target,
                progress: 0.0,
                unlocked_at: None,
            },
        )
        .collect()
}

/// Computes current progress for a requirement against the live state.
pub fn progress_for(state: &AppState, requirement: Requirement) -> f64 {
    match requirement {
        Requirement::HabitCompletions => state
            .habits
            .iter()
            .map(|habit| habit.completed_dates.len())
            .sum::<usize>() as f64,
        Requirement::HabitStreak => state
            .habits
            .iter()
            .map(|habit| habit.streak)
            .max()
            .unwrap_or(0) as f64,
        Requirement::TasksCompleted => {
            state.tasks.iter().filter(|task| task.completed).count() as f64
        }
        Requirement::PomodoroMinutes => state
            .pomodoro_sessions
            .iter()
            .filter(|session| session.counts_as_work())
            .map(|session| u64::from(session.duration))
            .sum::<u64>() as f64,
        Requirement::WaterGoalDays => days_at_water_goal(state) as f64,
        Requirement::SavingsTotal => state
            .savings_goals
            .iter()
            .map(|goal| goal.current_amount)
            .sum(),
        Requirement::QualitySleepNights => state
            .sleep_entries
            .iter()
            .filter(|entry| entry.is_good_quality())
            .count() as f64,
        Requirement::BreathingSessions => state
            .breathing_sessions
            .iter()
            .filter(|session| session.completed)
            .count() as f64,
        Requirement::JournalEntries => state.journal_entries.len() as f64,
    }
}

fn days_at_water_goal(state: &AppState) -> usize {
    if state.water_goal == 0 {
        return 0;
    }

    let mut per_day: BTreeMap<&str, u64> = BTreeMap::new();
    for entry in &state.water_entries {
        *per_day.entry(entry.date.as_str()).or_default() += u64::from(entry.amount);
    }

    per_day
        .values()
        .filter(|total| **total >= u64::from(state.water_goal))
        .count()
}

/// Runs one evaluator pass over all locked achievements.
///
/// Refreshes `progress` for every locked achievement, stamps `unlocked_at`
/// on those that crossed their target, and returns the summed XP rewards of
/// the newly unlocked ones. Already-unlocked achievements are never touched.
pub fn evaluate(state: &mut AppState, now_iso: &str) -> i64 {
    let snapshot: &AppState = &*state;
    let refreshed: Vec<(usize, f64)> = snapshot
        .achievements
        .iter()
        .enumerate()
        .filter(|(_, achievement)| !achievement.is_unlocked())
        .map(|(index, achievement)| (index, progress_for(snapshot, achievement.requirement)))
        .collect();

    let mut awarded = 0;
    for (index, progress) in refreshed {
        let achievement = &mut state.achievements[index];
        achievement.progress = progress;
        if progress >= achievement.target {
            achievement.unlocked_at = Some(now_iso.to_string());
            awarded += achievement.xp_reward;
            info!(
                "event=achievement_unlocked module=achievements status=ok id={} name={} reward={}",
                achievement.id, achievement.name, achievement.xp_reward
            );
        }
    }

    awarded
}
