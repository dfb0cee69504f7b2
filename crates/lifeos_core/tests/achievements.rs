use lifeos_core::{
    Achievement, FixedClock, HabitDraft, HabitKind, JournalDraft, PomodoroSessionDraft, Priority,
    SavingsGoalDraft, SessionKind, Store, TaskDraft,
};

fn store_at(now_iso: &str) -> Store {
    Store::new(Box::new(FixedClock::new(now_iso)))
}

fn by_name<'a>(store: &'a Store, name: &str) -> &'a Achievement {
    store
        .state()
        .achievements
        .iter()
        .find(|a| a.name == name)
        .unwrap()
}

fn habit() -> HabitDraft {
    HabitDraft {
        name: "Meditate".to_string(),
        emoji: "🧘".to_string(),
        kind: HabitKind::Daily,
        frequency: None,
        color: "#8b5cf6".to_string(),
        quit_date: None,
        money_saved_per_day: None,
    }
}

fn journal(date: &str) -> JournalDraft {
    JournalDraft {
        date: date.to_string(),
        gratitude: vec!["кофе".to_string()],
        highlights: "good day".to_string(),
        improvements: "sleep earlier".to_string(),
        mood: 4,
    }
}

#[test]
fn fresh_state_seeds_ten_locked_achievements() {
    let store = store_at("2024-01-01T08:00:00Z");
    let achievements = &store.state().achievements;

    assert_eq!(achievements.len(), 10);
    assert!(achievements.iter().all(|a| !a.is_unlocked()));
    assert!(achievements.iter().all(|a| a.progress == 0.0));
}

#[test]
fn seven_day_streak_unlocks_the_week_badge() {
    let clock = FixedClock::new("2024-01-01T08:00:00Z");
    let mut store = Store::new(Box::new(clock.clone()));
    let id = store.add_habit(habit());

    for day in 1..=7 {
        clock.set(format!("2024-01-{day:02}T08:00:00Z"));
        store.toggle_habit(id, &format!("2024-01-{day:02}"));
    }

    let week = by_name(&store, "На неделе");
    assert!(week.is_unlocked());
    assert_eq!(week.unlocked_at.as_deref(), Some("2024-01-07T08:00:00Z"));

    // 7 completions, the first-completion reward and the streak reward.
    assert_eq!(store.state().profile.total_xp, 7 * 15 + 50 + 200);
    assert!(!by_name(&store, "Месяц силы").is_unlocked());
}

#[test]
fn fifty_completed_tasks_unlock_the_task_master() {
    let mut store = store_at("2024-01-01T08:00:00Z");

    for n in 0..50 {
        let id = store.add_task(TaskDraft {
            title: format!("Task {n}"),
            description: None,
            priority: Priority::Low,
            deadline: None,
            tags: Vec::new(),
        });
        store.toggle_task(id);
    }

    assert!(by_name(&store, "Мастер задач").is_unlocked());
    assert_eq!(store.state().profile.total_xp, 50 * 10 + 300);
}

#[test]
fn ten_focus_hours_unlock_the_focus_master() {
    let mut store = store_at("2024-01-01T08:00:00Z");

    for _ in 0..24 {
        store.add_pomodoro_session(PomodoroSessionDraft {
            start_time: "2024-01-01T09:00:00Z".to_string(),
            end_time: "2024-01-01T09:25:00Z".to_string(),
            duration: 25,
            kind: SessionKind::Work,
            completed: true,
        });
    }

    let focus = by_name(&store, "Фокус-мастер");
    assert!(focus.is_unlocked());
    assert_eq!(store.state().profile.total_xp, 24 * 25 + 400);
}

#[test]
fn seven_days_at_water_goal_unlock_the_water_badge() {
    let clock = FixedClock::new("2024-01-01T08:00:00Z");
    let mut store = Store::new(Box::new(clock.clone()));

    for day in 1..=7 {
        clock.set(format!("2024-01-{day:02}T08:00:00Z"));
        store.add_water_entry(2_000);
    }

    assert!(by_name(&store, "Водный баланс").is_unlocked());
    // One goal crossing per day plus the badge reward.
    assert_eq!(store.state().profile.total_xp, 7 * 20 + 150);
}

#[test]
fn savings_unlock_waits_for_the_next_xp_event() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_savings_goal(SavingsGoalDraft {
        name: "Квартира".to_string(),
        emoji: "🏠".to_string(),
        target_amount: 500_000.0,
        deadline: None,
        color: "#10b981".to_string(),
    });

    // Savings moves do not award XP, so no achievement pass runs yet.
    store.update_savings_goal(id, 100_000.0);
    assert!(!by_name(&store, "Финансовый гуру").is_unlocked());

    store.add_journal_entry(journal("2024-01-01"));

    let guru = by_name(&store, "Финансовый гуру");
    assert!(guru.is_unlocked());
    assert_eq!(guru.progress, 100_000.0);
}

#[test]
fn seven_journal_entries_unlock_the_writer() {
    let mut store = store_at("2024-01-01T08:00:00Z");

    for day in 1..=7 {
        store.add_journal_entry(journal(&format!("2024-01-{day:02}")));
    }

    assert!(by_name(&store, "Писатель").is_unlocked());
    assert_eq!(store.state().profile.total_xp, 7 * 30 + 200);
}

#[test]
fn unlocks_are_monotonic_even_when_progress_falls_back() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_habit(habit());

    store.toggle_habit(id, "2024-01-01");
    let unlocked_at = by_name(&store, "Первые шаги").unlocked_at.clone();
    assert!(unlocked_at.is_some());

    // Undo the completion, then trigger another evaluation pass.
    store.toggle_habit(id, "2024-01-01");
    store.add_journal_entry(journal("2024-01-01"));

    let first_steps = by_name(&store, "Первые шаги");
    assert!(first_steps.is_unlocked());
    assert_eq!(first_steps.unlocked_at, unlocked_at);
}

#[test]
fn locked_achievements_keep_refreshing_progress() {
    let mut store = store_at("2024-01-01T08:00:00Z");

    for day in 1..=3 {
        store.add_journal_entry(journal(&format!("2024-01-{day:02}")));
    }

    let writer = by_name(&store, "Писатель");
    assert!(!writer.is_unlocked());
    assert_eq!(writer.progress, 3.0);
}
