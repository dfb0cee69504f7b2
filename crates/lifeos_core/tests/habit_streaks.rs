use lifeos_core::{FixedClock, HabitDraft, HabitKind, Store};
use uuid::Uuid;

fn store_at(now_iso: &str) -> Store {
    Store::new(Box::new(FixedClock::new(now_iso)))
}

fn reading_habit() -> HabitDraft {
    HabitDraft {
        name: "Read".to_string(),
        emoji: "📚".to_string(),
        kind: HabitKind::Daily,
        frequency: None,
        color: "#6366f1".to_string(),
        quit_date: None,
        money_saved_per_day: None,
    }
}

#[test]
fn new_habit_starts_with_zero_streak() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_habit(reading_habit());

    let habit = store.state().habits.iter().find(|h| h.id == id).unwrap();
    assert_eq!(habit.streak, 0);
    assert_eq!(habit.best_streak, 0);
    assert!(habit.completed_dates.is_empty());
    assert_eq!(habit.created_at, "2024-01-01T08:00:00Z");
}

#[test]
fn toggle_on_awards_xp_and_increments_streak() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_habit(reading_habit());

    store.toggle_habit(id, "2024-01-01");

    let habit = &store.state().habits[0];
    assert_eq!(habit.streak, 1);
    assert!(habit.completed_dates.contains("2024-01-01"));
    // 15 for the completion plus 50 for the first-completion achievement.
    assert_eq!(store.state().profile.total_xp, 65);

    let first_steps = store
        .state()
        .achievements
        .iter()
        .find(|a| a.name == "Первые шаги")
        .unwrap();
    assert!(first_steps.is_unlocked());
}

#[test]
fn toggle_off_reverts_streak_without_clawing_back_xp() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_habit(reading_habit());

    store.toggle_habit(id, "2024-01-01");
    let xp_after_completion = store.state().profile.total_xp;

    store.toggle_habit(id, "2024-01-01");

    let habit = &store.state().habits[0];
    assert_eq!(habit.streak, 0);
    assert!(habit.completed_dates.is_empty());
    assert_eq!(habit.best_streak, 1);
    assert_eq!(store.state().profile.total_xp, xp_after_completion);
}

#[test]
fn toggling_distinct_days_builds_the_streak() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_habit(reading_habit());

    for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        store.toggle_habit(id, day);
    }

    let habit = &store.state().habits[0];
    assert_eq!(habit.streak, 3);
    assert_eq!(habit.best_streak, 3);
    assert_eq!(habit.completed_dates.len(), 3);
}

#[test]
fn reset_habit_streak_keeps_best_and_dates() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_habit(reading_habit());

    store.toggle_habit(id, "2024-01-01");
    store.toggle_habit(id, "2024-01-02");
    store.reset_habit_streak(id);

    let habit = &store.state().habits[0];
    assert_eq!(habit.streak, 0);
    assert_eq!(habit.best_streak, 2);
    assert_eq!(habit.completed_dates.len(), 2);
}

#[test]
fn mutations_on_unknown_ids_are_no_ops() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    store.add_habit(reading_habit());
    let before = store.state().clone();

    let ghost = Uuid::new_v4();
    store.toggle_habit(ghost, "2024-01-01");
    store.reset_habit_streak(ghost);
    store.delete_habit(ghost);

    assert_eq!(store.state(), &before);
}

#[test]
fn delete_habit_removes_it() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_habit(reading_habit());
    store.add_habit(reading_habit());

    store.delete_habit(id);

    assert_eq!(store.state().habits.len(), 1);
    assert!(store.state().habits.iter().all(|h| h.id != id));
}
