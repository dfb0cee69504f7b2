use lifeos_core::{xp_for_level, FixedClock, Priority, Store, TaskDraft};

fn store_at(now_iso: &str) -> Store {
    Store::new(Box::new(FixedClock::new(now_iso)))
}

fn chore(priority: Priority) -> TaskDraft {
    TaskDraft {
        title: "Chore".to_string(),
        description: None,
        priority,
        deadline: None,
        tags: Vec::new(),
    }
}

#[test]
fn fresh_profile_starts_at_level_one() {
    let store = store_at("2024-01-01T08:00:00Z");
    let profile = &store.state().profile;

    assert_eq!(profile.level, 1);
    assert_eq!(profile.xp, 0);
    assert_eq!(profile.total_xp, 0);
    assert_eq!(profile.title, "Новичок");
    assert_eq!(profile.joined_at, "2024-01-01T08:00:00Z");
}

#[test]
fn split_grants_match_a_single_grant() {
    let mut split = store_at("2024-01-01T08:00:00Z");
    split.add_xp(180);
    split.add_xp(220);

    let mut single = store_at("2024-01-01T08:00:00Z");
    single.add_xp(400);

    assert_eq!(split.state().profile.level, single.state().profile.level);
    assert_eq!(split.state().profile.xp, single.state().profile.xp);
    assert_eq!(
        split.state().profile.total_xp,
        single.state().profile.total_xp
    );
}

#[test]
fn level_progress_stays_below_the_threshold() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    for _ in 0..20 {
        let id = store.add_task(chore(Priority::High));
        store.toggle_task(id);
    }

    let profile = &store.state().profile;
    assert!(profile.xp < xp_for_level(profile.level));
    assert!(profile.level >= 1);
    assert_eq!(profile.total_xp, 20 * 30);
}

#[test]
fn task_completion_awards_priority_tiered_xp() {
    let mut store = store_at("2024-01-01T08:00:00Z");

    let high = store.add_task(chore(Priority::High));
    let medium = store.add_task(chore(Priority::Medium));
    let low = store.add_task(chore(Priority::Low));

    store.toggle_task(high);
    assert_eq!(store.state().profile.total_xp, 30);
    store.toggle_task(medium);
    assert_eq!(store.state().profile.total_xp, 50);
    store.toggle_task(low);
    assert_eq!(store.state().profile.total_xp, 60);
}

#[test]
fn uncompleting_a_task_keeps_the_xp() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    let id = store.add_task(chore(Priority::High));

    store.toggle_task(id);
    store.toggle_task(id);

    let task = &store.state().tasks[0];
    assert!(!task.completed);
    assert!(task.completed_at.is_none());
    assert_eq!(store.state().profile.total_xp, 30);
}

#[test]
fn daily_bonus_claims_once_per_day() {
    let clock = FixedClock::new("2024-01-01T08:00:00Z");
    let mut store = Store::new(Box::new(clock.clone()));

    store.claim_daily_bonus();
    assert_eq!(store.state().profile.total_xp, 50);
    assert_eq!(store.state().profile.streak, 1);
    assert_eq!(
        store.state().profile.daily_bonus_claimed.as_deref(),
        Some("2024-01-01")
    );

    // Same day again: nothing moves.
    store.claim_daily_bonus();
    assert_eq!(store.state().profile.total_xp, 50);
    assert_eq!(store.state().profile.streak, 1);

    clock.set("2024-01-02T07:30:00Z");
    store.claim_daily_bonus();
    assert_eq!(store.state().profile.total_xp, 100);
    assert_eq!(store.state().profile.streak, 2);
}

#[test]
fn titles_follow_the_level() {
    let mut store = store_at("2024-01-01T08:00:00Z");
    // Enough to pass level 5 (100 + 250 + 400 + 550 + 700 = 2000).
    store.add_xp(2_000);

    let profile = &store.state().profile;
    assert!(profile.level >= 5);
    assert_eq!(profile.title, "Ученик");
}
