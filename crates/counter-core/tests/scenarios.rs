//! End-to-end widget scenarios on an in-memory store and a virtual clock.

use counter_core::{CounterConfig, CounterSession, ManualScheduler, MemoryStore};

type Session = CounterSession<MemoryStore, ManualScheduler>;

fn mount(store: &MemoryStore, scheduler: &ManualScheduler) -> Session {
    CounterSession::mount(store.clone(), scheduler.clone(), &CounterConfig::default())
}

#[test]
fn test_count_survives_reload() {
    let store = MemoryStore::new();
    let scheduler = ManualScheduler::new();

    let first = mount(&store, &scheduler);
    first.set_step("42");
    first.increment();
    assert_eq!(first.state().count(), 42);
    drop(first);

    let reloaded = mount(&store, &scheduler);
    assert_eq!(reloaded.state().count(), 42);
    assert_eq!(reloaded.state().step(), 1, "step is not persisted");
    assert!(!reloaded.state().auto_increment());
}

#[test]
fn test_twenty_one_increments_by_five_stop_at_max() {
    let session = mount(&MemoryStore::new(), &ManualScheduler::new());
    assert!(session.set_step("5"));
    for _ in 0..21 {
        session.increment();
    }
    let state = session.state();
    assert_eq!(state.count(), 100);
    assert!(!state.can_increment());
    assert!(state.can_decrement());
}

#[test]
fn test_decrement_at_zero_is_disabled_and_inert() {
    let store = MemoryStore::new();
    let session = mount(&store, &ManualScheduler::new());
    assert!(!session.state().can_decrement());
    let after = session.decrement();
    assert_eq!(after, session.state());
    assert_eq!(after.count(), 0);
    assert_eq!(store.raw("count").as_deref(), Some("0"));
}

#[test]
fn test_step_rejection_keeps_prior_step() {
    let session = mount(&MemoryStore::new(), &ManualScheduler::new());
    assert!(session.set_step("6"));
    for input in ["-3", "abc", "0"] {
        assert!(!session.set_step(input));
        assert_eq!(session.state().step(), 6);
    }
}

#[test]
fn test_auto_increment_runs_and_stops() {
    let scheduler = ManualScheduler::new();
    let session = mount(&MemoryStore::new(), &scheduler);
    session.set_step("10");
    session.toggle_auto(true);

    assert_eq!(scheduler.advance(2_500), 5);
    assert_eq!(session.state().count(), 50);

    session.toggle_auto(false);
    assert_eq!(scheduler.active_tasks(), 0);
    scheduler.advance(500);
    assert_eq!(session.state().count(), 50);
}

#[test]
fn test_step_change_restarts_auto_increment() {
    let scheduler = ManualScheduler::new();
    let session = mount(&MemoryStore::new(), &scheduler);
    session.set_step("10");
    session.toggle_auto(true);
    scheduler.advance(1_000);
    assert_eq!(session.state().count(), 20);

    // Restart puts the next firing a full period after the change
    scheduler.advance(300);
    session.set_step("3");
    assert_eq!(scheduler.active_tasks(), 1);
    scheduler.advance(200);
    assert_eq!(session.state().count(), 20);
    scheduler.advance(300);
    assert_eq!(session.state().count(), 23);
}

#[test]
fn test_auto_increment_saturates_and_keeps_persisting_max() {
    let store = MemoryStore::with_entry("count", "95");
    let scheduler = ManualScheduler::new();
    let session = mount(&store, &scheduler);
    session.set_step("2");
    session.toggle_auto(true);
    scheduler.advance(5_000);
    assert_eq!(session.state().count(), 100);
    assert_eq!(store.raw("count").as_deref(), Some("100"));
    assert!(session.is_ticking());
}

#[test]
fn test_user_and_timer_transitions_interleave() {
    let scheduler = ManualScheduler::new();
    let session = mount(&MemoryStore::new(), &scheduler);
    session.toggle_auto(true);
    scheduler.advance(500);
    session.increment();
    scheduler.advance(500);
    session.reset();
    assert_eq!(session.state().count(), 0);
    scheduler.advance(500);
    assert_eq!(session.state().count(), 1);
}

#[test]
fn test_teardown_is_idempotent() {
    let scheduler = ManualScheduler::new();
    let session = mount(&MemoryStore::new(), &scheduler);
    session.toggle_auto(true);
    session.teardown();
    session.teardown();
    assert_eq!(scheduler.active_tasks(), 0);
    assert_eq!(scheduler.advance(1_000), 0);
}

#[test]
fn test_torn_down_session_never_schedules_again() {
    let scheduler = ManualScheduler::new();
    let session = mount(&MemoryStore::new(), &scheduler);
    session.toggle_auto(true);
    session.teardown();

    assert!(session.is_torn_down());
    assert!(!session.state().auto_increment());
    assert_eq!(session.state().auto_increment(), session.is_ticking());

    // Step changes must not revive the timer
    assert!(session.set_step("7"));
    assert_eq!(scheduler.active_tasks(), 0);
    assert_eq!(scheduler.advance(1_000), 0);
    assert_eq!(session.state().count(), 0);

    session.toggle_auto(true);
    assert!(!session.state().auto_increment());
    assert!(!session.is_ticking());
    assert_eq!(scheduler.advance(1_000), 0);
}

#[test]
fn test_teardown_before_auto_keeps_flag_and_timer_paired() {
    let scheduler = ManualScheduler::new();
    let session = mount(&MemoryStore::new(), &scheduler);
    session.teardown();
    session.toggle_auto(true);
    assert_eq!(session.state().auto_increment(), session.is_ticking());
    assert_eq!(scheduler.active_tasks(), 0);

    // Manual transitions still work and persist
    session.increment();
    assert_eq!(session.state().count(), 1);
}

#[test]
fn test_custom_bounds_and_key() {
    let config = CounterConfig::from_json(r#"{ "min": -5, "max": 5, "storageKey": "clicks" }"#).unwrap();
    let store = MemoryStore::with_entry("clicks", "-9");
    let session = CounterSession::mount(store.clone(), ManualScheduler::new(), &config);
    assert_eq!(session.state().count(), -5);
    assert_eq!(session.state().prev(), -5);
    session.reset();
    assert_eq!(store.raw("clicks").as_deref(), Some("0"));
    assert_eq!(store.raw("count"), None);
}
