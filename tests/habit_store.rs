mod common;

use common::{day, habit};
use habit_tracker::habits::HabitId;
use habit_tracker::store::{HabitIntent, HabitStore, HabitsState};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

fn store() -> HabitStore {
    HabitStore::new(
        HabitsState::new(vec![
            habit("read", "Read", &["2024-01-09"]),
            habit("run", "Run", &[]),
        ])
        .unwrap(),
    )
}

fn recorder(store: &HabitStore) -> Arc<Mutex<Vec<Arc<HabitsState>>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |snapshot| sink.lock().push(Arc::clone(snapshot)));
    seen
}

#[test]
fn dispatch_toggle_updates_snapshot() {
    let store = store();
    assert!(store.dispatch(HabitIntent::toggle_on("read", "2024-01-10").unwrap()));
    let snapshot = store.snapshot();
    let read = snapshot.get(&HabitId::new("read")).unwrap();
    assert!(read.is_complete_on(day("2024-01-10")));
}

#[test]
fn removed_habit_is_not_found() {
    let store = store();
    assert!(store.dispatch(HabitIntent::remove("read")));
    assert!(store.snapshot().get(&HabitId::new("read")).is_none());
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn old_snapshots_are_never_mutated() {
    let store = store();
    let before = store.snapshot();
    store.dispatch(HabitIntent::toggle_on("read", "2024-01-10").unwrap());
    store.dispatch(HabitIntent::remove("run"));

    assert_eq!(before.len(), 2);
    assert!(!before
        .get(&HabitId::new("read"))
        .unwrap()
        .is_complete_on(day("2024-01-10")));
    assert_ne!(*before, *store.snapshot());
}

#[test]
fn subscribers_receive_each_new_snapshot_in_order() {
    let store = store();
    let seen = recorder(&store);

    store.dispatch(HabitIntent::toggle_on("run", "2024-01-10").unwrap());
    store.dispatch(HabitIntent::remove("read"));

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].len(), 2);
    assert!(seen[0]
        .get(&HabitId::new("run"))
        .unwrap()
        .is_complete_on(day("2024-01-10")));
    assert_eq!(seen[1].len(), 1);
    assert!(Arc::ptr_eq(&seen[1], &store.snapshot()));
}

#[test]
fn unknown_ids_are_silent_noops() {
    let store = store();
    let seen = recorder(&store);
    let before = store.snapshot();

    assert!(!store.dispatch(HabitIntent::toggle_on("nope", "2024-01-10").unwrap()));
    assert!(!store.dispatch(HabitIntent::remove("nope")));

    assert!(seen.lock().is_empty());
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = store();
    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);
    let id = store.subscribe(move |_| *sink.lock() += 1);

    store.dispatch(HabitIntent::remove("run"));
    assert!(store.unsubscribe(id));
    store.dispatch(HabitIntent::remove("read"));

    assert_eq!(*count.lock(), 1);
    assert!(!store.unsubscribe(id));
}

/// Subscribes, sees one change, then bails out with `?`.
fn count_until_error(store: &HabitStore, sink: Arc<Mutex<usize>>) -> Result<(), String> {
    let subscription = store.subscribe_scoped(move |_| *sink.lock() += 1);
    store.dispatch(HabitIntent::remove("run"));
    "not-a-date"
        .parse::<chrono::NaiveDate>()
        .map_err(|err| format!("subscription {:?}: {err}", subscription.id()))?;
    Ok(())
}

#[test]
fn scoped_subscription_ends_when_dropped() {
    let store = store();
    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);

    let result = count_until_error(&store, sink);
    assert!(result.is_err());

    store.dispatch(HabitIntent::remove("read"));
    assert_eq!(*count.lock(), 1);
}

#[test]
fn clones_share_state() {
    let store = store();
    let other = store.clone();
    other.dispatch(HabitIntent::remove("run"));
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn concurrent_toggles_are_all_applied() {
    let dates: Vec<String> = (1..=20).map(|d| format!("2024-02-{d:02}")).collect();
    let store = store();
    let seen = recorder(&store);

    let handles: Vec<_> = dates
        .chunks(5)
        .map(|chunk| {
            let store = store.clone();
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                for date in chunk {
                    store.dispatch(HabitIntent::toggle_on("run", &date).unwrap());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = store.snapshot();
    let run = snapshot.get(&HabitId::new("run")).unwrap();
    assert_eq!(run.complete_dates().len(), 20);

    // Every notification saw one more date than the previous one.
    let sizes: Vec<usize> = seen
        .lock()
        .iter()
        .map(|s| s.get(&HabitId::new("run")).unwrap().complete_dates().len())
        .collect();
    assert_eq!(sizes, (1..=20).collect::<Vec<_>>());
}
