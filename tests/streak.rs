mod common;

use common::{day, habit};
use habit_tracker::habits::{current_streak, Habit};

#[test]
fn empty_history_has_no_streak() {
    assert_eq!(current_streak(&habit("read", "Read", &[]), day("2024-01-10")), 0);
}

#[test]
fn streak_stops_at_first_gap() {
    // 2024-01-07 is missing, so 2024-01-06 is unreachable.
    let h = habit(
        "read",
        "Read",
        &["2024-01-10", "2024-01-09", "2024-01-08", "2024-01-06"],
    );
    assert_eq!(current_streak(&h, day("2024-01-10")), 3);
}

#[test]
fn missing_today_means_zero() {
    let h = habit("read", "Read", &["2024-01-09"]);
    assert_eq!(current_streak(&h, day("2024-01-10")), 0);
}

#[test]
fn n_consecutive_days_ending_today() {
    let today = day("2024-03-05");
    for n in [1u32, 2, 7, 40] {
        let dates = (0..n).map(|back| today - chrono::Days::new(back as u64));
        // Gap on day n+1 back, then more history further in the past.
        let older = (n + 1..n + 10).map(|back| today - chrono::Days::new(back as u64));
        let h = Habit::with_id("h".into(), "H", "daily").with_completions(dates.chain(older));
        assert_eq!(current_streak(&h, today), n, "streak of {n} days");
    }
}

#[test]
fn streak_crosses_month_and_year_boundaries() {
    let h = habit(
        "read",
        "Read",
        &["2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"],
    );
    assert_eq!(current_streak(&h, day("2024-01-02")), 4);

    let leap = habit("run", "Run", &["2024-02-28", "2024-02-29", "2024-03-01"]);
    assert_eq!(current_streak(&leap, day("2024-03-01")), 3);
}

#[test]
fn future_entries_do_not_count() {
    let h = habit("read", "Read", &["2024-01-11", "2024-01-12"]);
    assert_eq!(current_streak(&h, day("2024-01-10")), 0);
}

#[test]
fn streak_does_not_modify_the_habit() {
    let h = habit("read", "Read", &["2024-01-10", "2024-01-09"]);
    let before = h.clone();
    let _ = current_streak(&h, day("2024-01-10"));
    assert_eq!(h, before);
}
