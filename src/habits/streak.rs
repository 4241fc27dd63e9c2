//! Current-streak calculation.

use chrono::NaiveDate;

use crate::habits::Habit;

/// Consecutive complete days walking back from `today`, inclusive.
///
/// Today counts only if it is complete; otherwise the streak is 0. The
/// walk stops at the first missing day, so older entries past a gap never
/// contribute and the cost is bounded by the streak length.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor.filter(|day| habit.is_complete_on(*day)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::parse_date;

    fn habit_with(dates: &[&str]) -> Habit {
        Habit::with_id("h".into(), "Habit", "daily")
            .with_completions(dates.iter().map(|d| parse_date(d).unwrap()))
    }

    #[test]
    fn empty_history_is_zero() {
        let today = parse_date("2024-01-10").unwrap();
        assert_eq!(current_streak(&habit_with(&[]), today), 0);
    }

    #[test]
    fn stops_at_calendar_minimum() {
        let habit = Habit::with_id("h".into(), "Habit", "daily")
            .with_completions([NaiveDate::MIN, NaiveDate::MIN.succ_opt().unwrap()]);
        assert_eq!(current_streak(&habit, NaiveDate::MIN.succ_opt().unwrap()), 2);
    }
}
