use chrono::NaiveDate;
use std::sync::Arc;

use crate::habits::{Clock, DateConvention, Habit, HabitSummary, DATE_FORMAT};
use crate::mvi::Reducer;
use crate::store::{HabitIntent, HabitStore, HabitsState};
use crate::ui::list::{ListIntent, ListReducer, ListState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Help,
}

/// View state for the habit list screen.
///
/// Reads habits only from the latest store snapshot it was handed; every
/// change goes out as a [`HabitIntent`] and comes back through
/// [`App::on_state_changed`].
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: HabitStore,
    clock: Arc<dyn Clock>,
    convention: DateConvention,
    today: NaiveDate,
    snapshot: Arc<HabitsState>,
    list: ListState,
    notice: Option<String>,
}

impl App {
    pub fn new(store: HabitStore, clock: Arc<dyn Clock>, convention: DateConvention) -> Self {
        let snapshot = store.snapshot();
        let today = clock.today();
        Self {
            should_quit: false,
            focus: Focus::List,
            list: ListState::new(snapshot.len()),
            store,
            clock,
            convention,
            today,
            snapshot,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_help(&mut self) {
        self.focus = match self.focus {
            Focus::Help => Focus::List,
            Focus::List => Focus::Help,
        };
    }

    pub fn close_help(&mut self) {
        self.focus = Focus::List;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn convention(&self) -> DateConvention {
        self.convention
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn selection(&self) -> Option<usize> {
        self.list.selection()
    }

    /// Display rows for the current snapshot, streaks computed on the spot.
    pub fn summaries(&self) -> Vec<HabitSummary> {
        self.snapshot
            .habits()
            .map(|habit| HabitSummary::of(habit, self.today))
            .collect()
    }

    /// Re-read the clock so the view rolls over at midnight.
    pub fn on_tick(&mut self) {
        let today = self.clock.today();
        if today != self.today {
            tracing::info!(today = %today, "Calendar day changed");
            self.today = today;
        }
    }

    /// Apply a snapshot published by the store.
    ///
    /// Notifications queue behind key presses, so one may arrive after the
    /// app already pulled a newer state following its own dispatch. Only
    /// the store's current snapshot is applied; older ones are skipped.
    pub fn on_state_changed(&mut self, snapshot: Arc<HabitsState>) {
        if !Arc::ptr_eq(&snapshot, &self.store.snapshot()) {
            return;
        }
        self.apply_snapshot(snapshot);
    }

    pub fn move_selection(&mut self, delta: i8) {
        if delta < 0 {
            self.dispatch_list(ListIntent::MoveUp);
        } else if delta > 0 {
            self.dispatch_list(ListIntent::MoveDown);
        }
    }

    /// Toggle today's completion on the selected habit.
    pub fn toggle_selected(&mut self) {
        let Some(habit) = self.selected_habit() else {
            return;
        };
        let id = habit.id().clone();
        let name = habit.name().to_string();
        let was_complete = habit.is_complete_on(self.today);
        let date = self.today;

        if self.store.dispatch(HabitIntent::Toggle { id, date }) {
            self.refresh_from_store();
            let day = date.format(DATE_FORMAT);
            self.notice = Some(if was_complete {
                format!("Unmarked '{name}' for {day}")
            } else {
                format!("Marked '{name}' complete for {day}")
            });
        }
    }

    /// Remove the selected habit. Immediate and permanent.
    pub fn remove_selected(&mut self) {
        let Some(habit) = self.selected_habit() else {
            return;
        };
        let id = habit.id().clone();
        let name = habit.name().to_string();

        if self.store.dispatch(HabitIntent::Remove { id }) {
            self.refresh_from_store();
            self.notice = Some(format!("Removed '{name}'"));
        }
    }

    fn selected_habit(&self) -> Option<&Habit> {
        self.list
            .selection()
            .and_then(|index| self.snapshot.get_index(index))
    }

    /// Pull the post-dispatch state so queued keys act on it.
    fn refresh_from_store(&mut self) {
        let snapshot = self.store.snapshot();
        self.apply_snapshot(snapshot);
    }

    fn apply_snapshot(&mut self, snapshot: Arc<HabitsState>) {
        let len = snapshot.len();
        self.snapshot = snapshot;
        self.dispatch_list(ListIntent::Resize { len });
    }

    fn dispatch_list(&mut self, intent: ListIntent) {
        self.list = ListReducer::reduce(self.list, intent);
    }
}
