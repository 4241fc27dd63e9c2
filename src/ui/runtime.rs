use crate::habits::{Clock, DateConvention};
use crate::store::HabitStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Run the interactive list until the user quits.
pub fn run(
    store: HabitStore,
    clock: Arc<dyn Clock>,
    convention: DateConvention,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store.clone(), clock, convention);
    let events = EventHandler::new(tick_rate);

    let state_tx = events.sender();
    let _subscription = store.subscribe_scoped(move |snapshot| {
        let _ = state_tx.send(AppEvent::StateChanged(Arc::clone(snapshot)));
    });
    tracing::info!("UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StateChanged(snapshot)) => app.on_state_changed(snapshot),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
