use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use habit_tracker::cli::{Cli, OutputFormat};
use habit_tracker::config::Config;
use habit_tracker::habits::{Clock, FixedClock, HabitSummary, SystemClock, DATE_FORMAT};
use habit_tracker::logging::{default_log_path, init_file_tracing, init_stderr_tracing};
use habit_tracker::store::{HabitStore, HabitsState};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.print {
        init_stderr_tracing();
    } else {
        let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
        init_file_tracing(&log_path)
            .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    }

    let config = Config::load_from(&cli.config_path())?;
    let convention = cli.effective_convention(&config);
    let clock: Arc<dyn Clock> = match cli.today {
        Some(today) => Arc::new(FixedClock::new(today)),
        None => Arc::new(SystemClock::new(convention)),
    };

    let initial = HabitsState::new(config.initial_habits())?;
    let store = HabitStore::new(initial);

    if cli.print {
        return print_habits(&store, clock.as_ref(), cli.format);
    }

    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    habit_tracker::ui::run(store, clock, convention, tick_rate).context("Terminal UI failed")
}

fn print_habits(store: &HabitStore, clock: &dyn Clock, format: OutputFormat) -> anyhow::Result<()> {
    let today = clock.today();
    let snapshot = store.snapshot();
    let summaries: Vec<HabitSummary> = snapshot
        .habits()
        .map(|habit| HabitSummary::of(habit, today))
        .collect();

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let document = serde_json::json!({
                "today": today.format(DATE_FORMAT).to_string(),
                "habits": summaries,
            });
            serde_json::to_writer_pretty(&mut out, &document)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Habits for {}", today.format(DATE_FORMAT))?;
            if summaries.is_empty() {
                writeln!(out, "No habits configured.")?;
            }
            for summary in &summaries {
                writeln!(
                    out,
                    "{} ({}) [{}] {}",
                    summary.name,
                    summary.frequency,
                    summary.status_label(),
                    summary.streak_label()
                )?;
            }
        }
    }
    Ok(())
}
