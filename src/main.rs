//! agenda-timer - main entry point
//!
//! Wires the fixed agenda, the countdown controller, the 1 Hz clock task and
//! the terminal screen together for one presentation session.

use chrono::Local;
use tokio::sync::mpsc;
use tracing::info;

use agenda_timer::{
    agenda::Agenda, config::Config, state::ScheduleTimer, tasks::clock_tick_task, ui,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // The screen owns stdout for the whole session, so logs go to a file
    let log_file = std::fs::File::create(&config.log_file)?;
    let (writer, _log_guard) = tracing_appender::non_blocking(log_file);
    tracing_subscriber::fmt()
        .with_env_filter(format!("agenda_timer={}", config.log_level()))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!("Starting agenda-timer v1.0.0");

    let agenda = match &config.agenda {
        Some(path) => Agenda::load(path)?,
        None => Agenda::builtin()?,
    };
    info!(
        "Agenda '{}' with {} items, {} - {}",
        agenda.title(),
        agenda.len(),
        agenda.items()[0].start_time.format("%H:%M"),
        agenda.items()[agenda.len() - 1].end_time.format("%H:%M")
    );

    let mut timer = ScheduleTimer::new(agenda, Local::now());

    // 1 Hz clock; exits on its own once the UI drops the receiver
    let (tick_tx, tick_rx) = mpsc::channel(8);
    tokio::spawn(clock_tick_task(tick_tx));

    ui::run(&mut timer, tick_rx, !config.light).await?;

    info!(
        "Session ended on item {} with {}s remaining",
        timer.state().selected_id,
        timer.state().remaining_seconds
    );
    Ok(())
}
