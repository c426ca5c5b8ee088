//! Clock tick background task

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

/// A 1 Hz tick carrying the wall-clock timestamp it fired at.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    pub now: DateTime<Local>,
}

/// Emit one [`Tick`] per second until the receiving side hangs up.
///
/// The UI event loop owns the receiver; dropping it at teardown ends this
/// task, so no timer outlives the session.
pub async fn clock_tick_task(ticks: mpsc::Sender<Tick>) {
    info!("Starting clock tick task");

    let mut period = interval(Duration::from_secs(1));
    period.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        period.tick().await;
        if ticks.send(Tick { now: Local::now() }).await.is_err() {
            debug!("Tick receiver dropped, stopping clock");
            break;
        }
    }
}
