//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Wait for a termination signal (SIGTERM, SIGINT, SIGHUP).
///
/// Raw mode turns Ctrl-C into a plain key event, so interactive quits never
/// arrive here; this covers external kills while the terminal still needs
/// restoring.
pub async fn shutdown_signal() {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
        signal_hook::consts::SIGHUP,
    ])
    .expect("Failed to create signal handler");

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}
