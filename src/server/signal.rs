// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Start the shutdown signal listener (Unix)
///
/// Spawns a background task that notifies `shutdown` once on the first
/// SIGTERM or SIGINT.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {}
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
                    return;
                }
            }
        }

        // notify_one stores a permit if the accept loop is not waiting yet
        shutdown.notify_one();
    });
}

/// Fallback for other platforms - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown.notify_one(),
            Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
        }
    });
}
