// Application state module
// Immutable per-process state shared by every connection

use std::sync::Arc;
use std::time::Duration;

use super::types::Config;
use crate::wol::{CommandRunner, Dispatcher};

/// Application state
///
/// Built once at startup and handed to handlers through an `Arc`.
pub struct AppState {
    pub config: Config,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Config, runner: Arc<dyn CommandRunner>) -> Self {
        let dispatcher = Dispatcher::new(&config.wol, runner);
        Self { config, dispatcher }
    }

    /// Time a client has to send its request headers
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.config.server.connection_timeout)
    }
}
