//! Magic-packet dispatcher
//!
//! Validates the configured MAC, runs the external utility under a hard
//! timeout and maps the result onto an HTTP status and [`Outcome`].

use std::sync::Arc;
use std::time::Duration;

use hyper::StatusCode;

use super::error::DispatchError;
use super::mac::normalize_mac;
use super::outcome::Outcome;
use super::runner::CommandRunner;
use crate::config::WolConfig;
use crate::logger;

pub struct Dispatcher {
    mac_address: String,
    broadcast_address: String,
    mac_configured: bool,
    timeout: Duration,
    runner: Arc<dyn CommandRunner>,
}

impl Dispatcher {
    pub fn new(config: &WolConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            mac_address: config.mac_address.clone(),
            broadcast_address: config.broadcast_address.clone(),
            mac_configured: config.mac_configured(),
            timeout: Duration::from_secs(config.timeout_secs),
            runner,
        }
    }

    /// Send one magic packet, returning the canonical MAC it was sent to
    pub async fn dispatch(&self) -> Result<String, DispatchError> {
        if !self.mac_configured {
            return Err(DispatchError::MacNotConfigured);
        }

        let mac = normalize_mac(&self.mac_address)?;

        let run = self.runner.run(&self.broadcast_address, &mac);
        let output = match tokio::time::timeout(self.timeout, run).await {
            Ok(result) => result.map_err(DispatchError::Spawn)?,
            Err(_) => return Err(DispatchError::Timeout),
        };

        if output.success() {
            logger::log_utility_output(&output.stdout);
            Ok(mac)
        } else {
            Err(DispatchError::ToolFailed {
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }

    /// Run [`Self::dispatch`] and translate the result for the HTTP layer
    pub async fn wake(&self) -> (StatusCode, Outcome) {
        match self.dispatch().await {
            Ok(mac) => {
                logger::log_packet_sent(&mac);
                (StatusCode::OK, Outcome::success(format!("Magic packet sent to {mac}")))
            }
            Err(err) => {
                logger::log_dispatch_failed(&err);
                (err.status_code(), Outcome::from(&err))
            }
        }
    }
}
