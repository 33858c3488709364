//! Wake-on-LAN module
//!
//! The packet itself is built and sent by an external utility; this module
//! normalizes the target MAC, runs the utility under a timeout and turns
//! the result into a request outcome.

mod dispatcher;
mod error;
mod mac;
mod outcome;
mod runner;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use crate::config::WolConfig;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, StartupError};
pub use mac::{normalize_mac, MacError, MAC_PLACEHOLDER};
pub use outcome::{timestamp, Outcome, OutcomeStatus};
pub use runner::{CommandOutput, CommandRunner, SystemCommandRunner};

/// Checks run once before the listener is bound
///
/// Fails when the utility cannot be launched, or when a MAC other than the
/// placeholder is configured but does not normalize.
pub async fn preflight(config: &WolConfig, runner: &SystemCommandRunner) -> Result<(), StartupError> {
    runner
        .probe(Duration::from_secs(config.timeout_secs))
        .await?;

    if config.mac_configured() {
        normalize_mac(&config.mac_address)?;
    }
    Ok(())
}
