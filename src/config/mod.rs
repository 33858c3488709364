// Configuration module entry point
// Loads the immutable service configuration and holds per-process state

mod state;
mod types;

use std::net::{Ipv4Addr, SocketAddr};

use config::ConfigError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, WolConfig};
use types::{
    DEFAULT_BROADCAST_ADDRESS, DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_CONNECTION_TIMEOUT_SECS,
    DEFAULT_HOST, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_MAC_ADDRESS, DEFAULT_PORT,
    DEFAULT_WOL_COMMAND,
};

impl Config {
    /// Load configuration from specified file path (extension optional)
    ///
    /// Sources, lowest priority first: built-in defaults, the file (if it
    /// exists), then `WOL_`-prefixed environment variables such as
    /// `WOL_SERVER__PORT=8080`. A missing file is not an error.
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, None)
    }

    /// Like [`Self::load_from`], reading variables from `env` instead of
    /// the process environment when given
    fn load_with_env(
        config_path: &str,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("WOL")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default(
                "server.connection_timeout",
                i64::from(DEFAULT_CONNECTION_TIMEOUT_SECS),
            )?
            .set_default("wol.mac_address", DEFAULT_MAC_ADDRESS)?
            .set_default("wol.broadcast_address", DEFAULT_BROADCAST_ADDRESS)?
            .set_default("wol.command", DEFAULT_WOL_COMMAND)?
            .set_default("wol.timeout_secs", i64::from(DEFAULT_COMMAND_TIMEOUT_SECS))?
            .set_default("logging.enabled", true)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("logging.file", DEFAULT_LOG_FILE)?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message(
                "server.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.wol.broadcast_address.parse::<Ipv4Addr>().is_err() {
            return Err(ConfigError::Message(format!(
                "wol.broadcast_address '{}' is not a dotted-quad IPv4 address",
                self.wol.broadcast_address
            )));
        }
        if self.wol.command.trim().is_empty() {
            return Err(ConfigError::Message("wol.command must not be empty".to_string()));
        }
        if self.wol.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "wol.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
