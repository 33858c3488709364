// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::wol::MAC_PLACEHOLDER;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 6969;
pub const DEFAULT_CONNECTION_TIMEOUT_SECS: u32 = 30;
pub const DEFAULT_MAC_ADDRESS: &str = "2C-F0-5D-57-5C-63";
pub const DEFAULT_BROADCAST_ADDRESS: &str = "192.168.254.255";
pub const DEFAULT_WOL_COMMAND: &str = "wakeonlan";
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u32 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "wol_server.log";

/// Main configuration structure
///
/// Loaded once before the listener is bound and never mutated afterwards.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub wol: WolConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds a client has to send its request headers
    pub connection_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            connection_timeout: u64::from(DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }
}

/// Wake-on-LAN target and external utility settings
#[derive(Debug, Deserialize, Clone)]
pub struct WolConfig {
    /// Target MAC in `XX:XX:XX:XX:XX:XX`, `XX-XX-XX-XX-XX-XX` or `XXXXXXXXXXXX` form
    pub mac_address: String,
    pub broadcast_address: String,
    /// Program invoked as `<command> -i <broadcast_address> <mac>`
    pub command: String,
    pub timeout_secs: u64,
}

impl WolConfig {
    /// Whether the MAC has been changed from the unset placeholder
    pub fn mac_configured(&self) -> bool {
        self.mac_address != MAC_PLACEHOLDER
    }
}

impl Default for WolConfig {
    fn default() -> Self {
        Self {
            mac_address: DEFAULT_MAC_ADDRESS.to_string(),
            broadcast_address: DEFAULT_BROADCAST_ADDRESS.to_string(),
            command: DEFAULT_WOL_COMMAND.to_string(),
            timeout_secs: u64::from(DEFAULT_COMMAND_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
    /// Log file path; an empty value keeps logging on the console only
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn file_path(&self) -> Option<&str> {
        self.file.as_deref().filter(|path| !path.is_empty())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: Some(DEFAULT_LOG_FILE.to_string()),
        }
    }
}
