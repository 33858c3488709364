//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Startup banner and lifecycle logging
//! - Per-request and access logging
//! - Wake-on-LAN dispatch results

mod format;
pub mod writer;

pub use format::AccessLogEntry;
pub use writer::LoggerError;

use std::net::{IpAddr, SocketAddr};

use crate::config::Config;
use crate::handler::AVAILABLE_ENDPOINTS;
use crate::wol::DispatchError;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> Result<(), LoggerError> {
    writer::init(&config.logging)
}

/// Print the startup banner to stdout
///
/// Printed regardless of `logging.enabled`.
pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let port = config.server.port;
    println!("======================================");
    println!("Starting WoL Server on {addr}");
    println!("Target MAC: {}", config.wol.mac_address);
    println!("Broadcast IP: {}", config.wol.broadcast_address);
    println!(
        "Logging: {}",
        if config.logging.enabled { "Enabled" } else { "Disabled" }
    );
    if let (true, Some(path)) = (config.logging.enabled, config.logging.file_path()) {
        println!("Log file: {path}");
    }
    println!("\nAvailable endpoints:");
    for (endpoint, description) in AVAILABLE_ENDPOINTS.iter().zip([
        "Send magic packet",
        "Check server status",
        "View configuration",
    ]) {
        println!("  http://localhost:{port}{endpoint} - {description}");
    }
    println!("\nPress Ctrl+C to stop the server");
    println!("======================================\n");

    tracing::info!("WoL Server starting up");
}

pub fn log_shutdown() {
    println!("\nShutting down server...");
    tracing::info!("Server shut down by user");
}

pub fn log_request(client_ip: IpAddr, path: &str) {
    tracing::info!("Request from {client_ip}: {path}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    tracing::info!("HTTP: {}", entry.format_common());
}

pub fn log_packet_sent(mac: &str) {
    tracing::info!("Magic packet sent successfully to {mac}");
}

pub fn log_utility_output(stdout: &str) {
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        tracing::debug!("Packet utility output: {stdout}");
    }
}

pub fn log_dispatch_failed(err: &DispatchError) {
    match err {
        DispatchError::ToolFailed { code, stderr } => {
            tracing::error!(exit_code = ?code, "Packet utility failed: {stderr}");
        }
        DispatchError::Timeout => tracing::error!("Packet utility timed out"),
        other => tracing::error!("Wake-on-LAN request failed: {other}"),
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}
