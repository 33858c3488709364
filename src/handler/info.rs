// `/status` and `/config` endpoints

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::AppState;
use crate::http;
use crate::wol;

const SERVICE_NAME: &str = "WoL Server";
const SERVICE_VERSION: &str = "1.0";

#[derive(Debug, Serialize)]
struct StatusReport {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp: String,
    configured_mac: bool,
}

/// Sanitized view of the configuration; the MAC itself is never included
#[derive(Debug, Serialize)]
struct ConfigReport<'a> {
    port: u16,
    mac_configured: bool,
    broadcast_ip: &'a str,
    log_enabled: bool,
}

pub fn handle_status(state: &AppState) -> Response<Full<Bytes>> {
    let report = StatusReport {
        status: "online",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: wol::timestamp(),
        configured_mac: state.config.wol.mac_configured(),
    };
    http::json_response(StatusCode::OK, &report)
}

pub fn handle_config(state: &AppState) -> Response<Full<Bytes>> {
    let config = &state.config;
    let report = ConfigReport {
        port: config.server.port,
        mac_configured: config.wol.mac_configured(),
        broadcast_ip: &config.wol.broadcast_address,
        log_enabled: config.logging.enabled,
    };
    http::json_response(StatusCode::OK, &report)
}
