//! Access log format module
//!
//! One line per served request in Common Log Format (CLF).

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, OPTIONS, ...)
    pub method: String,
    /// Request URI path and query
    pub uri: String,
    /// Protocol as sent on the request line, e.g. `HTTP/1.1`
    pub protocol: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, uri: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            uri,
            protocol: "HTTP/1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} {}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.uri,
            self.protocol,
            self.status,
            self.body_bytes,
        )
    }
}
