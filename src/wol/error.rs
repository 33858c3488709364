//! Error types for the magic-packet dispatcher

use hyper::StatusCode;
use thiserror::Error;

use super::mac::MacError;

/// Why a `/wol` request did not send a packet
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("MAC address not configured. Please edit the configuration.")]
    MacNotConfigured,

    #[error("{0}")]
    InvalidMac(#[from] MacError),

    #[error("Failed to send packet: {stderr}")]
    ToolFailed { code: Option<i32>, stderr: String },

    #[error("Command timeout")]
    Timeout,

    #[error("Unexpected error: {0}")]
    Spawn(#[source] std::io::Error),
}

impl DispatchError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MacNotConfigured => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Conditions that stop the process before the listener is bound
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("'{command}' command not found")]
    ToolNotFound { command: String },

    #[error("failed to run '{command}': {source}")]
    ToolProbe {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configured MAC address is invalid: {0}")]
    InvalidMac(#[from] MacError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DispatchError::MacNotConfigured.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DispatchError::Timeout.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            DispatchError::InvalidMac(MacError::InvalidLength(3)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        let err = DispatchError::ToolFailed {
            code: Some(1),
            stderr: "no route to host".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to send packet: no route to host");
        assert_eq!(DispatchError::Timeout.to_string(), "Command timeout");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        assert_eq!(
            DispatchError::Spawn(io).to_string(),
            "Unexpected error: No such file or directory"
        );
    }
}
