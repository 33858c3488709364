// Request outcome returned by `/wol`

use chrono::{Local, SecondsFormat};
use serde::Serialize;

use super::error::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Outcome {
    pub fn success(message: String) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message,
            timestamp: Some(timestamp()),
        }
    }
}

impl From<&DispatchError> for Outcome {
    fn from(err: &DispatchError) -> Self {
        // Unconfigured MAC is a caller-side condition, reported without a timestamp
        let timestamp = match err {
            DispatchError::MacNotConfigured => None,
            _ => Some(timestamp()),
        };
        Self {
            status: OutcomeStatus::Error,
            message: err.to_string(),
            timestamp,
        }
    }
}

/// Current local time in ISO-8601 with microseconds and UTC offset
pub fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
