use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeStatus {
    Success,
    Failed,
}

/// What a checker observed, before it is tied back to the input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: ProbeStatus,
    pub details: String,
    pub elapsed: Duration,
}

impl ProbeOutcome {
    pub fn success(details: String, elapsed: Duration) -> Self {
        Self { status: ProbeStatus::Success, details, elapsed }
    }

    pub fn failed(details: String, elapsed: Duration) -> Self {
        Self { status: ProbeStatus::Failed, details, elapsed }
    }

    /// Rejected before any network work, so no time is charged.
    pub fn invalid_format(raw: &str) -> Self {
        Self::failed(
            format!("Invalid destination format for TCP check: '{}'. Expected 'host:port'.", raw),
            Duration::ZERO,
        )
    }

    pub fn into_result(self, destination: &str) -> DestinationResult {
        DestinationResult {
            destination: destination.to_string(),
            status: self.status,
            details: self.details,
            duration: format_duration(self.elapsed),
        }
    }
}

/// One record of the JSON report. Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestinationResult {
    pub destination: String,
    pub status: ProbeStatus,
    pub details: String,
    pub duration: String,
}

/// Whole milliseconds, rounded, with an `ms` suffix.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{}ms", (elapsed.as_secs_f64() * 1000.0).round() as u64)
}
