use anyhow::Result;
use std::time::Duration;

/// Connect timeout for `host:port` destinations.
pub const DEFAULT_TCP_TIMEOUT_MS: u64 = 5_000;
/// Client-level timeout for `http(s)://` destinations.
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// Timeouts and log level for a run. The CLI always uses the defaults;
/// tests shorten the timeouts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub tcp_timeout_ms: u64,
    pub http_timeout_ms: u64,
    pub log_level: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            tcp_timeout_ms: DEFAULT_TCP_TIMEOUT_MS,
            http_timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            // stdout is reserved for the report, keep stderr quiet unless asked
            log_level: "warn".to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn tcp_timeout(&self) -> Duration {
        Duration::from_millis(self.tcp_timeout_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    /// Get the log level as a tracing::Level
    pub fn get_tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" | "warning" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(anyhow::anyhow!("Invalid log level: {}. Valid levels are: trace, debug, info, warn, error", self.log_level))
        }
    }
}
