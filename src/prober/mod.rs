use crate::config::ProbeConfig;

pub mod http;
pub mod result;
pub mod tcp_connect;

pub use result::{format_duration, DestinationResult, ProbeOutcome, ProbeStatus};

/// The two network checks a destination can be routed to.
///
/// Implementations must turn every failure into a `FAILED` outcome; nothing
/// here is allowed to abort the run.
#[allow(async_fn_in_trait)]
pub trait Checker {
    async fn check_tcp(&self, addr: &str) -> ProbeOutcome;
    async fn check_http(&self, url: &str) -> ProbeOutcome;
}

/// Real checker backed by tokio sockets and reqwest.
#[derive(Debug, Clone, Default)]
pub struct NetworkChecker {
    config: ProbeConfig,
}

impl NetworkChecker {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl Checker for NetworkChecker {
    async fn check_tcp(&self, addr: &str) -> ProbeOutcome {
        tcp_connect::probe_tcp(addr, self.config.tcp_timeout()).await
    }

    async fn check_http(&self, url: &str) -> ProbeOutcome {
        http::probe_http(url, self.config.http_timeout()).await
    }
}
