use tracing::debug;

use crate::destination::Destination;
use crate::prober::{Checker, DestinationResult, ProbeOutcome};

/// Probes destinations one at a time, in input order.
pub struct Runner<C> {
    checker: C,
}

impl<C: Checker> Runner<C> {
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    /// One result per destination, same order as `destinations`.
    pub async fn run(&self, destinations: &[String]) -> Vec<DestinationResult> {
        let mut results = Vec::with_capacity(destinations.len());
        for raw in destinations {
            let destination = Destination::classify(raw);
            let outcome = match &destination {
                Destination::Http(url) => self.checker.check_http(url).await,
                Destination::Tcp(addr) => self.checker.check_tcp(addr).await,
                Destination::Invalid(raw) => {
                    debug!("destination {} rejected before probing", raw);
                    ProbeOutcome::invalid_format(raw)
                }
            };
            results.push(outcome.into_result(destination.as_str()));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbeConfig;
    use crate::destination::parse_destinations;
    use crate::prober::test_support::serve_status;
    use crate::prober::{NetworkChecker, ProbeStatus};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingChecker {
        calls: Mutex<Vec<String>>,
    }

    impl Checker for RecordingChecker {
        async fn check_tcp(&self, addr: &str) -> ProbeOutcome {
            self.calls.lock().unwrap().push(format!("tcp {}", addr));
            ProbeOutcome::success(format!("tcp {}", addr), Duration::from_millis(3))
        }

        async fn check_http(&self, url: &str) -> ProbeOutcome {
            self.calls.lock().unwrap().push(format!("http {}", url));
            ProbeOutcome::failed(format!("http {}", url), Duration::from_millis(7))
        }
    }

    fn calls(runner: &Runner<RecordingChecker>) -> Vec<String> {
        runner.checker.calls.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn routes_by_classification() {
        let runner = Runner::new(RecordingChecker::default());
        let input = parse_destinations("http://a.test,db.internal:5432,https://b.test:8443/x");
        let results = runner.run(&input).await;

        assert_eq!(
            calls(&runner),
            vec!["http http://a.test", "tcp db.internal:5432", "http https://b.test:8443/x"]
        );
        assert_eq!(results[0].status, ProbeStatus::Failed);
        assert_eq!(results[0].duration, "7ms");
        assert_eq!(results[1].status, ProbeStatus::Success);
        assert_eq!(results[1].duration, "3ms");
    }

    #[tokio::test]
    async fn invalid_destination_never_reaches_checker() {
        let runner = Runner::new(RecordingChecker::default());
        let results = runner.run(&["localhost".to_string()]).await;

        assert!(calls(&runner).is_empty());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].destination, "localhost");
        assert_eq!(results[0].status, ProbeStatus::Failed);
        assert_eq!(results[0].duration, "0ms");
    }

    #[tokio::test]
    async fn one_result_per_token_in_order() {
        let runner = Runner::new(RecordingChecker::default());
        let input = parse_destinations(" a.com:80 , ,nohost, b.com:80,,");
        let results = runner.run(&input).await;

        let names: Vec<_> = results.iter().map(|r| r.destination.as_str()).collect();
        assert_eq!(names, vec!["a.com:80", "nohost", "b.com:80"]);
        for r in &results {
            let digits = r.duration.strip_suffix("ms").unwrap();
            assert!(digits.parse::<u64>().is_ok(), "bad duration {}", r.duration);
        }
    }

    #[tokio::test]
    async fn empty_input_gives_empty_results() {
        let runner = Runner::new(RecordingChecker::default());
        assert!(runner.run(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn failures_do_not_stop_later_destinations() {
        let ok_url = serve_status("200 OK").await;
        let missing_url = serve_status("404 Not Found").await;
        let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let closed_addr = closed.local_addr().unwrap().to_string();
        drop(closed);

        let config = ProbeConfig { tcp_timeout_ms: 1_000, http_timeout_ms: 2_000, ..ProbeConfig::default() };
        let runner = Runner::new(NetworkChecker::new(config));
        let input = vec![closed_addr.clone(), "bogus".to_string(), missing_url.clone(), ok_url.clone()];
        let results = runner.run(&input).await;

        let statuses: Vec<_> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![ProbeStatus::Failed, ProbeStatus::Failed, ProbeStatus::Failed, ProbeStatus::Success]
        );
        assert!(results[0].details.contains(&format!("TCP connection to {} failed:", closed_addr)));
        assert!(results[2].details.contains("returned non-success status:"));
        assert!(results[3].details.contains("successful (Status:"));
    }

    #[tokio::test]
    async fn repeat_runs_agree_on_status_and_details() {
        let url = serve_status("200 OK").await;
        let runner = Runner::new(NetworkChecker::default());
        let input = vec![url, "nope".to_string()];

        let first = runner.run(&input).await;
        let second = runner.run(&input).await;
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.status, b.status);
            assert_eq!(a.details, b.details);
        }
    }
}
