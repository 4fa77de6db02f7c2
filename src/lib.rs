pub mod config;
pub mod destination;
pub mod error;
pub mod prober;
pub mod report;
pub mod runner;

use config::ProbeConfig;
use destination::parse_destinations;
use error::ProbeError;
use prober::{DestinationResult, NetworkChecker};
use runner::Runner;

/// Parse the raw `--destinations` value and probe every entry.
///
/// An absent or empty value is the only input error; entries that are
/// blank after trimming are skipped.
pub async fn probe_destinations(
    raw: Option<&str>,
    config: ProbeConfig,
) -> Result<Vec<DestinationResult>, ProbeError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ProbeError::MissingDestinations),
    };
    let destinations = parse_destinations(raw);
    let runner = Runner::new(NetworkChecker::new(config));
    Ok(runner.run(&destinations).await)
}
