use anyhow::Result;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response, StatusCode};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::ProbeOutcome;

pub async fn probe_http(url: &str, request_timeout: Duration) -> ProbeOutcome {
    let client = match Client::builder().timeout(request_timeout).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("http probe {} could not build client: {:#}", url, e);
            return ProbeOutcome::failed(
                format!("HTTP GET request to {} failed: {:#}.", url, e),
                Duration::ZERO,
            );
        }
    };

    debug!("http probe {} starting (timeout {:?})", url, request_timeout);
    let start = Instant::now();
    let status = fetch_status(&client, url).await;
    let elapsed = start.elapsed();

    match status {
        Ok((status, text)) if status.is_success() => {
            info!("http probe {} success: {} in {:?}", url, text, elapsed);
            ProbeOutcome::success(
                format!("HTTP GET request to {} successful (Status: {}).", url, text),
                elapsed,
            )
        }
        Ok((_, text)) => {
            warn!("http probe {} non-success status: {}", url, text);
            ProbeOutcome::failed(
                format!("HTTP GET request to {} returned non-success status: {}.", url, text),
                elapsed,
            )
        }
        Err(e) => {
            warn!("http probe {} failed: {:#}", url, e);
            ProbeOutcome::failed(format!("HTTP GET request to {} failed: {:#}.", url, e), elapsed)
        }
    }
}

/// Only the status line matters; the body is never read and the response
/// is dropped before returning so the connection is released.
async fn fetch_status(client: &Client, url: &str) -> Result<(StatusCode, String)> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    let text = status_text(&resp);
    drop(resp);
    Ok((status, text))
}

/// Status line as the server sent it, e.g. `520 Origin Error`.
fn status_text(resp: &Response) -> String {
    let status = resp.status();
    // hyper only records the phrase when it differs from the canonical one
    let reason = resp
        .extensions()
        .get::<ReasonPhrase>()
        .map(|r| String::from_utf8_lossy(r.as_bytes()).into_owned())
        .or_else(|| status.canonical_reason().map(str::to_string));
    match reason {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
