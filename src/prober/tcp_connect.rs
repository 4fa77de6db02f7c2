use anyhow::Result;
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration, Instant};
use tracing::{debug, info, warn};

use super::ProbeOutcome;

pub async fn probe_tcp(addr: &str, connect_timeout: Duration) -> ProbeOutcome {
    debug!("tcp connect {} starting (timeout {:?})", addr, connect_timeout);
    let start = Instant::now();
    let conn = connect(addr, connect_timeout).await;
    let elapsed = start.elapsed();

    match conn {
        Ok(stream) => {
            // nothing is exchanged, close right away
            drop(stream);
            info!("tcp connect {} success: {:?}", addr, elapsed);
            ProbeOutcome::success(format!("TCP connection to {} successful.", addr), elapsed)
        }
        Err(e) => {
            warn!("tcp connect {} failed: {:#}", addr, e);
            ProbeOutcome::failed(format!("TCP connection to {} failed: {:#}.", addr, e), elapsed)
        }
    }
}

async fn connect(addr: &str, connect_timeout: Duration) -> Result<TcpStream> {
    let conn_fut = TcpStream::connect(addr);
    let conn = timeout(connect_timeout, conn_fut).await??;
    Ok(conn)
}
