use std::io::{self, Write};

use crate::error::ProbeError;
use crate::prober::DestinationResult;

/// Render results as a JSON array indented with two spaces.
pub fn render_results(results: &[DestinationResult]) -> Result<String, ProbeError> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Write the rendered report followed by a newline.
///
/// A reader that went away early (broken pipe) is not an error.
pub fn write_report<W: Write>(out: &mut W, report: &str) -> Result<(), ProbeError> {
    match writeln!(out, "{}", report).and_then(|_| out.flush()) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(ProbeError::Write(e)),
        _ => Ok(()),
    }
}
