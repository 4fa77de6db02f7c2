use thiserror::Error;

/// Errors that end the run with exit code 1.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("--destinations flag is required and cannot be empty.")]
    MissingDestinations,

    #[error("Error marshaling JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Error writing results: {0}")]
    Write(#[from] std::io::Error),
}
