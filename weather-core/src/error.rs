use thiserror::Error;

/// Why a weather fetch produced no data.
///
/// All variants are non-fatal to the app: a failed fetch is logged and the
/// previously displayed values persist.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to reach the weather service: {0}")]
    Request(#[from] reqwest::Error),

    /// Status is carried as a plain `u16` so callers and tests can construct
    /// this variant without depending on reqwest.
    #[error("Weather request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse weather response JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
