//! Custom error types for the report pipeline.

use thiserror::Error;

/// Report pipeline errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("API error: {0}")]
    Api(#[from] strava_client::StravaError),

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
