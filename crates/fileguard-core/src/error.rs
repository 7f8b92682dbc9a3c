//! Error taxonomy for the analysis pipeline.
//!
//! Every failure a `submit` can hit is one of four kinds:
//! - [`OversizeError`] — input rejected by the size gate
//! - [`ExtractionError`] — local I/O failure while reading the file
//! - [`ClassificationError`] — network failure or malformed remote response
//! - anything else — uncategorized
//!
//! All four are normalized at the orchestrator boundary into the single
//! `Error` state carrying a human-readable message; none escape as panics.

use thiserror::Error;

/// Candidate file exceeds the client-side size gate.
///
/// The display string is the exact user-facing message and must stay
/// stable; `limit` and `actual` carry the structured detail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("File is too large for this demo (Max 10MB)")]
pub struct OversizeError {
    pub limit: u64,
    pub actual: u64,
}

/// Local I/O failure while reading a file handle.
///
/// Unrecognized or binary content is never an extraction error; only an
/// unreadable handle is.
#[derive(Debug, Error)]
#[error("failed to read {name}: {source}")]
pub struct ExtractionError {
    pub name: String,
    #[source]
    pub source: std::io::Error,
}

/// Failure on the classification round-trip.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("failed to package file for classification: {0}")]
    Payload(#[from] ExtractionError),

    #[error("classifier request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classifier returned status {status}")]
    Status { status: u16 },

    #[error("classifier response was not a valid verdict: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("classifier backend is not healthy: {0}")]
    Unhealthy(String),
}

/// Union of everything a pipeline run can fail with.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Oversize(#[from] OversizeError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("unexpected analysis failure: {0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// Message surfaced to the presentation layer.
    ///
    /// Structured cause information is deliberately flattened here; the
    /// `Error` state carries exactly one string per failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
