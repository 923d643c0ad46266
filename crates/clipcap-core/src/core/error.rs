//! Clipcap Error Definitions
//!
//! Defines error types used throughout the project.
//!
//! The caption pipeline itself never fails — malformed spans are
//! dropped and an empty result is an ordinary outcome. Errors here
//! cover the surfaces around the pipeline: transcript file ingestion
//! and overlay configuration.

use thiserror::Error;

use super::transcript::ParseError;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Transcript Errors
    // =========================================================================
    #[error("Transcript file not found: {0}")]
    TranscriptNotFound(String),

    #[error("Unsupported transcript format: {0}")]
    UnsupportedTranscriptFormat(String),

    #[error("Transcript parse error: {0}")]
    TranscriptParse(#[from] ParseError),

    // =========================================================================
    // Overlay Errors
    // =========================================================================
    #[error("Invalid overlay config: {0}")]
    InvalidOverlayConfig(String),

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;
