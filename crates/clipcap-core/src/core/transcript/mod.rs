//! Transcript Ingestion Module
//!
//! Provides the transcript span model and ingestion from the two
//! interchange formats upstream collaborators produce:
//! - JSON record arrays (live captioning / speech-recognition output)
//! - SRT (SubRip)
//!
//! Ingestion is lenient where the format allows it: individual records
//! with missing text or invalid timestamps are dropped rather than
//! failing the batch, because captions are an optional enhancement
//! layer and a partial transcript still produces usable overlays.

mod models;
mod srt;

pub use models::{spans_from_json, TranscriptSpan};
pub use srt::{parse_srt, ParseError};

use std::path::Path;

use super::{CoreError, CoreResult};

/// Loads transcript spans from a file, dispatching on extension.
///
/// `.srt` files go through the SRT parser; `.json` files through the
/// lenient JSON record reader. Any other extension is rejected.
pub fn load_spans(path: &Path) -> CoreResult<Vec<TranscriptSpan>> {
    if !path.exists() {
        return Err(CoreError::TranscriptNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "srt" => Ok(parse_srt(&content)?),
        "json" => spans_from_json(&content),
        other => Err(CoreError::UnsupportedTranscriptFormat(other.to_string())),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_spans_missing_file() {
        let result = load_spans(Path::new("/nonexistent/transcript.json"));
        assert!(matches!(result, Err(CoreError::TranscriptNotFound(_))));
    }
}
