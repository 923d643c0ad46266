//! Transcript Span Model
//!
//! A transcript span is a timestamped piece of text in absolute video
//! seconds, produced by an external transcription collaborator. Spans
//! are immutable once created; ordering by start time is expected from
//! well-behaved sources but never assumed by consumers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{CoreResult, TimeRange, TimeSec};

// =============================================================================
// Transcript Span
// =============================================================================

/// A single timestamped transcript span (word or phrase)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSpan {
    /// Span text
    pub text: String,
    /// Start time in absolute video seconds
    pub start_sec: TimeSec,
    /// End time in absolute video seconds
    pub end_sec: TimeSec,
}

impl TranscriptSpan {
    /// Creates a new span with the given text and timing
    pub fn new(text: &str, start_sec: TimeSec, end_sec: TimeSec) -> Self {
        Self {
            text: text.to_string(),
            start_sec,
            end_sec,
        }
    }

    /// Returns the duration of this span in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Returns the span's absolute time range
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_sec, self.end_sec)
    }

    /// Returns true if this span carries usable text and timing.
    ///
    /// Usable means: non-empty after trimming, finite timestamps,
    /// non-negative start, and a positive duration. Spans failing this
    /// check are dropped by the pipeline, never surfaced as errors.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
            && self.start_sec.is_finite()
            && self.end_sec.is_finite()
            && self.start_sec >= 0.0
            && self.end_sec > self.start_sec
    }
}

// =============================================================================
// Lenient JSON Ingestion
// =============================================================================

/// Reads transcript spans from a JSON array of loosely typed records.
///
/// Each record is expected to look like `{"text": "...", "start": 1.0,
/// "end": 2.5}` (the `startSec`/`endSec` spellings are also accepted).
/// Records with missing text or non-numeric/invalid times are dropped,
/// not failed: one bad entry must never cost the whole batch.
///
/// Only a non-array document or invalid JSON is an error, since that
/// indicates the wrong file rather than a noisy transcript.
pub fn spans_from_json(content: &str) -> CoreResult<Vec<TranscriptSpan>> {
    let records: Vec<Value> = serde_json::from_str(content)?;

    let mut spans = Vec::with_capacity(records.len());
    for record in &records {
        match span_from_record(record) {
            Some(span) => spans.push(span),
            None => debug!("Dropping malformed transcript record: {}", record),
        }
    }

    Ok(spans)
}

/// Extracts a valid span from a single JSON record, if possible
fn span_from_record(record: &Value) -> Option<TranscriptSpan> {
    let text = record.get("text")?.as_str()?;
    let start = number_field(record, "start", "startSec")?;
    let end = number_field(record, "end", "endSec")?;

    let span = TranscriptSpan::new(text, start, end);
    span.is_valid().then_some(span)
}

fn number_field(record: &Value, key: &str, alias: &str) -> Option<f64> {
    record
        .get(key)
        .or_else(|| record.get(alias))
        .and_then(Value::as_f64)
}

// =============================================================================
// Tests
// =============================================================================
