//! Overlap Selection and Time Normalization
//!
//! The first two stages of the caption pipeline: choose the transcript
//! spans that intersect the clip window, then rewrite their timestamps
//! from absolute video time into clip-relative time.

use tracing::{debug, warn};

use super::hooks::is_hook_text;
use super::models::{CaptionSegment, ClipWindow};
use crate::core::transcript::TranscriptSpan;

/// Selects the transcript spans overlapping the clip's caption range.
///
/// A span is kept iff it intersects `[window.origin(),
/// window.requested_end]`; endpoints count, so a span ending exactly at
/// the origin is still selected. Input order is preserved and inputs
/// are never mutated. Sortedness of the transcript is not assumed.
pub fn select_overlapping<'a>(
    transcript: &'a [TranscriptSpan],
    window: &ClipWindow,
) -> Vec<&'a TranscriptSpan> {
    let range = window.caption_range();
    transcript
        .iter()
        .filter(|span| range.overlaps(&span.time_range()))
        .collect()
}

/// Rewrites selected spans into clip-relative caption segments.
///
/// The effective origin is the encoder-realized start when present,
/// otherwise the requested start. Relative starts are clamped to zero;
/// relative ends are deliberately NOT clamped to the clip duration, so
/// a caption may outlive a hard cut rather than vanish mid-word.
///
/// A span survives only if it is valid ([`TranscriptSpan::is_valid`]),
/// begins inside the clip (`rel_start < duration`), and remains
/// non-degenerate after shifting. Failing spans are silently dropped;
/// this never errors.
pub fn normalize(spans: &[&TranscriptSpan], window: &ClipWindow) -> Vec<CaptionSegment> {
    let origin = window.origin();
    let duration = window.duration();

    let mut segments = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_valid() {
            debug!("Dropping invalid transcript span: {:?}", span);
            continue;
        }

        let start_sec = (span.start_sec - origin).max(0.0);
        let end_sec = span.end_sec - origin;

        if start_sec >= duration || end_sec <= start_sec {
            debug!(
                "Dropping span outside clip: rel {:.3}~{:.3}, duration {:.3}",
                start_sec, end_sec, duration
            );
            continue;
        }

        segments.push(CaptionSegment::new(span.text.trim(), start_sec, end_sec));
    }

    segments
}

/// Runs the full segment synthesis pipeline: select, normalize, and
/// classify hooks.
///
/// Pure function of its inputs; identical `(transcript, window)` pairs
/// always yield identical segments. An invalid window or a transcript
/// with no usable overlap yields an empty list, never an error.
pub fn build_segments(transcript: &[TranscriptSpan], window: &ClipWindow) -> Vec<CaptionSegment> {
    if !window.is_valid() {
        warn!(
            "Invalid clip window ({:.3}~{:.3}), producing no captions",
            window.requested_start, window.requested_end
        );
        return Vec::new();
    }

    let selected = select_overlapping(transcript, window);
    let segments = normalize(&selected, window);

    let total = segments.len();
    segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            let hook = is_hook_text(&segment.text, index, total);
            segment.with_hook(hook)
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
