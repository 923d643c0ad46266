//! Caption Data Models
//!
//! Defines the clip window and the derived caption segment.
//!
//! A clip window carries both the boundaries the caller *requested*
//! and the start the encoder *actually* realized: encoders snap the
//! clip start to the nearest keyframe, and captions timed against the
//! requested start would drift by that gap.

use serde::{Deserialize, Serialize};

use crate::core::{TimeRange, TimeSec};

// =============================================================================
// Clip Window
// =============================================================================

/// Clip boundaries as intended by the caller versus as realized by the
/// encoder
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipWindow {
    /// Requested clip start in absolute video seconds
    pub requested_start: TimeSec,
    /// Requested clip end in absolute video seconds
    pub requested_end: TimeSec,
    /// Where the encoder actually began output (keyframe snapping).
    /// Absence means the encoder honored the requested start; it is
    /// distinct from an actual start of `0.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<TimeSec>,
}

impl ClipWindow {
    /// Creates a window with the requested boundaries
    pub fn new(requested_start: TimeSec, requested_end: TimeSec) -> Self {
        Self {
            requested_start,
            requested_end,
            actual_start: None,
        }
    }

    /// Sets the encoder-realized start time
    pub fn with_actual_start(mut self, actual_start: TimeSec) -> Self {
        self.actual_start = Some(actual_start);
        self
    }

    /// Effective time origin for caption normalization
    pub fn origin(&self) -> TimeSec {
        self.actual_start.unwrap_or(self.requested_start)
    }

    /// Clip duration in seconds, as requested
    pub fn duration(&self) -> TimeSec {
        self.requested_end - self.requested_start
    }

    /// Absolute time range captions can intersect: from the realized
    /// start through the requested end
    pub fn caption_range(&self) -> TimeRange {
        TimeRange::new(self.origin(), self.requested_end)
    }

    /// Returns true if the window has usable boundaries
    pub fn is_valid(&self) -> bool {
        self.requested_start.is_finite()
            && self.requested_end.is_finite()
            && self.requested_start >= 0.0
            && self.requested_end > self.requested_start
            && self.actual_start.is_none_or(|s| s.is_finite() && s >= 0.0)
    }
}

// =============================================================================
// Caption Segment
// =============================================================================

/// A caption segment in clip-relative time, ready for compilation.
///
/// Created fresh per clip-generation request and never mutated after
/// construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSegment {
    /// Segment text
    pub text: String,
    /// Start time in clip-relative seconds
    pub start_sec: TimeSec,
    /// End time in clip-relative seconds (may extend past the clip end
    /// so text is not cut mid-word)
    pub end_sec: TimeSec,
    /// Whether this segment gets hook (emphasis) styling
    pub is_hook: bool,
}

impl CaptionSegment {
    /// Creates a new segment without hook styling
    pub fn new(text: &str, start_sec: TimeSec, end_sec: TimeSec) -> Self {
        Self {
            text: text.to_string(),
            start_sec,
            end_sec,
            is_hook: false,
        }
    }

    /// Sets the hook flag
    pub fn with_hook(mut self, is_hook: bool) -> Self {
        self.is_hook = is_hook;
        self
    }

    /// Returns the duration of this segment in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Returns true if the segment is visible at the given clip time
    pub fn is_visible_at(&self, time_sec: TimeSec) -> bool {
        time_sec >= self.start_sec && time_sec < self.end_sec
    }
}

// =============================================================================
// Tests
// =============================================================================
