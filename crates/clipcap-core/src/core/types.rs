//! Clipcap Core Type Definitions
//!
//! Defines fundamental types shared across the caption pipeline.

use serde::{Deserialize, Serialize};
use tracing::warn;

// =============================================================================
// Time Types
// =============================================================================

/// Time in seconds (floating point)
pub type TimeSec = f64;

// =============================================================================
// Spatial Types
// =============================================================================

/// 2D canvas size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: u32,
    pub height: u32,
}

impl Size2D {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Size2D {
    fn default() -> Self {
        // Vertical short-form canvas
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

// =============================================================================
// Time Range
// =============================================================================

/// Time range
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_sec: TimeSec,
    pub end_sec: TimeSec,
}

impl TimeRange {
    pub fn new(start_sec: TimeSec, end_sec: TimeSec) -> Self {
        if start_sec > end_sec {
            warn!(
                "TimeRange created with start > end ({} > {}), swapping",
                start_sec, end_sec
            );
            return Self {
                start_sec: end_sec,
                end_sec: start_sec,
            };
        }
        Self { start_sec, end_sec }
    }

    /// Returns duration in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Checks if a given time is within range
    pub fn contains(&self, time: TimeSec) -> bool {
        time >= self.start_sec && time <= self.end_sec
    }

    /// Checks if two ranges overlap.
    ///
    /// Endpoints count: a range ending exactly where another begins is
    /// still an overlap. Selection must not drop a span that merely
    /// touches the clip boundary.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.end_sec >= other.start_sec && self.start_sec <= other.end_sec
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size2d_default_is_vertical() {
        let size = Size2D::default();
        assert_eq!(size.width, 1080);
        assert_eq!(size.height, 1920);
    }

    #[test]
    fn test_time_range_duration() {
        let range = TimeRange::new(2.5, 7.5);
        assert_eq!(range.duration(), 5.0);
    }

    #[test]
    fn test_time_range_swaps_inverted_bounds() {
        let range = TimeRange::new(10.0, 4.0);
        assert_eq!(range.start_sec, 4.0);
        assert_eq!(range.end_sec, 10.0);
    }

    #[test]
    fn test_time_range_contains() {
        let range = TimeRange::new(1.0, 3.0);
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(0.99));
        assert!(!range.contains(3.01));
    }

    #[test]
    fn test_time_range_overlaps() {
        let a = TimeRange::new(0.0, 2.0);
        let b = TimeRange::new(1.0, 3.0);
        let c = TimeRange::new(4.0, 5.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_time_range_touching_endpoints_overlap() {
        let a = TimeRange::new(0.0, 2.0);
        let b = TimeRange::new(2.0, 4.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
