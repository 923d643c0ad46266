//! Caption Segment Synthesis Module
//!
//! Turns a raw transcript plus a clip window into the validated,
//! clip-relative caption segments the overlay compiler consumes:
//!
//! 1. Overlap selection — keep the transcript spans intersecting the
//!    clip window.
//! 2. Time normalization — rewrite absolute timestamps to clip-relative
//!    time, compensating for encoder keyframe snapping.
//! 3. Hook classification — flag segments that deserve visual emphasis.
//!
//! Every step is a pure function of its inputs; identical inputs always
//! yield identical segments.

mod hooks;
mod models;
mod select;

pub use hooks::is_hook_text;
pub use models::{CaptionSegment, ClipWindow};
pub use select::{build_segments, normalize, select_overlapping};
