//! Render Directive Compilation
//!
//! Converts classified caption segments into an ordered list of
//! time-gated text-overlay directives. Compilation never fails:
//! malformed text is sanitized, an empty segment list compiles to
//! `None` (captions are optional — absence must be distinguishable
//! from failure so the caller can skip the overlay step cleanly), and
//! segments past the directive ceiling are dropped whole.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::filter::escape_drawtext_value;
use super::style::OverlayConfig;
use crate::core::captions::{build_segments, CaptionSegment, ClipWindow};
use crate::core::transcript::TranscriptSpan;
use crate::core::TimeSec;

// =============================================================================
// Render Directive
// =============================================================================

/// One compiled overlay instruction for the compositor.
///
/// Directives are emitted in input order (transcript chronological
/// order by construction), each independently time-gated to
/// `[start_sec, end_sec)`. Overlapping directives are legal and render
/// simultaneously; no de-overlap is performed here. Horizontal
/// placement is always centered; `y_offset_px` is measured up from the
/// bottom edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDirective {
    /// Caption text, already escaped for the compositor's filter syntax
    pub text: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Text color in hex format (#RRGGBB)
    pub font_color: String,
    /// Background box color in hex format (#RRGGBB)
    pub box_color: String,
    /// Background box opacity (0.0 ~ 1.0)
    pub box_opacity: f64,
    /// Background box border width in pixels
    pub box_border_w: u32,
    /// Gate start in clip-relative seconds
    pub start_sec: TimeSec,
    /// Gate end in clip-relative seconds
    pub end_sec: TimeSec,
    /// Vertical anchor: pixel offset from the bottom edge
    pub y_offset_px: u32,
}

// =============================================================================
// Compilation
// =============================================================================

/// Compiles caption segments into render directives.
///
/// Returns `None` when `segments` is empty. Per segment, `is_hook`
/// selects one of the two style profiles; text is escaped here so the
/// directive list is safe to serialize as-is. At most
/// `config.max_directives` directives are produced; the overflow is
/// dropped with a warning to protect the compositor from
/// directive-string overflow.
pub fn compile(segments: &[CaptionSegment], config: &OverlayConfig) -> Option<Vec<RenderDirective>> {
    if segments.is_empty() {
        return None;
    }

    if segments.len() > config.max_directives {
        warn!(
            "Caption segment count {} exceeds directive ceiling {}, dropping {}",
            segments.len(),
            config.max_directives,
            segments.len() - config.max_directives
        );
    }

    let y_offset_px = config.bottom_offset();
    let directives = segments
        .iter()
        .take(config.max_directives)
        .map(|segment| {
            let profile = if segment.is_hook {
                &config.hook
            } else {
                &config.normal
            };
            RenderDirective {
                text: escape_drawtext_value(&segment.text),
                font_size: profile.font_size,
                font_color: profile.font_color.clone(),
                box_color: profile.box_color.clone(),
                box_opacity: profile.box_opacity,
                box_border_w: profile.box_border_w,
                start_sec: segment.start_sec,
                end_sec: segment.end_sec,
                y_offset_px,
            }
        })
        .collect();

    Some(directives)
}

/// Runs the full pipeline from raw transcript to render directives:
/// selection, normalization, hook classification, and compilation.
pub fn compile_overlay(
    transcript: &[TranscriptSpan],
    window: &ClipWindow,
    config: &OverlayConfig,
) -> Option<Vec<RenderDirective>> {
    let segments = build_segments(transcript, window);
    compile(&segments, config)
}

// =============================================================================
// Tests
// =============================================================================
