//! Clipcap Core Library
//!
//! Caption synthesis and overlay-directive engine for short-form video
//! clips. Given a timestamped transcript and a clip window, the engine
//! selects the overlapping transcript spans, rewrites their timestamps
//! to clip-relative time (compensating for encoder keyframe snapping),
//! flags words that deserve visual "hook" emphasis, and compiles the
//! result into time-gated text-overlay directives that serialize into
//! FFmpeg `drawtext` filtergraph syntax.
//!
//! The engine is pure: no component performs I/O or retains state
//! across calls, so identical inputs always produce byte-identical
//! directive output. Caption failure is never fatal — malformed
//! transcript entries degrade to fewer (or no) captions rather than
//! aborting clip production.
//!
//! # Example
//!
//! ```rust,ignore
//! use clipcap_core::core::{
//!     captions::ClipWindow,
//!     render::{compile_overlay, to_filter_string, OverlayConfig},
//!     transcript::TranscriptSpan,
//! };
//!
//! let transcript = vec![TranscriptSpan::new("Hello world", 10.0, 11.0)];
//! let window = ClipWindow::new(10.0, 15.0);
//! let config = OverlayConfig::default();
//!
//! if let Some(directives) = compile_overlay(&transcript, &window, &config) {
//!     let filter = to_filter_string(&directives);
//!     // Pass `filter` to the compositor as a -vf argument.
//! }
//! ```

pub mod core;
