//! Overlay Rendering Module
//!
//! The back half of the caption pipeline: maps classified caption
//! segments onto style profiles, compiles them into time-gated render
//! directives, and serializes the directive list into FFmpeg
//! `drawtext` filtergraph syntax for the compositor.

mod directives;
mod filter;
mod style;

pub use directives::{compile, compile_overlay, RenderDirective};
pub use filter::{escape_drawtext_value, to_drawtext_filter, to_filter_string};
pub use style::{OverlayConfig, StyleProfile};
