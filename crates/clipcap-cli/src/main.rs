//! Clipcap CLI
//!
//! Headless front end for the caption overlay engine: reads a
//! transcript file (JSON records or SRT), takes the clip window and
//! canvas on the command line, and prints either the compiled
//! directive list as JSON or the ready-to-use FFmpeg `-vf` filter
//! string.
//!
//! A transcript with no usable overlap prints nothing and exits 0 —
//! no captions is an ordinary outcome, not a failure.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use clipcap_core::core::{
    captions::ClipWindow,
    render::{compile_overlay, to_filter_string, OverlayConfig},
    transcript::load_spans,
    Size2D,
};

// =============================================================================
// CLI Definition
// =============================================================================

/// Output format for the compiled overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Directive list as JSON
    Json,
    /// FFmpeg -vf filter string
    Filter,
}

/// Compile caption overlays for a clip of a longer video
#[derive(Parser, Debug)]
#[command(name = "clipcap", version, about)]
struct Cli {
    /// Transcript file (.json record array or .srt)
    #[arg(short, long)]
    transcript: PathBuf,

    /// Requested clip start in absolute video seconds
    #[arg(long)]
    start: f64,

    /// Requested clip end in absolute video seconds
    #[arg(long)]
    end: f64,

    /// Where the encoder actually began output, when it snapped to a
    /// keyframe before the requested start
    #[arg(long)]
    actual_start: Option<f64>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1920)]
    height: u32,

    /// Caption offset from the bottom edge in pixels
    /// (default: half the canvas height)
    #[arg(long)]
    bottom_offset: Option<u32>,

    /// Maximum number of caption directives to compile
    #[arg(long, default_value_t = 20)]
    max_captions: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Filter)]
    output: OutputFormat,
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let transcript = load_spans(&cli.transcript)
        .with_context(|| format!("Failed to load transcript {}", cli.transcript.display()))?;
    debug!("Loaded {} transcript spans", transcript.len());

    let mut window = ClipWindow::new(cli.start, cli.end);
    if let Some(actual_start) = cli.actual_start {
        window = window.with_actual_start(actual_start);
    }

    let mut config = OverlayConfig::default()
        .with_canvas(Size2D::new(cli.width, cli.height))
        .with_max_directives(cli.max_captions);
    if let Some(offset) = cli.bottom_offset {
        config = config.with_bottom_offset(offset);
    }
    config.validate().context("Invalid overlay configuration")?;

    let Some(directives) = compile_overlay(&transcript, &window, &config) else {
        debug!("No caption segments in clip window, skipping overlay");
        return Ok(());
    };

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&directives)?),
        OutputFormat::Filter => println!("{}", to_filter_string(&directives)),
    }

    Ok(())
}
