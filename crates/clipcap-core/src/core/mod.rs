//! Clipcap Core Engine
//!
//! Caption pipeline module.
//! Handles transcript ingestion, segment synthesis, and overlay
//! directive compilation.

pub mod captions;
pub mod render;
pub mod transcript;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
