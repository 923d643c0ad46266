//! Overlay Style Configuration
//!
//! Two style profiles only — normal and hook — mirroring the matching
//! server-side renderer so client and server output stay visually
//! indistinguishable. Placement is always horizontally centered;
//! vertically the text sits a fixed pixel offset above the bottom
//! edge, defaulting to half the canvas height (true vertical center),
//! which is the product styling for short-form vertical video rather
//! than the conventional lower-third.

use serde::{Deserialize, Serialize};

use crate::core::{CoreError, CoreResult, Size2D};

// =============================================================================
// Style Profile
// =============================================================================

/// Visual style for one caption class (normal or hook)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Font size in pixels
    pub font_size: u32,
    /// Text color in hex format (#RRGGBB)
    pub font_color: String,
    /// Background box color in hex format (#RRGGBB)
    pub box_color: String,
    /// Background box opacity (0.0 = transparent, 1.0 = opaque)
    pub box_opacity: f64,
    /// Background box border width in pixels
    pub box_border_w: u32,
}

impl StyleProfile {
    /// Default styling for regular caption words
    pub fn normal() -> Self {
        Self {
            font_size: 48,
            font_color: "#FFFFFF".to_string(),
            box_color: "#000000".to_string(),
            box_opacity: 0.5,
            box_border_w: 12,
        }
    }

    /// Louder styling for hook words: larger, gold, denser box
    pub fn hook() -> Self {
        Self {
            font_size: 58,
            font_color: "#FFD700".to_string(),
            box_color: "#000000".to_string(),
            box_opacity: 0.65,
            box_border_w: 12,
        }
    }

    fn validate(&self, label: &str) -> CoreResult<()> {
        if self.font_size == 0 {
            return Err(CoreError::InvalidOverlayConfig(format!(
                "{} font size must be greater than 0",
                label
            )));
        }
        if !is_valid_hex_color(&self.font_color) {
            return Err(CoreError::InvalidOverlayConfig(format!(
                "Invalid {} font color: {}",
                label, self.font_color
            )));
        }
        if !is_valid_hex_color(&self.box_color) {
            return Err(CoreError::InvalidOverlayConfig(format!(
                "Invalid {} box color: {}",
                label, self.box_color
            )));
        }
        if !self.box_opacity.is_finite() || !(0.0..=1.0).contains(&self.box_opacity) {
            return Err(CoreError::InvalidOverlayConfig(format!(
                "{} box opacity must be within 0.0..=1.0",
                label
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Overlay Config
// =============================================================================

/// Configuration for directive compilation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayConfig {
    /// Output canvas size in pixels
    pub canvas: Size2D,
    /// Vertical anchor: pixel offset of the text baseline from the
    /// bottom edge. Absence means half the canvas height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_offset_px: Option<u32>,
    /// Hard ceiling on directives per compilation; segments beyond it
    /// are dropped whole, never truncated mid-text
    pub max_directives: usize,
    /// Style for regular caption words
    pub normal: StyleProfile,
    /// Style for hook caption words
    pub hook: StyleProfile,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            canvas: Size2D::default(),
            bottom_offset_px: None,
            max_directives: 20,
            normal: StyleProfile::normal(),
            hook: StyleProfile::hook(),
        }
    }
}

impl OverlayConfig {
    /// Sets the canvas size
    pub fn with_canvas(mut self, canvas: Size2D) -> Self {
        self.canvas = canvas;
        self
    }

    /// Sets the vertical offset from the bottom edge
    pub fn with_bottom_offset(mut self, offset_px: u32) -> Self {
        self.bottom_offset_px = Some(offset_px);
        self
    }

    /// Sets the directive ceiling
    pub fn with_max_directives(mut self, max: usize) -> Self {
        self.max_directives = max;
        self
    }

    /// Effective vertical offset from the bottom edge
    pub fn bottom_offset(&self) -> u32 {
        self.bottom_offset_px.unwrap_or(self.canvas.height / 2)
    }

    /// Validates the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(CoreError::InvalidOverlayConfig(
                "Canvas dimensions must be non-zero".to_string(),
            ));
        }
        if self.bottom_offset() > self.canvas.height {
            return Err(CoreError::InvalidOverlayConfig(format!(
                "Bottom offset {} exceeds canvas height {}",
                self.bottom_offset(),
                self.canvas.height
            )));
        }
        if self.max_directives == 0 {
            return Err(CoreError::InvalidOverlayConfig(
                "Directive ceiling must be at least 1".to_string(),
            ));
        }
        self.normal.validate("normal")?;
        self.hook.validate("hook")?;
        Ok(())
    }
}

/// Validates hex color format (#RRGGBB)
fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    match color.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Style Profile Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_profiles_are_distinct() {
        let normal = StyleProfile::normal();
        let hook = StyleProfile::hook();

        assert!(hook.font_size > normal.font_size);
        assert_ne!(hook.font_color, normal.font_color);
        assert_ne!(hook.box_opacity, normal.box_opacity);
    }

    // -------------------------------------------------------------------------
    // Overlay Config Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_config() {
        let config = OverlayConfig::default();
        assert_eq!(config.max_directives, 20);
        assert!(config.bottom_offset_px.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bottom_offset_defaults_to_half_canvas_height() {
        let config = OverlayConfig::default().with_canvas(Size2D::new(1080, 1920));
        assert_eq!(config.bottom_offset(), 960);

        let config = config.with_bottom_offset(200);
        assert_eq!(config.bottom_offset(), 200);
    }

    #[test]
    fn test_validate_rejects_zero_canvas() {
        let config = OverlayConfig::default().with_canvas(Size2D::new(0, 1920));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_offset_past_canvas() {
        let config = OverlayConfig::default()
            .with_canvas(Size2D::new(1080, 1920))
            .with_bottom_offset(2000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_ceiling() {
        let config = OverlayConfig::default().with_max_directives(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_colors_and_opacity() {
        let mut config = OverlayConfig::default();
        config.normal.font_color = "white".to_string();
        assert!(config.validate().is_err());

        let mut config = OverlayConfig::default();
        config.hook.box_opacity = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_valid_hex_color() {
        assert!(is_valid_hex_color("#FFFFFF"));
        assert!(is_valid_hex_color("#ffd700"));
        assert!(!is_valid_hex_color("FFFFFF"));
        assert!(!is_valid_hex_color("#FFF"));
        assert!(!is_valid_hex_color("#GGGGGG"));
        assert!(!is_valid_hex_color(""));
    }
}
