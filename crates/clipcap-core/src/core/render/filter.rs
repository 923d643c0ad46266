//! Drawtext Filtergraph Serialization
//!
//! Serializes the compiled directive list into the FFmpeg filter
//! syntax the compositor parses. Caption text reaches this layer from
//! arbitrary transcripts, so everything is escaped for filtergraph
//! safety before it is interpolated.

use super::directives::RenderDirective;

/// Escapes arbitrary text for use inside a drawtext `text='...'` value.
///
/// FFmpeg filtergraphs treat `:` and `,` as separators and `\` as an
/// escape character, and drawtext expands `%{...}` expressions.
/// Escape order matters: backslashes first (so later escapes are not
/// doubled), then quotes, then separators, then `%`; newlines are
/// stripped afterwards so escaping a separator never runs into an
/// already-removed character, and the result is trimmed last.
pub fn escape_drawtext_value(raw: &str) -> String {
    raw.replace('\\', r"\\")
        .replace('\'', r"\'")
        .replace(':', r"\:")
        .replace(',', r"\,")
        .replace('%', r"\%")
        .replace(['\n', '\r'], "")
        .trim()
        .to_string()
}

/// Renders a single directive as a drawtext filter.
///
/// The time gate uses `enable='between(t,start,end)'`; overlapping
/// gates are legal and render simultaneously. Times are formatted to
/// millisecond precision so identical directives always serialize
/// byte-identically.
pub fn to_drawtext_filter(directive: &RenderDirective) -> String {
    format!(
        "drawtext=text='{}':fontsize={}:fontcolor={}:box=1:boxcolor={}@{:.2}:boxborderw={}:x=(w-text_w)/2:y=h-{}:enable='between(t,{:.3},{:.3})'",
        directive.text,
        directive.font_size,
        hex_to_filter_color(&directive.font_color),
        hex_to_filter_color(&directive.box_color),
        directive.box_opacity,
        directive.box_border_w,
        directive.y_offset_px,
        directive.start_sec,
        directive.end_sec,
    )
}

/// Renders the full directive list as a single video filter string,
/// chaining one drawtext per directive on the same stream
pub fn to_filter_string(directives: &[RenderDirective]) -> String {
    directives
        .iter()
        .map(to_drawtext_filter)
        .collect::<Vec<_>>()
        .join(",")
}

/// Converts `#RRGGBB` to the `0xRRGGBB` form drawtext expects
fn hex_to_filter_color(hex: &str) -> String {
    format!("0x{}", hex.trim_start_matches('#'))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::captions::CaptionSegment;
    use crate::core::render::{compile, OverlayConfig};

    fn directive(text: &str, start: f64, end: f64) -> RenderDirective {
        let segments = vec![CaptionSegment::new(text, start, end)];
        compile(&segments, &OverlayConfig::default()).unwrap().remove(0)
    }

    // -------------------------------------------------------------------------
    // Escaping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_drawtext_value(r"a\b'c:d"), r"a\\b\'c\:d");
    }

    #[test]
    fn test_escape_leaves_no_unescaped_specials() {
        let escaped = escape_drawtext_value(r"back\slash 'quote' and 50:50, ok");

        // Every special character must be preceded by a backslash
        let chars: Vec<char> = escaped.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if matches!(c, '\'' | ':' | ',') {
                assert_eq!(chars[i - 1], '\\', "unescaped {} in {}", c, escaped);
            }
        }
    }

    #[test]
    fn test_escape_strips_newlines_and_trims() {
        assert_eq!(escape_drawtext_value("  line\none\r\n "), "lineone");
    }

    #[test]
    fn test_escape_disables_percent_expansion() {
        assert_eq!(escape_drawtext_value("100% true"), r"100\% true");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_drawtext_value("Hello world"), "Hello world");
    }

    // -------------------------------------------------------------------------
    // Filter Serialization Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_drawtext_filter_shape() {
        let filter = to_drawtext_filter(&directive("Hello", 0.0, 1.5));

        assert!(filter.starts_with("drawtext=text='Hello'"));
        assert!(filter.contains("fontsize=48"));
        assert!(filter.contains("fontcolor=0xFFFFFF"));
        assert!(filter.contains("boxcolor=0x000000@0.50"));
        assert!(filter.contains("x=(w-text_w)/2"));
        assert!(filter.contains("y=h-960"));
        assert!(filter.contains("enable='between(t,0.000,1.500)'"));
    }

    #[test]
    fn test_filter_string_chains_with_commas() {
        let directives = vec![directive("one", 0.0, 1.0), directive("two", 1.0, 2.0)];
        let filter = to_filter_string(&directives);

        assert_eq!(filter.matches("drawtext=").count(), 2);
        assert!(filter.contains("'),drawtext="));
    }

    #[test]
    fn test_filter_string_deterministic() {
        let directives = vec![directive("it's 50:50", 0.0, 1.0)];
        assert_eq!(to_filter_string(&directives), to_filter_string(&directives));
    }
}
