//! SRT (SubRip) Transcript Parsing
//!
//! Parses SRT content into transcript spans. Blocks with empty text
//! are skipped (drop-not-fail, same as JSON ingestion); malformed
//! timestamps are reported as errors because they indicate a broken
//! file rather than a noisy entry.

use thiserror::Error;

use super::TranscriptSpan;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur during transcript parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid timestamp format
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Invalid block format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Unexpected end of input
    #[error("Unexpected end of input")]
    UnexpectedEnd,
}

// =============================================================================
// SRT Format
// =============================================================================

/// Parses SRT (SubRip) content into a list of transcript spans
///
/// # SRT Format
///
/// ```text
/// 1
/// 00:00:01,000 --> 00:00:04,000
/// First caption text
///
/// 2
/// 00:00:05,500 --> 00:00:08,000
/// Second caption text
/// with multiple lines
/// ```
pub fn parse_srt(content: &str) -> Result<Vec<TranscriptSpan>, ParseError> {
    let mut spans = Vec::new();
    let mut lines = content.lines().peekable();

    while lines.peek().is_some() {
        // Skip empty lines
        while lines.peek().is_some_and(|l| l.trim().is_empty()) {
            lines.next();
        }

        if lines.peek().is_none() {
            break;
        }

        // Sequence number (not validated; renumbered files are common)
        let _seq = lines.next().ok_or(ParseError::UnexpectedEnd)?;

        // Timestamp line
        let timestamp_line = lines.next().ok_or(ParseError::UnexpectedEnd)?;
        let (start_sec, end_sec) = parse_timestamp_line(timestamp_line)?;

        // Text (may span multiple lines)
        let mut text_lines = Vec::new();
        while let Some(line) = lines.peek() {
            if line.trim().is_empty() {
                break;
            }
            text_lines.push(lines.next().unwrap().trim().to_string());
        }

        // Empty text blocks are dropped, not errors
        let text = text_lines.join(" ");
        if text.trim().is_empty() {
            continue;
        }

        spans.push(TranscriptSpan::new(&text, start_sec, end_sec));
    }

    Ok(spans)
}

/// Parses an SRT timestamp line (e.g., "00:00:01,000 --> 00:00:04,000")
fn parse_timestamp_line(line: &str) -> Result<(f64, f64), ParseError> {
    let parts: Vec<&str> = line.split("-->").collect();
    if parts.len() != 2 {
        return Err(ParseError::InvalidFormat(format!(
            "Expected 'start --> end' format: {}",
            line
        )));
    }

    let start = parse_timestamp(parts[0].trim())?;
    let end = parse_timestamp(parts[1].trim())?;

    Ok((start, end))
}

/// Parses an SRT timestamp (e.g., "00:01:23,456") into seconds
fn parse_timestamp(ts: &str) -> Result<f64, ParseError> {
    // Format: HH:MM:SS,mmm or HH:MM:SS.mmm
    let normalized = ts.replace(',', ".");
    let parts: Vec<&str> = normalized.split(':').collect();

    if parts.len() != 3 {
        return Err(ParseError::InvalidTimestamp(ts.to_string()));
    }

    let hours: f64 = parts[0]
        .parse()
        .map_err(|_| ParseError::InvalidTimestamp(ts.to_string()))?;
    let minutes: f64 = parts[1]
        .parse()
        .map_err(|_| ParseError::InvalidTimestamp(ts.to_string()))?;
    let seconds: f64 = parts[2]
        .parse()
        .map_err(|_| ParseError::InvalidTimestamp(ts.to_string()))?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_srt_basic() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nFirst caption\n\n\
                       2\n00:00:05,500 --> 00:00:08,000\nSecond caption\n";
        let spans = parse_srt(content).unwrap();

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "First caption");
        assert_eq!(spans[0].start_sec, 1.0);
        assert_eq!(spans[0].end_sec, 4.0);
        assert_eq!(spans[1].start_sec, 5.5);
    }

    #[test]
    fn test_parse_srt_multiline_text_joined() {
        let content = "1\n00:00:00,000 --> 00:00:02,000\nLine one\nLine two\n";
        let spans = parse_srt(content).unwrap();

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Line one Line two");
    }

    #[test]
    fn test_parse_srt_dot_millisecond_separator() {
        let content = "1\n00:01:23.456 --> 00:01:25.000\nText\n";
        let spans = parse_srt(content).unwrap();

        assert!((spans[0].start_sec - 83.456).abs() < 0.001);
    }

    #[test]
    fn test_parse_srt_invalid_timestamp() {
        let content = "1\n00:00:xx,000 --> 00:00:04,000\nText\n";
        let result = parse_srt(content);

        assert!(matches!(result, Err(ParseError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_parse_srt_missing_arrow() {
        let content = "1\n00:00:01,000 00:00:04,000\nText\n";
        let result = parse_srt(content);

        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_srt_empty_input() {
        assert_eq!(parse_srt("").unwrap().len(), 0);
        assert_eq!(parse_srt("\n\n\n").unwrap().len(), 0);
    }
}
