//! Normalization of raw OCR text into canonical line-oriented form.
//!
//! OCR output arrives with inconsistent spacing, stray control characters
//! and blank lines. [`normalize`] turns it into an ordered sequence of
//! trimmed, single-spaced lines that the field rules can match against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered, cleaned lines derived from one receipt's raw OCR text.
///
/// Line order is preserved: top-to-bottom reading order matters when a
/// receipt carries several amount-like numbers (transaction amount vs.
/// account balance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    lines: Vec<String>,
}

impl NormalizedText {
    /// The normalized lines, in reading order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of normalized lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adjacent-line windows (pairs joined with a newline) for rules whose
    /// label and value may sit on consecutive lines.
    pub fn windows(&self) -> Vec<String> {
        if self.lines.len() < 2 {
            return self.lines.clone();
        }
        self.lines.windows(2).map(|pair| pair.join("\n")).collect()
    }

    /// All lines joined with newlines.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Normalize raw OCR text.
///
/// Whitespace runs collapse to a single space, non-whitespace control
/// characters are dropped, and lines that are empty after trimming are
/// removed. Case and punctuation are left alone; the field rules handle
/// those themselves. Any input, including the empty string, produces a
/// value, and the operation is idempotent on already-canonical text.
pub fn normalize(raw: &str) -> NormalizedText {
    let lines = raw
        .lines()
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect();
    NormalizedText { lines }
}

fn normalize_line(line: &str) -> String {
    let printable: String = line
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let text = normalize("Paid  to \t John   Doe");
        assert_eq!(text.lines(), ["Paid to John Doe"]);
    }

    #[test]
    fn test_drops_blank_lines_and_keeps_order() {
        let text = normalize("first\n\n   \nsecond\nthird\n");
        assert_eq!(text.lines(), ["first", "second", "third"]);
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        let text = normalize("UTR: 123456789012");
        assert_eq!(text.lines(), ["UTR: 123456789012"]);
    }

    #[test]
    fn test_strips_control_characters() {
        let text = normalize("Paid\u{0000} to\u{007f} John");
        assert_eq!(text.lines(), ["Paid to John"]);
    }

    #[test]
    fn test_empty_input_yields_empty_text() {
        assert!(normalize("").is_empty());
        assert!(normalize("  \n \t \n").is_empty());
    }

    #[test]
    fn test_idempotent_on_canonical_text() {
        let once = normalize("Paid to  John\n\n₹ 250.00\r\nCompleted");
        let twice = normalize(&once.joined());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_windows_join_adjacent_lines() {
        let text = normalize("a\nb\nc");
        assert_eq!(text.windows(), ["a\nb", "b\nc"]);
        assert_eq!(normalize("only").windows(), ["only"]);
    }
}
