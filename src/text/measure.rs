//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Emoji: 2 cells (most), including ZWJ sequences and flags
//! - Control and zero-width characters: 0 cells
//!
//! Text is walked by grapheme cluster (`unicode-segmentation`), so a base
//! character and its combining marks are measured, wrapped and cut as one
//! unit. Widths come from `unicode-width` (East Asian Width tables).

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single character in terminal cells.
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Display width of a grapheme cluster in terminal cells.
///
/// - `e` + combining acute → 1
/// - family ZWJ sequence → 2
/// - flag (regional indicator pair) → 2
/// - thumbs up + skin tone → 2
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Regional indicator pair
    if ('\u{1F1E6}'..='\u{1F1FF}').contains(&first) {
        return 2;
    }

    // ZWJ, VS16, skin tone, keycap
    if chars.any(|c| matches!(c, '\u{200D}' | '\u{FE0F}' | '\u{1F3FB}'..='\u{1F3FF}' | '\u{20E3}')) {
        return 2;
    }

    char_width(first)
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    s.graphemes(true).map(grapheme_width).sum()
}

/// Wrap text to a given width, breaking between grapheme clusters.
///
/// Explicit newlines always break. A cluster wider than `width` gets a line
/// of its own rather than looping forever.
///
/// # Arguments
///
/// * `text` - The text to wrap
/// * `width` - Maximum width per line (in cells)
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0usize;

    for grapheme in text.graphemes(true) {
        if grapheme == "\n" || grapheme == "\r\n" {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
            continue;
        }

        let gw = grapheme_width(grapheme);
        if current_width + gw > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        current_line.push_str(grapheme);
        current_width += gw;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Truncate text to fit within `max_width` cells.
///
/// If the text is wider than `max_width`, it is cut at a grapheme boundary
/// and `suffix` is appended, with the suffix width accounted for.
pub fn truncate_text(text: &str, max_width: usize, suffix: &str) -> String {
    if max_width == 0 {
        return String::new();
    }

    if string_width(text) <= max_width {
        return text.to_string();
    }

    let suffix_width = string_width(suffix);
    if suffix_width >= max_width {
        return take_width(suffix, max_width);
    }

    let mut result = take_width(text, max_width - suffix_width);
    result.push_str(suffix);
    result
}

/// Longest prefix of `text` that fits in `max_width` cells.
fn take_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0usize;

    for grapheme in text.graphemes(true) {
        let gw = grapheme_width(grapheme);
        if current_width + gw > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += gw;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILY: &str = "👨\u{200d}👩\u{200d}👧";

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn test_string_width_control_chars() {
        assert_eq!(string_width("\t"), 0);
        assert_eq!(string_width("a\tb"), 2);
    }

    #[test]
    fn test_string_width_cjk() {
        assert_eq!(string_width("你好"), 4);
    }

    #[test]
    fn test_string_width_grapheme_clusters() {
        assert_eq!(string_width("e\u{301}x"), 2);
        assert_eq!(string_width(FAMILY), 2);
        assert_eq!(string_width("🇺🇸"), 2);
        assert_eq!(string_width("👍🏽"), 2);
    }

    #[test]
    fn test_grapheme_width() {
        assert_eq!(grapheme_width(""), 0);
        assert_eq!(grapheme_width("a"), 1);
        assert_eq!(grapheme_width("你"), 2);
        assert_eq!(grapheme_width("e\u{301}"), 1);
        assert_eq!(grapheme_width(FAMILY), 2);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("hello world", 5);
        assert_eq!(lines, vec!["hello", " worl", "d"]);
        assert_eq!(wrap_text("hello world", 5).len(), 3);
    }

    #[test]
    fn test_wrap_text_newlines() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("a\r\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_text_wide_char_wider_than_width() {
        assert_eq!(wrap_text("你好", 1), vec!["你", "好"]);
    }

    #[test]
    fn test_wrap_text_keeps_clusters_whole() {
        assert_eq!(wrap_text("ae\u{301}b", 2), vec!["ae\u{301}", "b"]);
        assert_eq!(wrap_text(&format!("a{FAMILY}"), 2), vec!["a".to_string(), FAMILY.to_string()]);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10, "…"), "hello");
        assert_eq!(truncate_text("hello world", 6, "…"), "hello…");
        assert_eq!(truncate_text("", 5, "…"), "");
        assert_eq!(truncate_text("hello", 0, "…"), "");
    }

    #[test]
    fn test_truncate_text_cjk_boundary() {
        assert_eq!(truncate_text("你好世界", 4, "…"), "你…");
    }

    #[test]
    fn test_truncate_text_keeps_combining_marks() {
        assert_eq!(truncate_text("e\u{301}e\u{301}e\u{301}", 2, "…"), "e\u{301}…");
    }

    #[test]
    fn test_truncate_suffix_too_wide() {
        assert_eq!(truncate_text("hello world", 2, "..."), "..");
    }
}
