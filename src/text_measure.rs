//! Unicode-aware text measurement for bubble sizing
//! Wrapping happens here, before layout, so the renderer draws exactly
//! the lines that were measured.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a grapheme cluster in terminal cells.
fn grapheme_width(grapheme: &str) -> usize {
    // ZWJ sequences, emoji presentation and skin tones render as one wide pair.
    if grapheme
        .chars()
        .any(|c| matches!(c as u32, 0x200D | 0xFE0F | 0x1F3FB..=0x1F3FF))
    {
        return 2;
    }
    grapheme.width()
}

/// Display width of a string in terminal cells.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

/// Wrap text at word boundaries into lines at most `max_width` cells wide.
///
/// Explicit newlines are hard breaks. Words wider than a full line are
/// force-broken at grapheme boundaries. Whitespace at a wrap point is
/// dropped. Empty input produces no lines.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_width == 0 {
        // Nothing fits; keep hard line breaks only.
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        wrap_line(raw_line, max_width, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, max_width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in line.split_word_bounds() {
        let word_width = display_width(word);

        if current_width + word_width > max_width {
            if current_width > 0 {
                lines.push(current.trim_end().to_string());
                current.clear();
                current_width = 0;
            }

            if word_width > max_width {
                break_graphemes(word, max_width, lines, &mut current, &mut current_width);
                continue;
            }

            // A wrap break swallows the whitespace that caused it.
            if word.chars().all(char::is_whitespace) {
                continue;
            }
        }

        current.push_str(word);
        current_width += word_width;
    }

    lines.push(current);
}

/// Break a segment wider than a full line at grapheme boundaries.
fn break_graphemes(
    segment: &str,
    max_width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for grapheme in segment.graphemes(true) {
        let width = grapheme_width(grapheme);
        if *current_width + width > max_width && !current.is_empty() {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push_str(grapheme);
        *current_width += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_cjk() {
        // CJK ideographs occupy two cells each.
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("hi你好"), 6);
    }

    #[test]
    fn test_display_width_combining_mark() {
        // e + combining acute is one user-perceived character.
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap_words("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_word_boundary() {
        assert_eq!(wrap_words("hello world", 8), vec!["hello", "world"]);
    }

    #[test]
    fn test_wrap_multiple_words() {
        assert_eq!(
            wrap_words("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_force_breaks_long_word() {
        assert_eq!(wrap_words("abcdefghij", 5), vec!["abcde", "fghij"]);
    }

    #[test]
    fn test_wrap_honors_hard_newlines() {
        assert_eq!(wrap_words("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_input() {
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_words("a\nb", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_cjk() {
        // Width 5 fits two ideographs (4 cells), the third wraps.
        assert_eq!(wrap_words("你好世界", 5), vec!["你好", "世界"]);
    }

    #[test]
    fn test_wrap_drops_break_whitespace() {
        let lines = wrap_words("end   start", 4);
        assert_eq!(lines, vec!["end", "star", "t"]);
    }
}
