//! Line-editing primitives for the input row
//! Extracted for testability
//!
//! Positions are byte offsets that always sit on `char` boundaries, so
//! multibyte input can never be split.

/// Byte position of the character boundary before `pos`.
pub fn prev_char(input: &str, pos: usize) -> usize {
    input[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte position of the character boundary after `pos`.
pub fn next_char(input: &str, pos: usize) -> usize {
    input[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(input.len())
}

/// Start of the word before `pos`, skipping any whitespace in between.
pub fn prev_word(input: &str, pos: usize) -> usize {
    let before = input[..pos].trim_end();
    match before.char_indices().rfind(|(_, c)| c.is_whitespace()) {
        Some((i, c)) => i + c.len_utf8(),
        None => 0,
    }
}

/// Position after the word at `pos` and the whitespace that follows it.
pub fn next_word(input: &str, pos: usize) -> usize {
    let after = &input[pos..];
    let word_end = after.find(char::is_whitespace).unwrap_or(after.len());
    let rest = &after[word_end..];
    let ws_end = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
    pos + word_end + ws_end
}

/// Delete the word before `pos`, returning the new string and position.
pub fn delete_word_backward(input: &str, pos: usize) -> (String, usize) {
    let start = prev_word(input, pos);
    let mut out = input.to_string();
    out.drain(start..pos);
    (out, start)
}

/// Delete from `pos` to the end of the line.
pub fn delete_to_end(input: &str, pos: usize) -> String {
    input[..pos].to_string()
}

/// Delete from the start of the line to `pos`.
pub fn delete_to_start(input: &str, pos: usize) -> String {
    input[pos..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_char_ascii() {
        assert_eq!(prev_char("abc", 3), 2);
        assert_eq!(prev_char("abc", 1), 0);
        assert_eq!(prev_char("abc", 0), 0);
    }

    #[test]
    fn test_char_steps_multibyte() {
        let input = "aé你";
        assert_eq!(next_char(input, 0), 1);
        assert_eq!(next_char(input, 1), 3); // é is two bytes
        assert_eq!(next_char(input, 3), 6); // 你 is three bytes
        assert_eq!(prev_char(input, 6), 3);
        assert_eq!(prev_char(input, 3), 1);
    }

    #[test]
    fn test_prev_word_simple() {
        let input = "hello world";
        assert_eq!(prev_word(input, 11), 6);
        assert_eq!(prev_word(input, 6), 0);
        assert_eq!(prev_word(input, 5), 0);
    }

    #[test]
    fn test_prev_word_multiple_spaces() {
        let input = "hello   world";
        assert_eq!(prev_word(input, 13), 8);
        assert_eq!(prev_word(input, 8), 0);
    }

    #[test]
    fn test_prev_word_at_start() {
        assert_eq!(prev_word("hello", 0), 0);
    }

    #[test]
    fn test_next_word_simple() {
        let input = "hello world";
        assert_eq!(next_word(input, 0), 6);
        assert_eq!(next_word(input, 6), 11);
    }

    #[test]
    fn test_next_word_at_end() {
        assert_eq!(next_word("hello", 5), 5);
    }

    #[test]
    fn test_delete_word_backward() {
        let (out, pos) = delete_word_backward("hello world", 11);
        assert_eq!(out, "hello ");
        assert_eq!(pos, 6);
    }

    #[test]
    fn test_delete_word_backward_repeated() {
        let (s1, p1) = delete_word_backward("one two three", 13);
        assert_eq!(s1, "one two ");
        assert_eq!(p1, 8);

        let (s2, p2) = delete_word_backward(&s1, p1);
        assert_eq!(s2, "one ");
        assert_eq!(p2, 4);
    }

    #[test]
    fn test_delete_word_backward_multibyte() {
        let input = "héllo wörld";
        let (out, pos) = delete_word_backward(input, input.len());
        assert_eq!(out, "héllo ");
        assert_eq!(pos, 7); // é takes two bytes
    }

    #[test]
    fn test_delete_to_end() {
        assert_eq!(delete_to_end("hello world", 6), "hello ");
        assert_eq!(delete_to_end("hello world", 0), "");
        assert_eq!(delete_to_end("hello world", 11), "hello world");
    }

    #[test]
    fn test_delete_to_start() {
        assert_eq!(delete_to_start("hello world", 6), "world");
        assert_eq!(delete_to_start("hello world", 0), "hello world");
        assert_eq!(delete_to_start("hello world", 11), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(prev_word("", 0), 0);
        assert_eq!(next_word("", 0), 0);
        let (s, p) = delete_word_backward("", 0);
        assert_eq!(s, "");
        assert_eq!(p, 0);
    }

    #[test]
    fn test_hyphenated_word_is_one_word() {
        let input = "hello-world test";
        assert_eq!(prev_word(input, 11), 0);
        assert_eq!(next_word(input, 0), 12);
    }
}
