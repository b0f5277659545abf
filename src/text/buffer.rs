//! Character-offset editing over plain `String` documents
//!
//! Lyrics documents are addressed by character (Unicode scalar) offsets,
//! while `String` stores UTF-8. These helpers translate between the two and
//! perform the two splices the chord engine needs: removing a range and
//! inserting a token.

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `char_idx`
///
/// Offsets past the end map to `text.len()`.
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Clamp a character offset into `[0, char_len(text)]`
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    offset.min(char_len(text))
}

/// Return a copy of `text` with `token` inserted before character `at`
pub fn insert_at(text: &str, at: usize, token: &str) -> String {
    let byte = char_to_byte(text, at);
    let mut out = String::with_capacity(text.len() + token.len());
    out.push_str(&text[..byte]);
    out.push_str(token);
    out.push_str(&text[byte..]);
    out
}

/// Return a copy of `text` with characters `start..end` removed
pub fn remove_range(text: &str, start: usize, end: usize) -> String {
    let start_byte = char_to_byte(text, start);
    let end_byte = char_to_byte(text, end.max(start));
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start_byte]);
    out.push_str(&text[end_byte..]);
    out
}
