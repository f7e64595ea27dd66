// offset.rs - 1-based character positions over UTF-8 byte indices.

/// Byte index of the 1-based character `position` in `subject`.
///
/// One past the last character maps to `subject.len()` so an empty tail can
/// still be searched. Anything further out is `None`.
pub fn byte_index(subject: &str, position: usize) -> Option<usize> {
    debug_assert!(position >= 1);
    let skip = position - 1;
    match subject.char_indices().nth(skip) {
        Some((idx, _)) => Some(idx),
        None if skip == char_len(subject) => Some(subject.len()),
        None => None,
    }
}

/// 1-based character position of the byte index `idx`.
pub fn char_position(subject: &str, idx: usize) -> usize {
    char_len(&subject[..idx]) + 1
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte length of the character starting at `idx`, or 0 at the end.
pub(crate) fn char_width_at(subject: &str, idx: usize) -> usize {
    subject[idx..].chars().next().map_or(0, char::len_utf8)
}
