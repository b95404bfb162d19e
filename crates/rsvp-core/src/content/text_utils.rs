use core::ops::Range;

/// Word separator, matching the ECMAScript `\s` class.
///
/// Unicode `White_Space` plus the byte-order mark, minus NEL (U+0085).
fn is_separator(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{FEFF}'
}

/// Byte span of the next separator-delimited word at or after `cursor`.
pub(super) fn next_word_at(text: &str, cursor: usize) -> Option<Range<usize>> {
    let rest = text.get(cursor..)?;
    let start = cursor + rest.find(|ch: char| !is_separator(ch))?;
    let end = text[start..]
        .find(is_separator)
        .map_or(text.len(), |offset| start + offset);

    Some(start..end)
}
