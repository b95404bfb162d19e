//! Header label shaping for the title and source lines.

use heapless::String as HeaplessString;

/// Characters kept before a header label is cut.
pub const HEADER_MAX_CHARS: usize = 48;
const ELLIPSIS: &str = "...";

/// Worst case: every kept char is four bytes, plus the ellipsis.
pub type HeaderLabel = HeaplessString<{ HEADER_MAX_CHARS * 4 + ELLIPSIS.len() }>;

/// One-line label for `text`: whitespace collapsed, cut at a word boundary
/// once it would pass [`HEADER_MAX_CHARS`], `...` appended when cut.
pub fn header_label(text: &str) -> HeaderLabel {
    let mut label = HeaderLabel::new();
    let mut chars = 0usize;

    for word in text.split_whitespace() {
        let gap = usize::from(chars > 0);
        let word_chars = word.chars().count();

        if chars + gap + word_chars > HEADER_MAX_CHARS {
            if chars == 0 {
                // A single oversized word is cut mid-word rather than dropped.
                for ch in word.chars().take(HEADER_MAX_CHARS) {
                    let _ = label.push(ch);
                }
            }
            let _ = label.push_str(ELLIPSIS);
            return label;
        }

        if gap > 0 {
            let _ = label.push(' ');
        }
        let _ = label.push_str(word);
        chars += gap + word_chars;
    }

    label
}
