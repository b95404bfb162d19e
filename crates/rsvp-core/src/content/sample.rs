use super::Content;

pub const SAMPLE_TITLE: &str = "Speed Reader";
pub const SAMPLE_SOURCE: &str = "Drop in a link, paste text, or upload PDF";

/// Text shown before anything has been loaded.
pub const SAMPLE_TEXT: &str = "Drop in a URL, paste text, or upload a PDF to get started. This speed \
reader transforms any content into rapid serial visual presentation format, allowing you to read at \
speeds far beyond traditional reading. The technique displays words one at a time at a fixed focal \
point, eliminating eye movements and reducing subvocalization.";

pub fn sample_content() -> Content {
    Content::new(SAMPLE_TITLE, SAMPLE_SOURCE, SAMPLE_TEXT)
}
