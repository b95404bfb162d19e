//! Content model: loaded text, its metadata and the token sequence.

mod sample;
mod text_utils;


use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Range};

pub use sample::{SAMPLE_SOURCE, SAMPLE_TEXT, SAMPLE_TITLE, sample_content};
use text_utils::next_word_at;

/// Reasons a content load leaves the engine without anything to play.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadError {
    /// Tokenization produced zero words.
    EmptyContent,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => f.write_str("no readable words in content"),
        }
    }
}

impl core::error::Error for LoadError {}

/// Ordered, immutable sequence of non-empty word tokens.
///
/// Tokens are stored as byte spans into the owned source text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenSequence {
    text: String,
    spans: Vec<Range<usize>>,
}

impl TokenSequence {
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Highest valid index, `0` for an empty sequence.
    pub fn last_index(&self) -> usize {
        self.spans.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.text[span.clone()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|span| &self.text[span.clone()])
    }

    /// Up to `count` tokens starting at `start`.
    pub fn window(&self, start: usize, count: usize) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .skip(start)
            .take(count)
            .map(|span| &self.text[span.clone()])
    }

    /// All tokens joined with single spaces.
    pub fn joined(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for (idx, token) in self.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push_str(token);
        }
        out
    }
}

/// Split `text` on runs of separators (ECMAScript `\s`), dropping empty pieces.
pub fn tokenize(text: &str) -> TokenSequence {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    while let Some(span) = next_word_at(text, cursor) {
        cursor = span.end;
        spans.push(span);
    }

    TokenSequence {
        text: String::from(text),
        spans,
    }
}

/// One loaded text with its opaque display metadata.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Content {
    title: String,
    source: String,
    tokens: TokenSequence,
}

impl Content {
    pub fn new(title: &str, source: &str, text: &str) -> Self {
        Self {
            title: String::from(title),
            source: String::from(source),
            tokens: tokenize(text),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
