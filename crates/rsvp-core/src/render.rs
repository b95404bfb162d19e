//! App-level view models consumed by host renderers.

use crate::content::LoadError;

/// Word split around its optimal recognition point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FocalSplit<'a> {
    pub prefix: &'a str,
    /// The fixation character, empty only for an empty word.
    pub focus: &'a str,
    pub suffix: &'a str,
}

/// Split `word` so its focus letter sits left of center.
///
/// The split index is `floor(chars * 0.3)`, counted in characters so
/// multi-byte words never split inside a code point.
pub fn focal_split(word: &str) -> FocalSplit<'_> {
    let char_count = word.chars().count();
    let split = char_count * 3 / 10;

    let Some((focus_start, focus_char)) = word.char_indices().nth(split) else {
        return FocalSplit {
            prefix: word,
            focus: "",
            suffix: "",
        };
    };
    let focus_end = focus_start + focus_char.len_utf8();

    FocalSplit {
        prefix: &word[..focus_start],
        focus: &word[focus_start..focus_end],
        suffix: &word[focus_end..],
    }
}

/// Coarse reading-speed band shown next to the rate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpeedLabel {
    Slow,
    Normal,
    Fast,
    Turbo,
    Max,
}

impl SpeedLabel {
    pub const fn for_wpm(wpm: u16) -> Self {
        if wpm < 200 {
            Self::Slow
        } else if wpm <= 300 {
            Self::Normal
        } else if wpm <= 400 {
            Self::Fast
        } else if wpm < 888 {
            Self::Turbo
        } else {
            Self::Max
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::Turbo => "Turbo",
            Self::Max => "MAX",
        }
    }
}

/// Reading speed of an average adult, used for the time-saved estimate.
pub const AVERAGE_READER_WPM: u16 = 238;

/// Percent of reading time saved against [`AVERAGE_READER_WPM`], rounded.
pub const fn time_saved_percent(wpm: u16) -> u16 {
    if wpm <= AVERAGE_READER_WPM {
        return 0;
    }

    let gain = (wpm - AVERAGE_READER_WPM) as u32 * 100;
    let avg = AVERAGE_READER_WPM as u32;
    ((gain + avg / 2) / avg) as u16
}

/// Snapshot of everything a renderer needs for one frame.
pub enum Screen<'a> {
    Reading {
        title: &'a str,
        source: &'a str,
        chunk: &'a str,
        /// Present only for single-word chunks.
        focal: Option<FocalSplit<'a>>,
        playing: bool,
        wpm: u16,
        speed: SpeedLabel,
        time_saved_pct: u16,
        chunk_size: u8,
        word_index: usize,
        word_total: usize,
        start_index: usize,
        progress_pct: f32,
        minutes_remaining: u32,
        /// The input provider failed; keys may not be reaching the reader.
        input_fault: bool,
    },
    /// Content loaded but nothing to play.
    Empty {
        title: &'a str,
        source: &'a str,
        wpm: u16,
        chunk_size: u8,
        error: Option<LoadError>,
        input_fault: bool,
    },
}
