//! Playback engine: position model, playback clock and control surface.

use alloc::string::String;

use heapless::Vec as HeaplessVec;
use log::{debug, info, warn};

use crate::{
    content::{Content, LoadError},
    input::{InputProvider, KeyEvent, Keymap},
    render::{FocalSplit, Screen, SpeedLabel, focal_split, time_saved_percent},
    text_policy::header_label,
};

pub const DEFAULT_WPM: u16 = 300;
pub const MIN_WPM: u16 = 50;
pub const MAX_WPM: u16 = 888;
const WPM_STEP: u16 = 25;
const SKIP_WORDS: u16 = 10;
const MAX_CHUNK_WORDS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Words revealed per clock tick.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ChunkSize {
    #[default]
    One,
    Two,
    Three,
}

impl ChunkSize {
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Nearest allowed size; `0` becomes one word, anything above three becomes three.
    pub const fn clamped(words: u8) -> Self {
        match words {
            0 | 1 => Self::One,
            2 => Self::Two,
            _ => Self::Three,
        }
    }

    pub const fn get(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub const fn words(self) -> usize {
        self.get() as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
    pub skip_words: u16,
    pub chunk_size: ChunkSize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            min_wpm: MIN_WPM,
            max_wpm: MAX_WPM,
            wpm_step: WPM_STEP,
            skip_words: SKIP_WORDS,
            chunk_size: ChunkSize::One,
        }
    }
}

/// Control-surface commands. Numeric arguments are clamped, never rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Restart,
    Skip(i32),
    AdjustRate(i32),
    SetChunkSize(u8),
    SetStartPoint,
    /// Percent of the text, `0.0..=100.0`.
    SeekTo(f32),
}

/// Identity of one armed playback clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockId(u32);

impl ClockId {
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// The single live timer owned by a playing engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ClockArm {
    id: ClockId,
    wpm: u16,
    chunk_size: ChunkSize,
    interval_ms: u32,
    next_fire_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TickStep {
    Advanced,
    EndOfText,
}

/// Owns the playback state; every mutation goes through a command.
pub struct ReaderApp<IN>
where
    IN: InputProvider,
{
    content: Content,
    input: IN,
    config: ReaderConfig,
    keymap: Keymap,
    current_index: usize,
    start_index: usize,
    chunk_size: ChunkSize,
    playing: bool,
    clock: Option<ClockArm>,
    next_clock_id: u32,
    last_error: Option<LoadError>,
    input_error: Option<IN::Error>,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("commands.rs");
include!("runtime.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
