use std::path::PathBuf;

use clap::Parser;
use rsvp_core::app::{ChunkSize, DEFAULT_WPM, MAX_WPM, MIN_WPM, ReaderConfig};

/// Terminal speed reader: plays text back one chunk of words at a time.
#[derive(Debug, Parser)]
#[command(name = "rsvp", version, about)]
pub(super) struct Cli {
    /// Text file to read; `-` reads standard input. Without it a sample passage is shown.
    pub(super) path: Option<PathBuf>,

    /// Title shown above the text (defaults to the file name).
    #[arg(long)]
    pub(super) title: Option<String>,

    /// Initial reading speed in words per minute.
    #[arg(long, default_value_t = DEFAULT_WPM,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_WPM)..=i64::from(MAX_WPM)))]
    pub(super) wpm: u16,

    /// Words shown per flash.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub(super) chunk: u8,

    /// Write logs to this file (filtered by RUST_LOG).
    #[arg(long)]
    pub(super) log_file: Option<PathBuf>,
}

impl Cli {
    pub(super) fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            wpm: self.wpm,
            chunk_size: ChunkSize::clamped(self.chunk),
            ..ReaderConfig::default()
        }
    }
}
