use super::{Key, KeyEvent};
use crate::app::{Command, ReaderConfig};

/// Translates key events into control-surface commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Keymap {
    skip_words: u16,
    wpm_step: u16,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&ReaderConfig::default())
    }
}

impl Keymap {
    pub const fn new(skip_words: u16, wpm_step: u16) -> Self {
        Self {
            skip_words,
            wpm_step,
        }
    }

    pub const fn from_config(config: &ReaderConfig) -> Self {
        Self::new(config.skip_words, config.wpm_step)
    }

    /// Command bound to `event`, or `None` when unbound or typed into a text field.
    pub fn command_for(&self, event: KeyEvent) -> Option<Command> {
        if event.in_text_input {
            return None;
        }

        let skip = i32::from(self.skip_words);
        let step = i32::from(self.wpm_step);

        let command = match event.key {
            Key::Space => Command::Toggle,
            Key::Left => Command::Skip(-skip),
            Key::Right => Command::Skip(skip),
            Key::Up => Command::AdjustRate(step),
            Key::Down => Command::AdjustRate(-step),
            Key::Home => Command::SeekTo(0.0),
            Key::End => Command::SeekTo(100.0),
            Key::Char(' ') => Command::Toggle,
            Key::Char('r' | 'R') => Command::Restart,
            Key::Char('s' | 'S') => Command::SetStartPoint,
            Key::Char(digit @ '1'..='3') => Command::SetChunkSize(digit as u8 - b'0'),
            Key::Char(_) => return None,
        };

        Some(command)
    }
}
