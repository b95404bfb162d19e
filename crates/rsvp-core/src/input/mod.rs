//! Input abstraction layer.

mod keymap;
mod mock;


pub use keymap::Keymap;
pub use mock::{MockInput, ScriptedInput};

/// Discrete keys the reader understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Space,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Char(char),
}

/// One key press as reported by the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    /// Host focus is inside a text field; the reader must not react.
    pub in_text_input: bool,
}

impl KeyEvent {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            in_text_input: false,
        }
    }

    pub const fn typed(key: Key) -> Self {
        Self {
            key,
            in_text_input: true,
        }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error>;
}
