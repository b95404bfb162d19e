use alloc::collections::VecDeque;

use super::{InputProvider, KeyEvent};

/// No-hardware input source for hosts that drive the engine programmatically.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error> {
        Ok(None)
    }
}

/// Replays queued key events, one per poll.
#[derive(Default, Debug, Clone)]
pub struct ScriptedInput {
    events: VecDeque<KeyEvent>,
}

impl ScriptedInput {
    pub fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.events.push_back(event);
    }

    pub fn is_drained(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputProvider for ScriptedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
