use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use rsvp_core::input::{InputProvider, Key, KeyEvent};

/// Longest tail of the paste buffer shown in the prompt line.
const PROMPT_PREVIEW_CHARS: usize = 48;

/// Non-blocking crossterm input with a paste prompt.
///
/// While the prompt is open every key is reported as typed into a text field,
/// so the keymap ignores it and the reader state stays untouched.
#[derive(Debug, Default)]
pub(super) struct TerminalInput {
    paste: Option<String>,
    pasted: Option<String>,
    quit: bool,
    redraw: bool,
}

impl TerminalInput {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Text submitted from the paste prompt, once.
    pub(super) fn take_pasted(&mut self) -> Option<String> {
        self.pasted.take()
    }

    /// Prompt or terminal size changed since the last call.
    pub(super) fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Prompt line while the paste field has focus.
    pub(super) fn prompt(&self) -> Option<String> {
        let buffer = self.paste.as_deref()?;
        let total = buffer.chars().count();
        let tail: String = buffer
            .chars()
            .skip(total.saturating_sub(PROMPT_PREVIEW_CHARS))
            .map(|ch| if ch.is_control() { ' ' } else { ch })
            .collect();
        Some(format!(
            "Paste text ({} chars, Enter loads, Esc cancels): {}",
            total, tail
        ))
    }

    fn handle_paste_key(&mut self, key: TermKeyEvent) -> Option<KeyEvent> {
        let buffer = self.paste.as_mut()?;
        self.redraw = true;

        match key.code {
            KeyCode::Esc => {
                debug!("input: paste prompt cancelled");
                self.paste = None;
            }
            KeyCode::Enter => {
                self.pasted = self.paste.take();
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(ch) => buffer.push(ch),
            KeyCode::Tab => buffer.push('\t'),
            _ => {}
        }

        translate_key(key.code).map(KeyEvent::typed)
    }

    fn handle_key(&mut self, key: TermKeyEvent) -> Option<KeyEvent> {
        if self.paste.is_some() {
            return self.handle_paste_key(key);
        }

        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c'));
        match key.code {
            _ if ctrl_c => self.quit = true,
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('p') => {
                debug!("input: paste prompt opened");
                self.paste = Some(String::new());
                self.redraw = true;
            }
            code => return translate_key(code).map(KeyEvent::new),
        }

        None
    }
}

impl InputProvider for TerminalInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(event) = self.handle_key(key) {
                        return Ok(Some(event));
                    }
                }
                Event::Paste(text) => {
                    if let Some(buffer) = self.paste.as_mut() {
                        buffer.push_str(&text);
                        self.redraw = true;
                    } else {
                        self.paste = Some(text);
                        self.redraw = true;
                    }
                }
                Event::Resize(..) => self.redraw = true,
                _ => {}
            }
        }

        Ok(None)
    }
}

fn translate_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(key)
}
