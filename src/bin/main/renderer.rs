use std::io::{self, Stdout, Write};

use anyhow::Context;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use log::warn;
use rsvp_core::render::{FocalSplit, Screen, SpeedLabel};

const HELP_LINE: &str =
    "space play/pause  <-/-> skip 10  up/down speed  r restart  s set start  1-3 chunk  p paste  q quit";
const PROGRESS_BAR_MIN: u16 = 10;
const INPUT_FAULT_BADGE: &str = "INPUT ERROR";

/// Raw-mode alternate screen, restored on drop.
pub(super) struct TerminalSession;

impl TerminalSession {
    pub(super) fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste, Hide)
            .context("failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), Show, DisableBracketedPaste, LeaveAlternateScreen)
        {
            warn!("terminal: restore failed: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            warn!("terminal: disable raw mode failed: {err}");
        }
    }
}

/// Draws [`Screen`] view models with crossterm.
pub(super) struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub(super) fn new() -> Self {
        Self { out: io::stdout() }
    }

    pub(super) fn render(&mut self, screen: Screen<'_>, prompt: Option<&str>) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        queue!(self.out, Clear(ClearType::All))?;

        match screen {
            Screen::Reading {
                title,
                source,
                chunk,
                focal,
                playing,
                wpm,
                speed,
                time_saved_pct,
                chunk_size,
                word_index,
                word_total,
                start_index,
                progress_pct,
                minutes_remaining,
                input_fault,
            } => {
                self.header(title, source)?;
                self.input_fault_badge(width, input_fault)?;
                self.progress_bar(width, progress_pct)?;
                queue!(
                    self.out,
                    MoveTo(0, 3),
                    Print(format!(
                        "word {}/{}  {:.0}%  ~{} min left",
                        word_index + 1,
                        word_total,
                        progress_pct,
                        minutes_remaining
                    ))
                )?;

                let center_row = height / 2;
                match focal {
                    Some(split) => self.focal_word(width, center_row, split)?,
                    None => self.centered(width, center_row, chunk)?,
                }

                let state = if playing { "PLAYING" } else { "PAUSED" };
                let saved = if time_saved_pct > 0 {
                    format!("  saves {time_saved_pct}% time")
                } else {
                    String::new()
                };
                queue!(
                    self.out,
                    MoveTo(0, height.saturating_sub(3)),
                    SetForegroundColor(speed_color(speed)),
                    Print(format!("{wpm} wpm {}", speed.as_str())),
                    ResetColor,
                    Print(format!(
                        "  {state}  chunk {chunk_size}  start @ {}{saved}",
                        start_index + 1
                    ))
                )?;
            }
            Screen::Empty {
                title,
                source,
                wpm,
                chunk_size,
                error,
                input_fault,
            } => {
                self.header(title, source)?;
                self.input_fault_badge(width, input_fault)?;
                let message = match error {
                    Some(err) => format!("Nothing to read: {err}"),
                    None => "Nothing to read".to_owned(),
                };
                self.centered(width, height / 2, &message)?;
                queue!(
                    self.out,
                    MoveTo(0, height.saturating_sub(3)),
                    Print(format!("{wpm} wpm  chunk {chunk_size}  press p to paste text"))
                )?;
            }
        }

        let bottom = height.saturating_sub(1);
        match prompt {
            Some(prompt) => queue!(
                self.out,
                MoveTo(0, bottom),
                SetAttribute(Attribute::Reverse),
                Print(truncate(prompt, width)),
                SetAttribute(Attribute::Reset)
            )?,
            None => queue!(self.out, MoveTo(0, bottom), Print(truncate(HELP_LINE, width)))?,
        }

        self.out.flush()
    }

    fn input_fault_badge(&mut self, width: u16, input_fault: bool) -> io::Result<()> {
        if !input_fault {
            return Ok(());
        }
        queue!(
            self.out,
            MoveTo(width.saturating_sub(INPUT_FAULT_BADGE.len() as u16), 1),
            SetForegroundColor(Color::Red),
            Print(INPUT_FAULT_BADGE),
            ResetColor
        )
    }

    fn header(&mut self, title: &str, source: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(title),
            SetAttribute(Attribute::Reset),
            Print("  "),
            SetForegroundColor(Color::DarkGrey),
            Print(source),
            ResetColor
        )
    }

    fn progress_bar(&mut self, width: u16, progress_pct: f32) -> io::Result<()> {
        let bar_width = width.saturating_sub(2).max(PROGRESS_BAR_MIN) as usize;
        let filled = ((progress_pct.clamp(0.0, 100.0) / 100.0) * bar_width as f32) as usize;
        let bar: String = (0..bar_width)
            .map(|idx| if idx < filled { '#' } else { '-' })
            .collect();
        queue!(self.out, MoveTo(0, 2), Print(format!("[{bar}]")))
    }

    fn centered(&mut self, width: u16, row: u16, text: &str) -> io::Result<()> {
        let len = text.chars().count() as u16;
        let col = width.saturating_sub(len) / 2;
        queue!(self.out, MoveTo(col, row), Print(text))
    }

    /// Keep the focus letter on the center column so the eye stays put.
    fn focal_word(&mut self, width: u16, row: u16, split: FocalSplit<'_>) -> io::Result<()> {
        let center = width / 2;
        let prefix_len = split.prefix.chars().count() as u16;
        queue!(
            self.out,
            MoveTo(center.saturating_sub(prefix_len), row),
            Print(split.prefix),
            SetForegroundColor(Color::Red),
            SetAttribute(Attribute::Bold),
            Print(split.focus),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print(split.suffix),
            MoveTo(center, row.saturating_sub(1)),
            SetForegroundColor(Color::DarkGrey),
            Print("v"),
            ResetColor
        )
    }
}

fn speed_color(speed: SpeedLabel) -> Color {
    match speed {
        SpeedLabel::Slow => Color::Blue,
        SpeedLabel::Normal => Color::Green,
        SpeedLabel::Fast => Color::Yellow,
        SpeedLabel::Turbo => Color::DarkYellow,
        SpeedLabel::Max => Color::Red,
    }
}

fn truncate(text: &str, width: u16) -> String {
    text.chars().take(width as usize).collect()
}
