//! Playback engine for rapid serial visual presentation.
//!
//! The crate owns tokenization, position arithmetic, the playback clock and the
//! command surface. Hosts feed it monotonic milliseconds and key events, and read
//! back a [`render::Screen`] view model.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod app;
pub mod content;
pub mod input;
pub mod render;
pub mod text_policy;
