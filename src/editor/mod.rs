//! Single-line, readline-style editing core.
//!
//! Provides a rope-backed line buffer with a code-point cursor, Emacs-style
//! editing commands and a fixed key table, designed to be hosted by a
//! terminal UI that paints the text and feeds it key events.

mod buffer;
pub mod keymap;
pub mod signal;
pub mod word;

pub use buffer::{LineEditor, Surface};
pub use keymap::{Command, KeyParseError, key_name, parse_key};
pub use signal::SubscriptionId;
pub use word::WordAlphabet;

use crossterm::event::KeyEvent;

/// What a rendering layer needs from an editable line.
pub trait LineWidget {
    /// Text to paint.
    fn display_text(&self) -> String;

    /// Zero-based screen column of the cursor within `width` columns.
    fn cursor_column(&self, width: u16) -> u16;

    /// Offer a key. Returns the key back if it was not consumed.
    fn handle_key(&mut self, key: KeyEvent) -> Option<KeyEvent>;
}

impl LineWidget for LineEditor {
    fn display_text(&self) -> String {
        self.text()
    }

    fn cursor_column(&self, width: u16) -> u16 {
        Self::cursor_column(self, width)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        Self::handle_key(self, key)
    }
}
