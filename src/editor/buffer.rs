use crossterm::event::{KeyEvent, KeyEventKind};
use ropey::Rope;
use tracing::{debug, trace};
use unicode_width::UnicodeWidthChar;

use super::keymap::{self, Command};
use super::signal::{Observers, SubscriptionId};
use super::word::WordAlphabet;

/// Text and cursor column handed to the host for painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Full buffer text.
    pub text: String,
    /// Zero-based cursor column, present only when the editor has focus.
    pub cursor: Option<u16>,
}

/// A single-line text buffer with an Emacs-style cursor.
///
/// The cursor is a code-point offset in `0..=len()`. Every operation clamps
/// its inputs instead of failing, so the cursor can never leave that range.
/// Content changes are announced to observers registered with
/// [`LineEditor::subscribe`] and recorded in the dirty flag.
pub struct LineEditor {
    rope: Rope,
    cursor: usize,
    alphabet: WordAlphabet,
    observers: Observers,
    dirty: bool,
}

impl LineEditor {
    /// Create an empty editor with the default word alphabet.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create an editor holding `text`, cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: 0,
            alphabet: WordAlphabet::default(),
            observers: Observers::new(),
            dirty: false,
        }
    }

    /// Use `alphabet` for word motions and word kills.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: WordAlphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Use the characters of `chars` as the word alphabet.
    #[must_use]
    pub fn with_word_chars(self, chars: &str) -> Self {
        self.with_alphabet(WordAlphabet::new(chars))
    }

    /// The full text content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Length in code points.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor offset in code points.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn alphabet(&self) -> &WordAlphabet {
        &self.alphabet
    }

    /// Whether the content has changed since creation or the last
    /// [`mark_clean`](Self::mark_clean).
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Register a change observer, called with `(editor, new_text)`.
    ///
    /// While an observer runs, the editor it receives reports no
    /// observers of its own.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Self, &str) + 'static,
    {
        let id = self.observers.subscribe(Box::new(callback));
        debug!(?id, count = self.observers.len(), "change observer added");
        id
    }

    /// Remove a change observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // --- Core primitives ---

    /// Replace the whole buffer, clamping the cursor to the new length.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.commit();
    }

    /// Move the cursor, clamped to `0..=len()`.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len());
    }

    // --- Movement ---

    pub fn forward_char(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn backward_char(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub const fn beginning_of_line(&mut self) {
        self.cursor = 0;
    }

    pub fn end_of_line(&mut self) {
        self.cursor = self.len();
    }

    /// Move just past the next run of non-word characters, or to the end.
    pub fn forward_word(&mut self) {
        self.cursor = self
            .alphabet
            .separator_run_end(&self.rope, self.cursor)
            .unwrap_or_else(|| self.len());
    }

    /// Move to the start of the previous run of word characters, or to 0.
    pub fn backward_word(&mut self) {
        self.cursor = self
            .alphabet
            .word_run_start(&self.rope, self.cursor)
            .unwrap_or(0);
    }

    // --- Editing ---

    /// Insert `ch` at the cursor and step past it.
    ///
    /// No filtering happens here; key dispatch only routes characters that
    /// pass [`keymap::is_insertable`].
    pub fn insert_char(&mut self, ch: char) {
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
        self.commit();
    }

    /// Insert the insertable characters of `s` at the cursor.
    ///
    /// Used for pasted text. Control characters such as newlines are
    /// dropped. Nothing happens if no character survives the filter.
    pub fn insert_str(&mut self, s: &str) {
        let filtered: String = s.chars().filter(|ch| keymap::is_insertable(*ch)).collect();
        if filtered.is_empty() {
            return;
        }
        self.rope.insert(self.cursor, &filtered);
        self.cursor += filtered.chars().count();
        self.commit();
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.len() {
            self.rope.remove(self.cursor..=self.cursor);
            self.commit();
        }
    }

    /// Delete the character before the cursor.
    pub fn backward_delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.rope.remove(self.cursor..=self.cursor);
            self.commit();
        }
    }

    /// Clear the buffer.
    pub fn kill_whole_line(&mut self) {
        self.rope = Rope::new();
        self.cursor = 0;
        self.commit();
    }

    /// Delete from the cursor to the end.
    pub fn kill_line(&mut self) {
        self.rope.remove(self.cursor..);
        self.commit();
    }

    /// Delete what [`forward_word`](Self::forward_word) would move over.
    /// The cursor stays put.
    pub fn kill_word(&mut self) {
        let pos = self.cursor;
        self.forward_word();
        self.rope.remove(pos..self.cursor);
        self.cursor = pos;
        self.commit();
    }

    /// Delete what [`backward_word`](Self::backward_word) would move over.
    /// The cursor ends at the start of the deleted span.
    pub fn backward_kill_word(&mut self) {
        let pos = self.cursor;
        self.backward_word();
        self.rope.remove(self.cursor..pos);
        self.commit();
    }

    /// Swap the two characters before `max(2, cursor + 1)`, then move the
    /// cursor past them.
    ///
    /// At the end of the line this swaps the last two characters. With
    /// fewer than two characters only the cursor moves.
    pub fn transpose_chars(&mut self) {
        let len = self.len();
        let pos = (self.cursor + 1).max(2).min(len);
        self.cursor = pos;
        if len >= 2 {
            let first = self.rope.char(pos - 2);
            self.rope.remove(pos - 2..pos - 1);
            self.rope.insert_char(pos - 1, first);
            self.commit();
        }
    }

    /// Run `command` against the buffer.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::ForwardChar => self.forward_char(),
            Command::BackwardChar => self.backward_char(),
            Command::BeginningOfLine => self.beginning_of_line(),
            Command::EndOfLine => self.end_of_line(),
            Command::ForwardWord => self.forward_word(),
            Command::BackwardWord => self.backward_word(),
            Command::DeleteChar => self.delete_char(),
            Command::BackwardDeleteChar => self.backward_delete_char(),
            Command::KillWholeLine => self.kill_whole_line(),
            Command::KillLine => self.kill_line(),
            Command::KillWord => self.kill_word(),
            Command::BackwardKillWord => self.backward_kill_word(),
            Command::TransposeChars => self.transpose_chars(),
        }
    }

    // --- Host contract ---

    /// Dispatch a key press.
    ///
    /// Returns `None` when the key was consumed, or gives the key back when
    /// it is neither bound nor insertable so the host can handle it.
    /// Release events are always given back.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        if key.kind == KeyEventKind::Release {
            return Some(key);
        }
        if let Some(command) = Command::for_key(&key) {
            trace!(command = command.name(), cursor = self.cursor, "dispatch");
            self.execute(command);
            return None;
        }
        if let Some(ch) = keymap::insertable_char(&key) {
            trace!(?ch, cursor = self.cursor, "insert");
            self.insert_char(ch);
            return None;
        }
        debug!(code = ?key.code, modifiers = ?key.modifiers, "key not handled");
        Some(key)
    }

    /// Display width of the text before the cursor, in terminal columns.
    pub fn cursor_offset_width(&self) -> usize {
        self.rope
            .slice(..self.cursor)
            .chars()
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    /// Screen column of the cursor within `width` columns.
    ///
    /// Clamped to `width - 1` so the cursor never leaves the visible area.
    pub fn cursor_column(&self, width: u16) -> u16 {
        let column = u16::try_from(self.cursor_offset_width()).unwrap_or(u16::MAX);
        column.min(width.saturating_sub(1))
    }

    /// Text and cursor column for a `width`-column area.
    pub fn render(&self, width: u16, focused: bool) -> Surface {
        Surface {
            text: self.text(),
            cursor: focused.then(|| self.cursor_column(width)),
        }
    }

    /// Clamp the cursor, mark dirty and notify observers.
    ///
    /// Every content change funnels through here.
    fn commit(&mut self) {
        self.cursor = self.cursor.min(self.len());
        self.dirty = true;
        if self.observers.is_empty() {
            return;
        }
        let text = self.text();
        let mut observers = std::mem::take(&mut self.observers);
        observers.emit(self, &text);
        self.observers = observers;
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LineEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEditor")
            .field("text", &self.rope.to_string())
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .field("observers", &self.observers)
            .finish()
    }
}
