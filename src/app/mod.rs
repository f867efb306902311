//! Terminal prompt hosting a [`LineEditor`].
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The prompt state
//! - [`Message`]: All events the prompt reacts to
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! [`run_script`] drives an editor from key names without a terminal.

mod event_loop;
mod input;
mod model;
mod update;

pub use input::handle_event;
pub use model::{Model, Outcome};
pub use update::{Message, update};

use anyhow::{Context, Result};

use crate::editor::{LineEditor, key_name, parse_key};

/// Prompt application: owns the terminal and runs the event loop.
#[derive(Debug, Clone, Default)]
pub struct App {
    initial_text: String,
    word_chars: Option<String>,
    prompt: String,
}

impl App {
    /// Create a prompt with an empty line and the default word alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `text` in the line, cursor at its end.
    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    /// Override the word alphabet.
    pub fn with_word_chars(mut self, chars: Option<String>) -> Self {
        self.word_chars = chars;
        self
    }

    /// Text painted before the editable line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The editor this prompt starts with.
    pub fn build_editor(&self) -> LineEditor {
        let mut editor = LineEditor::from_text(&self.initial_text);
        if let Some(chars) = &self.word_chars {
            editor = editor.with_word_chars(chars);
        }
        editor.end_of_line();
        editor
    }
}

/// Feed `keys`, given by name, to `editor` in order.
///
/// Returns the names of keys the editor did not consume.
///
/// # Errors
///
/// Returns an error naming the first key that does not parse; keys before
/// it have already been applied.
pub fn run_script<S: AsRef<str>>(editor: &mut LineEditor, keys: &[S]) -> Result<Vec<String>> {
    let mut unhandled = Vec::new();
    for name in keys {
        let name = name.as_ref();
        let key = parse_key(name).with_context(|| format!("Invalid key `{name}`"))?;
        if let Some(key) = editor.handle_key(key) {
            tracing::warn!(key = name, "key not handled by editor");
            unhandled.push(key_name(&key).unwrap_or_else(|| name.to_string()));
        }
    }
    Ok(unhandled)
}

#[cfg(test)]
mod tests;
