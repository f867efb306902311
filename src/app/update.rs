use crossterm::event::KeyEvent;

use crate::editor::key_name;

use super::model::{Model, Outcome};

/// All events the prompt reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key for the editor.
    Key(KeyEvent),
    /// Bracketed paste.
    Paste(String),
    /// Accept the current line.
    Submit,
    /// Abandon the prompt.
    Cancel,
    /// Terminal resized to `(width, height)`.
    Resize(u16, u16),
}

/// Apply `msg` to `model`.
pub fn update(mut model: Model, msg: Message) -> Model {
    if model.is_done() {
        return model;
    }
    if matches!(msg, Message::Key(_) | Message::Paste(_)) {
        model.flash = None;
    }

    match msg {
        Message::Key(key) => {
            if let Some(unhandled) = model.editor.handle_key(key) {
                let name = key_name(&unhandled).unwrap_or_else(|| format!("{:?}", unhandled.code));
                model.flash = Some(format!("{name} is not bound"));
            }
        }
        Message::Paste(text) => model.editor.insert_str(&text),
        Message::Submit => {
            tracing::debug!(len = model.editor.len(), "prompt submitted");
            model.outcome = Some(Outcome::Submitted(model.editor.text()));
        }
        Message::Cancel => {
            tracing::debug!("prompt cancelled");
            model.outcome = Some(Outcome::Cancelled);
        }
        Message::Resize(width, height) => model.size = (width, height),
    }

    model
}
