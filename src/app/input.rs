use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use super::Message;

/// Map a terminal event to a prompt message.
///
/// Enter submits, Esc and Ctrl+C cancel; every other key press goes to the
/// editor, which decides whether it is bound or insertable.
pub fn handle_event(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => Some(Message::Submit),
            (KeyCode::Esc, _) => Some(Message::Cancel),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Message::Cancel),
            _ => Some(Message::Key(key)),
        },
        Event::Paste(text) => Some(Message::Paste(text)),
        Event::Resize(width, height) => Some(Message::Resize(width, height)),
        _ => None,
    }
}
