//! The fixed key-to-command table.
//!
//! Keys are named the way readline users write them: modifier prefixes
//! (`shift`, `meta`, `ctrl`) followed by a key, e.g. `ctrl w`,
//! `meta backspace`, `shift left`. ALT is reported as `meta`.
//!
//! | Key | Command |
//! |-----|---------|
//! | `ctrl f`, `right` | [`Command::ForwardChar`] |
//! | `ctrl b`, `left` | [`Command::BackwardChar`] |
//! | `ctrl a`, `home` | [`Command::BeginningOfLine`] |
//! | `ctrl e`, `end` | [`Command::EndOfLine`] |
//! | `meta f`, `shift right` | [`Command::ForwardWord`] |
//! | `meta b`, `shift left` | [`Command::BackwardWord`] |
//! | `ctrl d`, `delete` | [`Command::DeleteChar`] |
//! | `ctrl h`, `backspace` | [`Command::BackwardDeleteChar`] |
//! | `ctrl u` | [`Command::KillWholeLine`] |
//! | `ctrl k` | [`Command::KillLine`] |
//! | `meta d` | [`Command::KillWord`] |
//! | `ctrl w`, `meta backspace` | [`Command::BackwardKillWord`] |
//! | `ctrl t` | [`Command::TransposeChars`] |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// An editing command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ForwardChar,
    BackwardChar,
    BeginningOfLine,
    EndOfLine,
    ForwardWord,
    BackwardWord,
    DeleteChar,
    BackwardDeleteChar,
    KillWholeLine,
    KillLine,
    KillWord,
    BackwardKillWord,
    TransposeChars,
}

const BINDINGS: &[(&str, Command)] = &[
    ("ctrl f", Command::ForwardChar),
    ("ctrl b", Command::BackwardChar),
    ("right", Command::ForwardChar),
    ("left", Command::BackwardChar),
    ("ctrl a", Command::BeginningOfLine),
    ("ctrl e", Command::EndOfLine),
    ("home", Command::BeginningOfLine),
    ("end", Command::EndOfLine),
    ("meta f", Command::ForwardWord),
    ("meta b", Command::BackwardWord),
    ("shift right", Command::ForwardWord),
    ("shift left", Command::BackwardWord),
    ("ctrl d", Command::DeleteChar),
    ("ctrl h", Command::BackwardDeleteChar),
    ("delete", Command::DeleteChar),
    ("backspace", Command::BackwardDeleteChar),
    ("ctrl u", Command::KillWholeLine),
    ("ctrl k", Command::KillLine),
    ("meta d", Command::KillWord),
    ("ctrl w", Command::BackwardKillWord),
    ("meta backspace", Command::BackwardKillWord),
    ("ctrl t", Command::TransposeChars),
];

impl Command {
    /// The command bound to `key`, if any.
    pub fn for_key(key: &KeyEvent) -> Option<Self> {
        Self::for_name(&key_name(key)?)
    }

    /// The command bound to a key name such as `"ctrl w"`.
    pub fn for_name(name: &str) -> Option<Self> {
        BINDINGS
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, command)| *command)
    }

    /// Every `(key name, command)` pair in the table.
    pub const fn bindings() -> &'static [(&'static str, Self)] {
        BINDINGS
    }

    /// Readline-style command name, e.g. `backward-kill-word`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ForwardChar => "forward-char",
            Self::BackwardChar => "backward-char",
            Self::BeginningOfLine => "beginning-of-line",
            Self::EndOfLine => "end-of-line",
            Self::ForwardWord => "forward-word",
            Self::BackwardWord => "backward-word",
            Self::DeleteChar => "delete-char",
            Self::BackwardDeleteChar => "backward-delete-char",
            Self::KillWholeLine => "kill-whole-line",
            Self::KillLine => "kill-line",
            Self::KillWord => "kill-word",
            Self::BackwardKillWord => "backward-kill-word",
            Self::TransposeChars => "transpose-chars",
        }
    }

    /// Whether the command can change the buffer content.
    pub const fn edits_text(self) -> bool {
        !matches!(
            self,
            Self::ForwardChar
                | Self::BackwardChar
                | Self::BeginningOfLine
                | Self::EndOfLine
                | Self::ForwardWord
                | Self::BackwardWord
        )
    }
}

/// Whether `ch` may be inserted into the buffer.
///
/// Wide characters are always accepted; otherwise the character must be a
/// non-control code point at or above U+0020.
pub fn is_insertable(ch: char) -> bool {
    ch.width() == Some(2) || (ch >= ' ' && !ch.is_control())
}

/// The character a key would insert, if it is a plain printable key.
///
/// SHIFT is allowed since the character already carries it; any other
/// modifier disqualifies the key.
pub fn insertable_char(key: &KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let KeyCode::Char(ch) = key.code else {
        return None;
    };
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return None;
    }
    is_insertable(ch).then_some(ch)
}

/// Readline-style name of a key, e.g. `ctrl w` or `meta backspace`.
///
/// Returns `None` for release events and keys with no name.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let mut modifiers = key.modifiers;
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(ch) => {
            // The character itself already reflects SHIFT.
            modifiers.remove(KeyModifiers::SHIFT);
            ch.to_string()
        }
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => {
            modifiers.remove(KeyModifiers::SHIFT);
            "shift tab".to_string()
        }
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "page up".to_string(),
        KeyCode::PageDown => "page down".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut name = String::new();
    if modifiers.contains(KeyModifiers::SHIFT) {
        name.push_str("shift ");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        name.push_str("meta ");
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl ");
    }
    name.push_str(&base);
    Some(name)
}

/// Error returned by [`parse_key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key name")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// Parse a key name such as `ctrl w` into a key press event.
///
/// Modifiers may appear in any order before the key. A single character,
/// including a space, names itself.
///
/// # Errors
///
/// Returns [`KeyParseError`] for an empty name, a token in modifier
/// position that is not `shift`/`meta`/`alt`/`ctrl`, or an unknown key.
pub fn parse_key(name: &str) -> Result<KeyEvent, KeyParseError> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }

    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let mut modifiers = KeyModifiers::NONE;
    let mut start = 0;
    while start + 1 < tokens.len() {
        let rest = tokens[start..].join(" ");
        if parse_code(&rest).is_some() {
            break;
        }
        match tokens[start] {
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "meta" | "alt" => modifiers |= KeyModifiers::ALT,
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            other => return Err(KeyParseError::UnknownModifier(other.to_string())),
        }
        start += 1;
    }

    let rest = tokens[start..].join(" ");
    let mut code = parse_code(&rest).ok_or(KeyParseError::UnknownKey(rest))?;
    if code == KeyCode::BackTab {
        modifiers |= KeyModifiers::SHIFT;
    }
    if let KeyCode::Char(ch) = code {
        if modifiers.contains(KeyModifiers::SHIFT) {
            code = KeyCode::Char(ch.to_ascii_uppercase());
        }
    }
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_code(name: &str) -> Option<KeyCode> {
    let code = match name {
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "shift tab" => KeyCode::BackTab,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "page up" => KeyCode::PageUp,
        "page down" => KeyCode::PageDown,
        "insert" => KeyCode::Insert,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => {
                    let n = name.strip_prefix('f')?.parse::<u8>().ok()?;
                    if !(1..=24).contains(&n) {
                        return None;
                    }
                    KeyCode::F(n)
                }
            }
        }
    };
    Some(code)
}
