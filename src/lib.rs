// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::LineEditor)
    clippy::module_name_repetitions
)]

//! # lineedit
//!
//! A readline-style, single-line text editor for terminal UIs.
//!
//! The editing core keeps a text buffer and a code-point cursor and runs
//! Emacs-style commands on discrete key events:
//! - Character and word motion (`ctrl f`/`ctrl b`, `meta f`/`meta b`)
//! - Character deletion, line and word kills (`ctrl d`, `ctrl k`, `ctrl w`)
//! - Transpose (`ctrl t`)
//!
//! The host paints the text and a cursor column that accounts for
//! double-width characters, and gets back every key the editor does not
//! consume.
//!
//! ## Modules
//!
//! - [`editor`]: Line buffer, word alphabet, key table, change observers
//! - [`ui`]: Ratatui rendering of an editable line
//! - [`app`]: Terminal prompt hosting an editor (The Elm Architecture)
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::{Command, LineEditor, LineWidget, Surface, WordAlphabet};
    pub use crate::ui::{EditLine, render_line};
}
