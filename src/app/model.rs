use std::cell::Cell;
use std::rc::Rc;

use crate::editor::LineEditor;

/// How the prompt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Enter was pressed; carries the accepted line.
    Submitted(String),
    /// Esc or Ctrl+C was pressed.
    Cancelled,
}

/// The complete prompt state.
#[derive(Debug)]
pub struct Model {
    pub editor: LineEditor,
    pub prompt: String,
    /// Terminal size as `(width, height)`.
    pub size: (u16, u16),
    /// Transient message shown in the status bar, cleared on the next key.
    pub flash: Option<String>,
    pub outcome: Option<Outcome>,
    changes: Rc<Cell<usize>>,
}

impl Model {
    /// Create a model around `editor`, counting its content changes.
    pub fn new(mut editor: LineEditor, prompt: impl Into<String>, size: (u16, u16)) -> Self {
        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);
        editor.subscribe(move |_, _| counter.set(counter.get() + 1));
        Self {
            editor,
            prompt: prompt.into(),
            size,
            flash: None,
            outcome: None,
            changes,
        }
    }

    /// Number of content changes since the prompt started.
    pub fn change_count(&self) -> usize {
        self.changes.get()
    }

    pub const fn is_done(&self) -> bool {
        self.outcome.is_some()
    }
}
