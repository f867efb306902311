use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, Outcome, update};

impl App {
    /// Run the prompt until the line is submitted or cancelled.
    ///
    /// Returns the accepted line, or `None` when the user cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or event reading fails.
    pub fn run(&self) -> Result<Option<String>> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — lineedit requires an interactive terminal")?;
        let size = terminal.size()?;
        // Paste arrives as keystrokes without it; not fatal.
        let _ = execute!(stdout(), EnableBracketedPaste);

        let model = Model::new(self.build_editor(), self.prompt.clone(), (size.width, size.height));
        tracing::debug!(
            width = size.width,
            height = size.height,
            text_len = model.editor.len(),
            "prompt started"
        );

        let result = Self::event_loop(&mut terminal, model);

        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();

        result.map(|outcome| match outcome {
            Outcome::Submitted(line) => Some(line),
            Outcome::Cancelled => None,
        })
    }

    fn event_loop(terminal: &mut DefaultTerminal, mut model: Model) -> Result<Outcome> {
        loop {
            terminal.draw(|frame| crate::ui::render(&model, frame))?;

            let event = event::read().context("Failed to read terminal event")?;
            let Some(msg) = super::input::handle_event(event) else {
                continue;
            };
            model = update(model, msg);

            if let Some(outcome) = model.outcome.take() {
                return Ok(outcome);
            }
        }
    }
}
