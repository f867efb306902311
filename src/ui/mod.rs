//! Terminal UI components.
//!
//! - [`EditLine`]: ratatui widget painting a prompt and an editable line
//! - [`render_line`]: draws an [`EditLine`] and places the terminal cursor
//! - [`render`]: the full prompt screen (line + status bar)

mod render;

pub use render::{EditLine, render, render_line};

#[cfg(test)]
mod tests;
