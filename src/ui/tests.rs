use super::*;
use crate::app::{Message, Model, update};
use crate::editor::LineEditor;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::{Position, Rect};

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|col| buffer[(col, row)].symbol())
        .collect()
}

fn editor_at(text: &str, cursor: usize) -> LineEditor {
    let mut ed = LineEditor::from_text(text);
    ed.set_cursor(cursor);
    ed
}

#[test]
fn test_render_line_paints_prompt_and_text() {
    let ed = editor_at("hello", 5);
    let mut terminal = create_test_terminal(20, 1);
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_line(frame, area, "> ", &ed, true);
        })
        .unwrap();

    assert_eq!(row_text(&terminal, 0).trim_end(), "> hello");
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(7, 0));
}

#[test]
fn test_render_line_cursor_counts_wide_chars() {
    let ed = editor_at("中a", 1);
    let mut terminal = create_test_terminal(20, 1);
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_line(frame, area, "", &ed, true);
        })
        .unwrap();

    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(2, 0));
}

#[test]
fn test_cursor_position_clamped_to_last_column() {
    let ed = editor_at("a long line of text", 19);
    let line = EditLine::new("$ ", &ed);
    let area = Rect::new(0, 0, 10, 1);
    // 8 text columns after the prompt; cursor stops at the last one.
    assert_eq!(line.cursor_position(area), Position::new(9, 0));
}

#[test]
fn test_cursor_position_offsets_by_area_origin() {
    let ed = editor_at("abc", 1);
    let line = EditLine::new("", &ed);
    assert_eq!(
        line.cursor_position(Rect::new(4, 3, 10, 1)),
        Position::new(5, 3)
    );
}

#[test]
fn test_cursor_position_when_prompt_fills_area() {
    let ed = editor_at("abc", 3);
    let line = EditLine::new("prompt> ", &ed);
    assert_eq!(line.cursor_position(Rect::new(0, 0, 4, 1)), Position::new(3, 0));
}

#[test]
fn test_render_line_clips_long_text() {
    let ed = editor_at("abcdefghij", 0);
    let mut terminal = create_test_terminal(5, 1);
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_line(frame, area, "", &ed, false);
        })
        .unwrap();

    assert_eq!(row_text(&terminal, 0), "abcde");
}

#[test]
fn test_full_render_shows_status_bar() {
    let model = Model::new(editor_at("foo bar", 7), "> ", (40, 3));
    let mut terminal = create_test_terminal(60, 3);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert_eq!(row_text(&terminal, 0).trim_end(), "> foo bar");
    let status = row_text(&terminal, 2);
    assert!(status.contains("Pos 7/7"), "status: {status}");
    assert!(status.contains("Edits 0"), "status: {status}");
}

#[test]
fn test_full_render_reflects_edits() {
    let model = Model::new(editor_at("foo bar", 7), "> ", (40, 3));
    let model = update(
        model,
        Message::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
    );
    let mut terminal = create_test_terminal(60, 3);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert_eq!(row_text(&terminal, 0).trim_end(), "> foo");
    let status = row_text(&terminal, 2);
    assert!(status.contains("[modified]"), "status: {status}");
    assert!(status.contains("Edits 1"), "status: {status}");
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(6, 0));
}

#[test]
fn test_full_render_shows_flash_for_unbound_key() {
    let model = Model::new(LineEditor::new(), "", (40, 2));
    let model = update(
        model,
        Message::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
    );
    let mut terminal = create_test_terminal(40, 2);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert!(row_text(&terminal, 1).contains("up is not bound"));
}

#[test]
fn test_full_render_single_row_has_no_status_bar() {
    let model = Model::new(editor_at("x", 1), "", (10, 1));
    let mut terminal = create_test_terminal(10, 1);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert_eq!(row_text(&terminal, 0).trim_end(), "x");
}
