use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::LineEditor;

use super::{App, Message, Model, Outcome, handle_event, run_script, update};

fn create_test_model(text: &str) -> Model {
    let mut editor = LineEditor::from_text(text);
    editor.end_of_line();
    Model::new(editor, "> ", (80, 24))
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Message {
    Message::Key(KeyEvent::new(code, modifiers))
}

// --- update ---

#[test]
fn test_key_message_edits_line() {
    let model = create_test_model("foo");
    let model = update(model, key(KeyCode::Char('!'), KeyModifiers::NONE));
    assert_eq!(model.editor.text(), "foo!");
    assert_eq!(model.change_count(), 1);
}

#[test]
fn test_movement_does_not_count_as_change() {
    let model = create_test_model("foo bar");
    let model = update(model, key(KeyCode::Char('b'), KeyModifiers::ALT));
    let model = update(model, key(KeyCode::Home, KeyModifiers::NONE));
    assert_eq!(model.editor.cursor(), 0);
    assert_eq!(model.change_count(), 0);
}

#[test]
fn test_unbound_key_sets_flash() {
    let model = create_test_model("foo");
    let model = update(model, key(KeyCode::Up, KeyModifiers::NONE));
    assert_eq!(model.flash.as_deref(), Some("up is not bound"));
    assert_eq!(model.editor.text(), "foo");
}

#[test]
fn test_next_key_clears_flash() {
    let model = create_test_model("foo");
    let model = update(model, key(KeyCode::Up, KeyModifiers::NONE));
    let model = update(model, key(KeyCode::Left, KeyModifiers::NONE));
    assert_eq!(model.flash, None);
    assert_eq!(model.editor.cursor(), 2);
}

#[test]
fn test_paste_inserts_filtered_text() {
    let model = create_test_model("ab");
    let model = update(model, Message::Paste("c\nd".to_string()));
    assert_eq!(model.editor.text(), "abcd");
    assert_eq!(model.change_count(), 1);
}

#[test]
fn test_submit_records_line() {
    let model = create_test_model("hello");
    let model = update(model, Message::Submit);
    assert_eq!(model.outcome, Some(Outcome::Submitted("hello".to_string())));
    assert!(model.is_done());
}

#[test]
fn test_cancel_records_outcome() {
    let model = create_test_model("hello");
    let model = update(model, Message::Cancel);
    assert_eq!(model.outcome, Some(Outcome::Cancelled));
}

#[test]
fn test_messages_after_outcome_are_ignored() {
    let model = create_test_model("hello");
    let model = update(model, Message::Submit);
    let model = update(model, key(KeyCode::Char('x'), KeyModifiers::NONE));
    assert_eq!(model.editor.text(), "hello");
}

#[test]
fn test_resize_updates_size() {
    let model = create_test_model("");
    let model = update(model, Message::Resize(100, 40));
    assert_eq!(model.size, (100, 40));
}

// --- handle_event ---

#[test]
fn test_enter_submits_and_escape_cancels() {
    let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(handle_event(enter), Some(Message::Submit));
    assert_eq!(handle_event(esc), Some(Message::Cancel));
    assert_eq!(handle_event(ctrl_c), Some(Message::Cancel));
}

#[test]
fn test_other_keys_go_to_editor() {
    let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
    assert_eq!(handle_event(Event::Key(ctrl_w)), Some(Message::Key(ctrl_w)));
}

#[test]
fn test_key_release_is_dropped() {
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(handle_event(Event::Key(release)), None);
}

#[test]
fn test_paste_and_resize_events() {
    assert_eq!(
        handle_event(Event::Paste("hi".to_string())),
        Some(Message::Paste("hi".to_string()))
    );
    assert_eq!(handle_event(Event::Resize(10, 5)), Some(Message::Resize(10, 5)));
    assert_eq!(handle_event(Event::FocusGained), None);
}

// --- App builder ---

#[test]
fn test_build_editor_puts_cursor_at_end() {
    let editor = App::new().with_initial_text("hello").build_editor();
    assert_eq!(editor.text(), "hello");
    assert_eq!(editor.cursor(), 5);
    assert!(!editor.is_dirty());
}

#[test]
fn test_build_editor_applies_word_chars() {
    let mut editor = App::new()
        .with_initial_text("foo-bar baz")
        .with_word_chars(Some("abfoz-r".to_string()))
        .build_editor();
    editor.beginning_of_line();
    editor.forward_word();
    assert_eq!(editor.cursor(), 8);
}

// --- run_script ---

#[test]
fn test_run_script_types_and_edits() {
    let mut editor = LineEditor::new();
    let unhandled = run_script(
        &mut editor,
        &["h", "e", "l", "l", "o", "space", "w", "ctrl a", "ctrl t"],
    )
    .unwrap();
    assert!(unhandled.is_empty());
    assert_eq!(editor.text(), "ehllo w");
    assert_eq!(editor.cursor(), 2);
}

#[test]
fn test_run_script_reports_unhandled_keys() {
    let mut editor = LineEditor::new();
    let unhandled = run_script(&mut editor, &["a", "up", "ctrl z"]).unwrap();
    assert_eq!(unhandled, vec!["up".to_string(), "ctrl z".to_string()]);
    assert_eq!(editor.text(), "a");
}

#[test]
fn test_run_script_stops_at_invalid_key() {
    let mut editor = LineEditor::new();
    let err = run_script(&mut editor, &["a", "ctrl nonsense", "b"]).unwrap_err();
    assert!(err.to_string().contains("ctrl nonsense"));
    assert_eq!(editor.text(), "a");
}
