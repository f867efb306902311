use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::editor::LineWidget;

/// Paints a prompt followed by an editable line.
///
/// Text wider than the area is clipped at the right edge.
pub struct EditLine<'a, W: LineWidget + ?Sized> {
    prompt: &'a str,
    widget: &'a W,
    prompt_style: Style,
    text_style: Style,
}

impl<'a, W: LineWidget + ?Sized> EditLine<'a, W> {
    pub fn new(prompt: &'a str, widget: &'a W) -> Self {
        Self {
            prompt,
            widget,
            prompt_style: Style::default().fg(Color::Cyan),
            text_style: Style::default(),
        }
    }

    #[must_use]
    pub const fn prompt_style(mut self, style: Style) -> Self {
        self.prompt_style = style;
        self
    }

    #[must_use]
    pub const fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Screen position of the cursor when this line is drawn in `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let prompt_width = prompt_width(self.prompt).min(area.width);
        let text_width = area.width - prompt_width;
        let column = if text_width == 0 {
            area.width.saturating_sub(1)
        } else {
            prompt_width + self.widget.cursor_column(text_width)
        };
        Position::new(area.x + column, area.y)
    }
}

impl<W: LineWidget + ?Sized> Widget for EditLine<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.prompt, self.prompt_style),
            Span::styled(self.widget.display_text(), self.text_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

fn prompt_width(prompt: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(prompt)).unwrap_or(u16::MAX)
}

/// Draw `widget` with `prompt` in `area`, placing the terminal cursor on it
/// when `focused`.
pub fn render_line<W: LineWidget + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    widget: &W,
    focused: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let line = EditLine::new(prompt, widget);
    if focused {
        frame.set_cursor_position(line.cursor_position(area));
    }
    frame.render_widget(line, area);
}

/// Render the complete prompt UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let line_area = Rect {
        height: area.height.min(1),
        ..area
    };
    render_line(frame, line_area, &model.prompt, &model.editor, true);

    if area.height > 1 {
        let status_area = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        render_status_bar(model, frame, status_area);
    }
}

fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    if let Some(flash) = &model.flash {
        let bar = Paragraph::new(format!(" {flash}"))
            .style(Style::default().bg(Color::Yellow).fg(Color::Black));
        frame.render_widget(bar, area);
        return;
    }

    let editor = &model.editor;
    let dirty_indicator = if editor.is_dirty() { " [modified]" } else { "" };
    let status = format!(
        " LINE{dirty_indicator}  Pos {}/{}  Col {}  Edits {}  Enter:accept  Esc:cancel",
        editor.cursor(),
        editor.len(),
        editor.cursor_offset_width() + 1,
        model.change_count(),
    );
    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}
