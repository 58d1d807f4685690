use super::app_logic::ComposerApp;
use crate::binding::{DISPLAY_ELEMENT_ID, INPUT_ELEMENT_ID};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

fn draw_help_block(f: &mut Frame, area: Rect) {
    let help_paragraph = Paragraph::new(Line::from(
        "Type to compose | Enter: Newline | Ctrl+U: Clear | Ctrl+Y: Confirm | Esc: Quit",
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Smsyank Message Composer"),
    );
    f.render_widget(help_paragraph, area);
}

fn draw_message_block(f: &mut Frame, app: &ComposerApp, area: Rect) {
    let field = app.field();
    let wrapped = wrap_message(&field.text, field.cursor, area.width.saturating_sub(2));
    let (col, row) = wrapped.cursor;
    let visible_rows = area.height.saturating_sub(2).max(1);
    let scroll = row.saturating_sub(visible_rows - 1);

    let lines: Vec<Line> = wrapped.lines.into_iter().map(Line::from).collect();
    let message_paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(INPUT_ELEMENT_ID),
        )
        .scroll((scroll, 0));
    f.render_widget(message_paragraph, area);
    f.set_cursor_position((area.x + 1 + col, area.y + 1 + row - scroll));
}

fn draw_remaining_block(f: &mut Frame, app: &ComposerApp, area: Rect) {
    let remaining_paragraph = Paragraph::new(app.remaining_text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(DISPLAY_ELEMENT_ID),
    );
    f.render_widget(remaining_paragraph, area);
}

/// Message text broken into rows, with the cursor's cell in that layout.
struct WrappedMessage {
    lines: Vec<String>,
    cursor: (u16, u16),
}

/// Breaks `text` at newlines and wherever the next char would overflow
/// `width` cells, so the rendered rows and the cursor agree.
fn wrap_message(text: &str, cursor: usize, width: u16) -> WrappedMessage {
    let width = usize::from(width.max(1));
    let mut lines = vec![String::new()];
    let mut col = 0;
    let mut cursor_cell = None;

    for (idx, c) in text.chars().enumerate() {
        if c == '\n' {
            if idx == cursor {
                cursor_cell = Some((col, lines.len() - 1));
            }
            lines.push(String::new());
            col = 0;
            continue;
        }
        let char_width = c.width().unwrap_or(0);
        if col > 0 && col + char_width > width {
            lines.push(String::new());
            col = 0;
        }
        if idx == cursor {
            cursor_cell = Some((col, lines.len() - 1));
        }
        if let Some(line) = lines.last_mut() {
            line.push(c);
        }
        col += char_width;
    }

    let (mut cursor_col, mut cursor_row) = cursor_cell.unwrap_or((col, lines.len() - 1));
    // A full row pushes an end-of-text cursor onto the next one.
    if cursor_col >= width {
        cursor_col = 0;
        cursor_row += 1;
    }
    WrappedMessage {
        lines,
        cursor: (to_cells(cursor_col), to_cells(cursor_row)),
    }
}

fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub(super) fn ui_frame(frame: &mut Frame, app: &ComposerApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_help_block(frame, chunks[0]);
    draw_message_block(frame, app, chunks[1]);
    draw_remaining_block(frame, app, chunks[2]);
}
