use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus, Mode};
use crate::util::unicode;

const PLACEHOLDER: &str = "Type a task and press Enter (no empty or duplicate tasks)";
const ADD_BUTTON: &str = " [ Add ] ";

/// Render the new-task field and its Add button
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Input && app.mode == Mode::Normal;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " New task ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(ADD_BUTTON.len() as u16),
        ])
        .split(inner);

    render_field(frame, app, cols[0], focused);

    let button = Paragraph::new(Span::styled(
        ADD_BUTTON,
        Style::default()
            .fg(app.theme.green)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(button, cols[1]);
}

fn render_field(frame: &mut Frame, app: &App, area: Rect, focused: bool) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default().fg(bg).bg(app.theme.text_bright);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    if app.input.is_empty() {
        if focused {
            spans.push(Span::styled(" ", cursor_style));
        }
        spans.push(Span::styled(PLACEHOLDER, dim_style));
        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    if app.input_select_all {
        spans.push(Span::styled(
            app.input.as_str(),
            Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg),
        ));
    } else if focused {
        let cursor = app.input_cursor.min(app.input.len());
        let before = &app.input[..cursor];
        let at = unicode::grapheme_at(&app.input, cursor);
        let after = &app.input[cursor + at.len()..];
        spans.push(Span::styled(before, text_style));
        if at.is_empty() {
            spans.push(Span::styled(" ", cursor_style));
        } else {
            spans.push(Span::styled(at, cursor_style));
        }
        spans.push(Span::styled(after, text_style));
    } else {
        spans.push(Span::styled(app.input.as_str(), text_style));
    }

    // Keep the cursor in view for long input
    let width = area.width as usize;
    let cursor_col = unicode::byte_offset_to_display_col(&app.input, app.input_cursor);
    let h_scroll = if focused && cursor_col + 1 > width {
        cursor_col + 1 - width
    } else {
        0
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(bg))
        .scroll((0, h_scroll as u16));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_field_shows_placeholder() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        assert!(output.contains("New task"));
        assert!(output.contains("Type a task and press Enter"));
        assert!(output.contains("[ Add ]"));
    }

    #[test]
    fn typed_text_is_shown() {
        let mut app = app_with_tasks(&[]);
        app.input = "Water plants".into();
        app.input_cursor = 5;
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        assert!(output.contains("Water plants"));
        assert!(!output.contains("Type a task"));
    }

    #[test]
    fn long_input_scrolls_to_cursor() {
        let mut app = app_with_tasks(&[]);
        app.input = format!("{}END", "x".repeat(100));
        app.input_cursor = app.input.len();
        let output = render_to_string(40, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        assert!(output.contains("END"));
    }
}
