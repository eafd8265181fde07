use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus, Mode};
use crate::util::unicode;

const DELETE_BUTTON: &str = "[ Delete ]";

/// Render the task list. Adjusts `scroll_offset` so the cursor row stays visible.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::List && app.mode == Mode::Normal;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" Tasks ({}) ", app.tasks.len()),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.tasks.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    let visible_height = inner.height as usize;
    adjust_scroll(app, visible_height);

    let width = inner.width as usize;
    let num_width = app.tasks.len().to_string().len();
    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_selected = app.selection.contains(&i);
        let is_cursor = focused && i == app.cursor;
        let row_bg = if is_selected {
            app.theme.selection_bg
        } else {
            bg
        };

        let marker = if is_cursor { "\u{25B8}" } else { " " };
        let prefix = format!("{} {:>w$}. ", marker, i + 1, w = num_width);
        let title_budget = width.saturating_sub(unicode::display_width(&prefix));

        let title_style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let mut spans = vec![
            Span::styled(prefix, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                unicode::truncate_to_width(task.as_str(), title_budget),
                title_style,
            ),
        ];

        // Pad selected rows so the highlight spans the full width
        if is_selected {
            let content_width: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

/// Scroll so the cursor row is inside the viewport
fn adjust_scroll(app: &mut App, visible_height: usize) {
    if visible_height == 0 {
        return;
    }
    let max_scroll = app.tasks.len().saturating_sub(visible_height);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    app.scroll_offset = app.scroll_offset.min(max_scroll);
}

/// Render the Delete button, dimmed while nothing is selected
pub fn render_button_column(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let style = if app.delete_enabled() {
        Style::default()
            .fg(app.theme.red)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(DELETE_BUTTON, style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
