use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

/// Render the help overlay (toggled with ? or F1)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Anywhere", header_style)));
    add_binding(&mut lines, " Alt+A", "Add the typed task", key_style, desc_style);
    add_binding(&mut lines, " Alt+D", "Delete selected tasks", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+N", "New task (select field)", key_style, desc_style);
    add_binding(&mut lines, " Tab", "Switch focus", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+Q", "Quit", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Text field", header_style)));
    add_binding(&mut lines, " Enter", "Add task", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+U/W", "Delete to start / word", key_style, desc_style);
    add_binding(&mut lines, " \u{2193}", "Go to list", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" List", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move and select", key_style, desc_style);
    add_binding(&mut lines, " Shift+\u{2191}\u{2193}", "Extend selection", key_style, desc_style);
    add_binding(&mut lines, " Space", "Toggle row", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+A", "Select all", key_style, desc_style);
    add_binding(&mut lines, " Del/d", "Delete selected", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Clear selection", key_style, desc_style);

    let overlay_area = centered_rect_fixed(44, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
