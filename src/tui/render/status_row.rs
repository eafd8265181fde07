use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        format!(" {}", app.status_message),
        Style::default().fg(app.theme.text_bright).bg(bg),
    )];

    let counts = if app.selection.is_empty() {
        format!("{} task(s) ", app.tasks.len())
    } else {
        format!(
            "{} task(s), {} selected ",
            app.tasks.len(),
            app.selection.len()
        )
    };
    let content_width = unicode::display_width(&spans[0].content);
    let counts_width = unicode::display_width(&counts);
    if content_width + counts_width < width {
        let padding = width - content_width - counts_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the one-line key hints for the focused control
pub fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default().fg(app.theme.highlight).bg(bg);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let hints: &[(&str, &str)] = match app.focus {
        Focus::Input => &[
            ("Enter", "add"),
            ("Tab", "focus list"),
            ("Alt+D", "delete"),
            ("F1", "help"),
            ("^Q", "quit"),
        ],
        Focus::List => &[
            ("Space", "select"),
            ("Del", "delete"),
            ("Esc", "clear"),
            ("Tab", "focus input"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::styled(" ", desc_style)];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
