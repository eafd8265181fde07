use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;
use crate::util::unicode;

use super::centered_rect_fixed;

const POPUP_MAX_W: u16 = 56;

/// Render the yes/no prompt for a pending confirmation
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let state = match &app.confirm_state {
        Some(s) => s,
        None => return,
    };
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let hints = Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("y", dim_style),
        Span::styled(" yes  ", text_style),
        Span::styled("n", dim_style),
        Span::styled(" no", text_style),
    ]);
    render_message_box(
        frame,
        app,
        area,
        state.title,
        app.theme.highlight,
        &state.message,
        hints,
    );
}

/// Render an informational or warning message
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let notice = match &app.notice {
        Some(n) => n,
        None => return,
    };
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let hints = Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("Enter", dim_style),
        Span::styled(" ok", text_style),
    ]);
    render_message_box(
        frame,
        app,
        area,
        notice.level.title(),
        app.theme.notice_color(notice.level),
        &notice.message,
        hints,
    );
}

fn render_message_box(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    accent: Color,
    message: &str,
    hints: Line,
) {
    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let popup_w = POPUP_MAX_W.min(area.width.saturating_sub(2));
    // Borders plus two columns of left padding
    let text_w = (popup_w as usize).saturating_sub(4).max(1);
    let message_rows = wrapped_rows(message, text_w);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(format!(" {}", title), header_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(format!("  {}", message), text_style)));
    lines.push(Line::from(""));
    lines.push(hints);

    let popup_h = (4 + message_rows as u16 + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

/// Rough row count for `text` wrapped at `width` cells
fn wrapped_rows(text: &str, width: usize) -> usize {
    let cells = unicode::display_width(text) + 2;
    cells.div_ceil(width).max(1)
}
