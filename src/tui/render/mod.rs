pub mod help_overlay;
pub mod input_bar;
pub mod list_view;
pub mod popup;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Width of the column holding the Delete button
const BUTTON_COLUMN_W: u16 = 12;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: input bar (3 rows) | list + buttons | key hints (optional) | status row
    let hint_rows = if app.show_key_hints { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(hint_rows),
            Constraint::Length(1),
        ])
        .split(area);

    input_bar::render_input_bar(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(BUTTON_COLUMN_W)])
        .split(chunks[1]);
    list_view::render_list_view(frame, app, body[0]);
    list_view::render_button_column(frame, app, body[1]);

    if app.show_key_hints {
        status_row::render_key_hints(frame, app, chunks[2]);
    }
    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays (rendered on top of everything)
    match app.mode {
        Mode::Help => help_overlay::render_help_overlay(frame, app, area),
        Mode::Confirm => popup::render_confirm_popup(frame, app, area),
        Mode::Notice => popup::render_notice_popup(frame, app, area),
        Mode::Normal => {}
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;
    use crate::tui::app::NoticeLevel;
    use super::test_helpers::*;

    #[test]
    fn full_screen_layout() {
        let mut app = App::new(&Config::default());
        app.seed(&["Buy milk", "Call mom"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("New task"));
        assert!(output.contains("[ Add ]"));
        assert!(output.contains("Tasks (2)"));
        assert!(output.contains("Buy milk"));
        assert!(output.contains("[ Delete ]"));
        assert!(output.contains("Ready"));
    }

    #[test]
    fn notice_drawn_over_layout() {
        let mut app = App::new(&Config::default());
        app.open_notice(NoticeLevel::Warning, "Task cannot be empty.");
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("Warning"));
        assert!(output.contains("Task cannot be empty."));
    }

    #[test]
    fn hints_row_can_be_hidden() {
        let mut app = App::new(&Config::default());
        app.show_key_hints = false;
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(!output.contains("Tab focus"));
    }

    #[test]
    fn centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(50, 40, area), area);
    }
}
