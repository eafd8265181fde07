use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::*;

/// Keys while the task list has focus
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Escape clears the selection and returns to the text field
        (_, KeyCode::Esc) => {
            app.clear_selection();
            app.focus_input(false);
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => select_all(app),
        (m, KeyCode::Up) if m.contains(KeyModifiers::SHIFT) => extend_selection(app, -1),
        (m, KeyCode::Down) if m.contains(KeyModifiers::SHIFT) => extend_selection(app, 1),
        (_, KeyCode::Char('K')) => extend_selection(app, -1),
        (_, KeyCode::Char('J')) => extend_selection(app, 1),
        (_, KeyCode::Up | KeyCode::Char('k')) => {
            if app.cursor == 0 && !app.tasks.is_empty() {
                app.select_only(0);
                return;
            }
            move_cursor(app, -1);
        }
        (_, KeyCode::Down | KeyCode::Char('j')) => move_cursor(app, 1),
        (_, KeyCode::Home | KeyCode::Char('g')) => jump(app, 0),
        (_, KeyCode::End | KeyCode::Char('G')) => {
            let last = app.tasks.len().saturating_sub(1);
            jump(app, last);
        }
        (_, KeyCode::Char(' ')) => toggle_cursor_row(app),
        (_, KeyCode::Delete | KeyCode::Char('d')) => request_delete(app),
        (_, KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('i')) => app.focus_input(false),
        (_, KeyCode::Char('?')) => app.mode = Mode::Help,
        (_, KeyCode::Char('q')) => request_exit(app),
        _ => {}
    }
}

/// Move the cursor and select only the row it lands on.
pub(super) fn move_cursor(app: &mut App, delta: i32) {
    if app.tasks.is_empty() {
        return;
    }
    let target = step(app.cursor, delta, app.tasks.len());
    app.select_only(target);
}

fn jump(app: &mut App, index: usize) {
    if app.tasks.is_empty() {
        return;
    }
    app.select_only(index);
}

/// Shift+arrow: select the contiguous range from the anchor to the new cursor.
pub(super) fn extend_selection(app: &mut App, delta: i32) {
    if app.tasks.is_empty() {
        return;
    }
    let anchor = app.range_anchor.unwrap_or(app.cursor);
    let cursor = step(app.cursor, delta, app.tasks.len());
    let (start, end) = if cursor <= anchor {
        (cursor, anchor)
    } else {
        (anchor, cursor)
    };
    app.selection = (start..=end).collect();
    app.cursor = cursor;
    app.range_anchor = Some(anchor);
}

/// Space: add or remove the cursor row without touching the rest.
pub(super) fn toggle_cursor_row(app: &mut App) {
    if app.cursor >= app.tasks.len() {
        return;
    }
    if !app.selection.remove(&app.cursor) {
        app.selection.insert(app.cursor);
    }
    app.range_anchor = Some(app.cursor);
}

fn select_all(app: &mut App) {
    app.selection = (0..app.tasks.len()).collect();
    app.range_anchor = None;
}

fn step(from: usize, delta: i32, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    (from as i64 + delta as i64).clamp(0, max) as usize
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::Config;
    use crate::tui::app::Focus;

    fn list_app(items: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        app.seed(items);
        app.focus_list();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    #[test]
    fn arrows_move_single_selection() {
        let mut app = list_app(&["A", "B", "C"]);
        handle_navigate(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 1);
        assert_eq!(app.selection, BTreeSet::from([1]));
        handle_navigate(&mut app, key(KeyCode::Down));
        handle_navigate(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 2);
        handle_navigate(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.selection, BTreeSet::from([1]));
    }

    #[test]
    fn up_at_top_selects_first_row() {
        let mut app = list_app(&["A", "B"]);
        assert!(app.selection.is_empty());
        handle_navigate(&mut app, key(KeyCode::Up));
        assert_eq!(app.selection, BTreeSet::from([0]));
    }

    #[test]
    fn shift_arrows_extend_range() {
        let mut app = list_app(&["A", "B", "C", "D"]);
        handle_navigate(&mut app, key(KeyCode::Down));
        handle_navigate(&mut app, shift(KeyCode::Down));
        handle_navigate(&mut app, shift(KeyCode::Down));
        assert_eq!(app.selection, BTreeSet::from([1, 2, 3]));
        // Back across the anchor
        handle_navigate(&mut app, shift(KeyCode::Up));
        handle_navigate(&mut app, shift(KeyCode::Up));
        handle_navigate(&mut app, shift(KeyCode::Up));
        assert_eq!(app.selection, BTreeSet::from([0, 1]));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn space_toggles_rows() {
        let mut app = list_app(&["A", "B", "C"]);
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        handle_navigate(&mut app, key(KeyCode::Char('G')));
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        // G selected row 2 alone, space toggled it off
        assert!(app.selection.is_empty());
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.selection, BTreeSet::from([2]));
    }

    #[test]
    fn ctrl_a_selects_everything() {
        let mut app = list_app(&["A", "B", "C"]);
        handle_navigate(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.selection, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut app = list_app(&[]);
        handle_navigate(&mut app, key(KeyCode::Down));
        handle_navigate(&mut app, shift(KeyCode::Up));
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        handle_navigate(&mut app, key(KeyCode::End));
        assert!(app.selection.is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn enter_returns_to_input() {
        let mut app = list_app(&["A"]);
        handle_navigate(&mut app, key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Input);
    }
}
