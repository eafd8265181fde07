use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

use super::*;

/// Keys while the new-task field has focus
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => add_from_input(app),
        // Esc drops a Ctrl+N selection; otherwise nothing to cancel
        (_, KeyCode::Esc) => {
            app.input_select_all = false;
        }
        (KeyModifiers::NONE, KeyCode::Down) => {
            if !app.tasks.is_empty() {
                app.focus_list();
            }
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_select_all = false;
            app.input_cursor = 0;
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_select_all = false;
            app.input_cursor = app.input.len();
        }
        (_, KeyCode::Home) => {
            app.input_select_all = false;
            app.input_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.input_select_all = false;
            app.input_cursor = app.input.len();
        }
        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            if take_select_all(app) {
                return;
            }
            app.input.drain(..app.input_cursor);
            app.input_cursor = 0;
        }
        // Delete word backward: Ctrl+W or Alt+Backspace
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
            delete_word_back(app);
        }
        (m, KeyCode::Backspace) if m.contains(KeyModifiers::ALT) => {
            delete_word_back(app);
        }
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            app.input_select_all = false;
            app.input_cursor = unicode::word_boundary_left(&app.input, app.input_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            app.input_select_all = false;
            app.input_cursor = unicode::word_boundary_right(&app.input, app.input_cursor);
        }
        (_, KeyCode::Left) => {
            app.input_select_all = false;
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            app.input_select_all = false;
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Backspace) => {
            if take_select_all(app) {
                return;
            }
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(prev..app.input_cursor);
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if take_select_all(app) {
                return;
            }
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(app.input_cursor..next);
            }
        }
        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            let mut buf = [0u8; 4];
            insert_text(app, c.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

/// Insert at the cursor, replacing the whole field if it is selected.
pub(super) fn insert_text(app: &mut App, text: &str) {
    take_select_all(app);
    app.input.insert_str(app.input_cursor, text);
    app.input_cursor += text.len();
}

/// If the whole field is selected, clear it. Returns true when it did.
fn take_select_all(app: &mut App) -> bool {
    if !app.input_select_all {
        return false;
    }
    app.input_select_all = false;
    app.input.clear();
    app.input_cursor = 0;
    true
}

fn delete_word_back(app: &mut App) {
    if take_select_all(app) {
        return;
    }
    let start = unicode::word_boundary_left(&app.input, app.input_cursor);
    app.input.drain(start..app.input_cursor);
    app.input_cursor = start;
}
