mod common;
mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus, Mode};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Confirm => handle_confirm(app, key),
        Mode::Notice => handle_notice(app, key),
        Mode::Help => handle_help(app, key),
        Mode::Normal => {
            if handle_global(app, key) {
                return;
            }
            match app.focus {
                Focus::Input => handle_edit(app, key),
                Focus::List => handle_navigate(app, key),
            }
        }
    }
}

/// Shortcuts that work regardless of focus. Returns true if the key was consumed.
fn handle_global(app: &mut App, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (m, KeyCode::Char('q') | KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            request_exit(app);
        }
        (m, KeyCode::Char('n')) if m.contains(KeyModifiers::CONTROL) => {
            app.focus_input(true);
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::ALT) => {
            add_from_input(app);
        }
        (m, KeyCode::Char('d')) if m.contains(KeyModifiers::ALT) => {
            request_delete(app);
        }
        (_, KeyCode::F(1)) => {
            app.mode = Mode::Help;
        }
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => match app.focus {
            Focus::Input => app.focus_list(),
            Focus::List => app.focus_input(false),
        },
        _ => return false,
    }
    true
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Only lands in the text field; newlines become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Normal || text.is_empty() {
        return;
    }
    app.focus = Focus::Input;
    let clean = text.replace(['\r', '\n'], " ");
    insert_text(app, &clean);
}
