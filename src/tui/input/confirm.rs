use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::tui::app::{App, ConfirmAction, Mode};

use super::*;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y or Enter
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('y') | KeyCode::Char('Y'))
        | (_, KeyCode::Enter) => {
            let state = app.confirm_state.take();
            app.mode = Mode::Normal;
            if let Some(state) = state {
                match state.action {
                    ConfirmAction::DeleteTasks { indices } => delete_tasks(app, &indices),
                    ConfirmAction::Exit => app.should_quit = true,
                }
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('n') | KeyCode::Char('N'))
        | (_, KeyCode::Esc) => {
            if let Some(state) = app.confirm_state.take() {
                debug!(action = ?state.action, "confirmation declined");
            }
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

pub(super) fn handle_notice(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
    ) {
        app.notice = None;
        app.mode = Mode::Normal;
    }
}

pub(super) fn handle_help(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1)
    ) {
        app.mode = Mode::Normal;
    }
}
