use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::ops::list_ops;
use crate::tui::app::{App, ConfirmAction, Focus, NoticeLevel};

/// Normalize Shift+letter: some terminals send `Char('k') + SHIFT`,
/// others `Char('K')`. Always produce the uppercase form.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Add the text field's contents as a new task.
pub(super) fn add_from_input(app: &mut App) {
    match list_ops::add_task(&mut app.tasks, &app.input) {
        Ok(task) => {
            info!(task = %task, "add");
            app.reset_input();
            app.focus = Focus::Input;
            let new_index = app.tasks.len() - 1;
            app.select_only(new_index);
            app.status_message = "Task added.".to_string();
        }
        Err(e) => {
            debug!(input = %app.input, error = %e, "add rejected");
            app.status_message = format!("Add failed: {}", e);
            app.open_notice(NoticeLevel::Warning, e.to_string());
        }
    }
}

/// Delete intent: notice on empty selection, confirm when several rows are
/// selected, otherwise delete right away.
pub(super) fn request_delete(app: &mut App) {
    let indices: Vec<usize> = app.selection.iter().copied().collect();
    if indices.is_empty() {
        app.open_notice(
            NoticeLevel::Info,
            "No task selected to delete. Select a task first.",
        );
        return;
    }

    if indices.len() > 1 && app.behavior.confirm_multi_delete {
        let message = format!(
            "Are you sure you want to delete the selected {} tasks?",
            indices.len()
        );
        app.open_confirm("Confirm Delete", message, ConfirmAction::DeleteTasks { indices });
        return;
    }

    delete_tasks(app, &indices);
}

/// Remove the given rows, then select the row nearest the first removed one.
pub(super) fn delete_tasks(app: &mut App, indices: &[usize]) {
    let Some(&first) = indices.iter().min() else {
        return;
    };
    let removed = list_ops::remove_at(&mut app.tasks, indices.iter().copied());
    info!(requested = indices.len(), removed, "delete");

    app.clear_selection();
    if app.tasks.is_empty() {
        app.cursor = 0;
        app.scroll_offset = 0;
    } else {
        let next = first.min(app.tasks.len() - 1);
        app.select_only(next);
    }
    app.status_message = "Selected task(s) deleted.".to_string();
}

/// Quit intent: confirm first while tasks remain.
pub(super) fn request_exit(app: &mut App) {
    if app.tasks.is_empty() || !app.behavior.confirm_exit {
        app.should_quit = true;
        return;
    }
    let message = format!(
        "You have {} task(s) in the list. Are you sure you want to exit?",
        app.tasks.len()
    );
    app.open_confirm("Confirm Exit", message, ConfirmAction::Exit);
}
