use std::collections::BTreeSet;

use tracing::debug;

use crate::model::task::Task;
use crate::model::task_list::TaskList;

/// Error type for task list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskListError {
    #[error("Task cannot be empty.")]
    EmptyInput,
    #[error("Task already exists.")]
    DuplicateTask(String),
}

/// Validate `raw` and append it to the end of the list.
/// Returns the stored (trimmed) task.
pub fn add_task(list: &mut TaskList, raw: &str) -> Result<Task, TaskListError> {
    let task = Task::parse(raw).ok_or(TaskListError::EmptyInput)?;
    if contains(list, task.as_str()) {
        return Err(TaskListError::DuplicateTask(task.as_str().to_string()));
    }
    debug!(task = %task, index = list.len(), "task added");
    list.push(task.clone());
    Ok(task)
}

/// Remove every task whose index is in `indices`.
///
/// Out-of-range indices are ignored and repeated indices count once.
/// Removal runs from the highest index down so earlier removals never shift
/// a later target. Returns how many tasks were removed.
pub fn remove_at<I>(list: &mut TaskList, indices: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let targets: BTreeSet<usize> = indices.into_iter().collect();
    let mut removed = 0;
    for &idx in targets.iter().rev() {
        if idx < list.len() {
            let task = list.remove(idx);
            debug!(task = %task, index = idx, "task removed");
            removed += 1;
        }
    }
    removed
}

/// Case- and trim-insensitive membership test.
pub fn contains(list: &TaskList, candidate: &str) -> bool {
    list.iter().any(|t| t.matches(candidate))
}
