use serde::Serialize;

use crate::model::task_list::TaskList;
use crate::ops::list_ops::{self, TaskListError};

/// Structured result from `tl check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub items: Vec<CheckItem>,
    /// The list as it would look after every accepted item was added
    pub tasks: TaskList,
}

/// Outcome for one input, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum CheckItem {
    #[serde(rename = "added")]
    Added { input: String, task: String },
    #[serde(rename = "rejected")]
    Rejected {
        input: String,
        reason: RejectReason,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    EmptyInput,
    DuplicateTask,
}

impl From<&TaskListError> for RejectReason {
    fn from(err: &TaskListError) -> Self {
        match err {
            TaskListError::EmptyInput => RejectReason::EmptyInput,
            TaskListError::DuplicateTask(_) => RejectReason::DuplicateTask,
        }
    }
}

/// Run each input through `add_task` on a fresh list.
pub fn check_items<S: AsRef<str>>(inputs: &[S]) -> CheckResult {
    let mut result = CheckResult {
        valid: true,
        ..Default::default()
    };
    for input in inputs {
        let input = input.as_ref();
        match list_ops::add_task(&mut result.tasks, input) {
            Ok(task) => result.items.push(CheckItem::Added {
                input: input.to_string(),
                task: task.to_string(),
            }),
            Err(e) => {
                result.valid = false;
                result.items.push(CheckItem::Rejected {
                    input: input.to_string(),
                    reason: RejectReason::from(&e),
                    message: e.to_string(),
                });
            }
        }
    }
    result
}

impl CheckResult {
    pub fn rejected_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, CheckItem::Rejected { .. }))
            .count()
    }
}
