use std::fmt;

use serde::Serialize;

/// A single to-do entry: trimmed, non-empty text.
///
/// Only constructed through [`Task::parse`], so every `Task` in a list
/// already satisfies the trim and non-empty rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    /// Trim `raw` and wrap it. Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Task> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Task(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for duplicate detection (case- and trim-insensitive)
    pub fn match_key(&self) -> String {
        match_key(&self.0)
    }

    /// Whether `candidate` names the same task as this one
    pub fn matches(&self, candidate: &str) -> bool {
        self.match_key() == match_key(candidate)
    }
}

/// Normalize text for duplicate comparison.
pub fn match_key(text: &str) -> String {
    text.trim().to_lowercase()
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
