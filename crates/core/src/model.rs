use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which kind of task a creation intent asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Regular,
    Recurring,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Regular => "Regular Task",
            TaskKind::Recurring => "Recurring Task",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub category: String,
}

impl Task {
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Pending tasks whose due date has already passed.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_at.is_some_and(|due| due < now)
    }
}

/// Flip the completion flag of the task with `id`. Returns `false` when no task matches.
pub fn toggle_task(tasks: &mut [Task], id: &str) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.toggle_completed();
            true
        }
        None => false,
    }
}
