use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use thiserror::Error;

use crate::fixtures;
use crate::model::Task;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("duplicate task id '{0}'")]
    DuplicateId(String),
}

/// Supplies the ordered task collection a screen renders.
pub trait TaskSource {
    fn all_tasks(&self) -> Result<Vec<Task>, SourceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSet {
    Focused,
    Progress,
}

impl TaskSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskSet::Focused => "focused",
            TaskSet::Progress => "progress",
        }
    }
}

impl fmt::Display for TaskSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskSet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "focused" => Ok(TaskSet::Focused),
            "progress" => Ok(TaskSet::Progress),
            other => Err(anyhow!(
                "Unknown task set '{}': expected focused|progress",
                other
            )),
        }
    }
}

impl ValueEnum for TaskSet {
    fn value_variants<'a>() -> &'a [Self] {
        const VARIANTS: [TaskSet; 2] = [TaskSet::Focused, TaskSet::Progress];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// In-memory source backed by the bundled fixtures.
#[derive(Debug, Clone)]
pub struct StaticTaskSource {
    tasks: Vec<Task>,
}

impl StaticTaskSource {
    pub fn new(set: TaskSet, now: DateTime<Utc>) -> Result<Self, SourceError> {
        let tasks = match set {
            TaskSet::Focused => fixtures::focused_tasks(now),
            TaskSet::Progress => fixtures::progress_tasks(now),
        };
        Self::from_tasks(tasks)
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, SourceError> {
        ensure_unique_ids(&tasks)?;
        Ok(Self { tasks })
    }
}

impl TaskSource for StaticTaskSource {
    fn all_tasks(&self) -> Result<Vec<Task>, SourceError> {
        Ok(self.tasks.clone())
    }
}

pub fn ensure_unique_ids(tasks: &[Task]) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(SourceError::DuplicateId(task.id.clone()));
        }
    }
    Ok(())
}
