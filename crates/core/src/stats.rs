//! Completion statistics derived from a task collection at read time.
//!
//! Nothing here is cached: every call is a pure projection of the slice it is given.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub progress_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub total: usize,
    pub completed: usize,
    pub percentage: u8,
}

impl CategoryStat {
    pub fn is_complete(&self) -> bool {
        self.percentage == 100
    }
}

pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        progress_percentage: percentage(completed, total),
    }
}

/// Per-category completion, ordered by the first appearance of each category in `tasks`.
pub fn compute_category_stats(tasks: &[Task]) -> Vec<CategoryStat> {
    let mut tally = CategoryTally::default();
    for task in tasks {
        tally.record(&task.category, task.completed);
    }
    tally.into_stats()
}

/// Insertion-ordered running counts. An entry only exists once a task of that
/// category was recorded, so every entry has `total >= 1`.
#[derive(Debug, Default)]
struct CategoryTally {
    entries: Vec<(String, usize, usize)>,
    index: HashMap<String, usize>,
}

impl CategoryTally {
    fn record(&mut self, category: &str, completed: bool) {
        let slot = match self.index.get(category) {
            Some(&slot) => slot,
            None => {
                self.entries.push((category.to_string(), 0, 0));
                let slot = self.entries.len() - 1;
                self.index.insert(category.to_string(), slot);
                slot
            }
        };

        let entry = &mut self.entries[slot];
        entry.1 += 1;
        if completed {
            entry.2 += 1;
        }
    }

    fn into_stats(self) -> Vec<CategoryStat> {
        self.entries
            .into_iter()
            .map(|(category, total, completed)| CategoryStat {
                category,
                total,
                completed,
                percentage: percentage(completed, total),
            })
            .collect()
    }
}

/// `round(100 * part / whole)` with halves rounded up; zero when `whole` is zero.
fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    rounded.min(100) as u8
}
