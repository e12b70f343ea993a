//! Per-tab screen state. Each screen owns its own task list.

use ratatui::widgets::ListState;

use crate::model::{toggle_task, Task};
use crate::source::TaskSource;
use crate::stats::{compute_category_stats, compute_stats, CategoryStat, TaskStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Focused,
    Backlogs,
    Goals,
    Progress,
}

impl Screen {
    pub(crate) fn from_route(name: &str) -> Option<Self> {
        match name {
            "Focused" => Some(Screen::Focused),
            "Backlogs" => Some(Screen::Backlogs),
            "Goals" => Some(Screen::Goals),
            "Progress" => Some(Screen::Progress),
            _ => None,
        }
    }

    pub(crate) fn has_fab(self) -> bool {
        matches!(self, Screen::Backlogs)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FocusedScreen {
    pub(crate) tasks: Vec<Task>,
    pub(crate) list_state: ListState,
}

impl FocusedScreen {
    pub(crate) fn load(source: &dyn TaskSource) -> anyhow::Result<Self> {
        let tasks = source.all_tasks()?;
        Ok(Self {
            list_state: first_selected(tasks.len()),
            tasks,
        })
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub(crate) fn select_next(&mut self) {
        select_next(&mut self.list_state, self.tasks.len());
    }

    pub(crate) fn select_prev(&mut self) {
        select_prev(&mut self.list_state, self.tasks.len());
    }

    /// Toggle the selected task; returns it after the flip.
    pub(crate) fn toggle_selected(&mut self) -> Option<&Task> {
        let idx = self.selected()?;
        let id = self.tasks.get(idx)?.id.clone();
        if toggle_task(&mut self.tasks, &id) {
            self.tasks.get(idx)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ProgressScreen {
    tasks: Vec<Task>,
    /// Scroll position in the category breakdown.
    pub(crate) category_state: ListState,
}

impl ProgressScreen {
    pub(crate) fn load(source: &dyn TaskSource) -> anyhow::Result<Self> {
        let tasks = source.all_tasks()?;
        let categories = compute_category_stats(&tasks).len();
        Ok(Self {
            tasks,
            category_state: first_selected(categories),
        })
    }

    pub(crate) fn select_next(&mut self) {
        let count = self.category_stats().len();
        select_next(&mut self.category_state, count);
    }

    pub(crate) fn select_prev(&mut self) {
        let count = self.category_stats().len();
        select_prev(&mut self.category_state, count);
    }

    // Recomputed on every read; nothing is cached between frames.
    pub(crate) fn stats(&self) -> TaskStats {
        compute_stats(&self.tasks)
    }

    pub(crate) fn category_stats(&self) -> Vec<CategoryStat> {
        compute_category_stats(&self.tasks)
    }
}

fn first_selected(len: usize) -> ListState {
    let mut state = ListState::default();
    if len > 0 {
        state.select(Some(0));
    }
    state
}

fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let next = state.selected().map_or(0, |idx| (idx + 1).min(len - 1));
    state.select(Some(next));
}

fn select_prev(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let prev = state.selected().map_or(0, |idx| idx.saturating_sub(1));
    state.select(Some(prev));
}
