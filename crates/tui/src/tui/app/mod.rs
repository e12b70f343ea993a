use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use ratatui::style::{Color, Style};
use tracing::info;

use super::constants::*;
use super::screens::{FocusedScreen, ProgressScreen, Screen};
use crate::interaction::{
    default_routes, CreateTaskIntent, FabAction, FabController, FabState, NavigationHost, TabBar,
    TabNavigator,
};
use crate::model::TaskKind;
use crate::source::{StaticTaskSource, TaskSet};

mod input;
mod render;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    FabMenu,
    Help,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind, now: Instant) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: now,
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Notice => Style::default().fg(Color::Yellow),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Notice,
}

/// Backlog quick-add intents. Task creation is not wired up yet, so each
/// intent only posts a notice.
struct BacklogIntents<'a> {
    status: &'a mut Option<StatusMessage>,
    now: Instant,
}

impl BacklogIntents<'_> {
    fn announce(&mut self, kind: TaskKind, body: &str) {
        info!(kind = kind.label(), "task creation requested");
        *self.status = Some(StatusMessage::new(
            format!("{}: {}", kind.label(), body),
            StatusKind::Notice,
            self.now,
        ));
    }
}

impl CreateTaskIntent for BacklogIntents<'_> {
    fn regular_task(&mut self) {
        self.announce(TaskKind::Regular, NOTICE_REGULAR_TASK);
    }

    fn recurring_task(&mut self) {
        self.announce(TaskKind::Recurring, NOTICE_RECURRING_TASK);
    }
}

pub(crate) struct App {
    navigator: TabNavigator,
    tab_bar: TabBar,
    fab: FabController,
    fab_cursor: usize,
    focused: FocusedScreen,
    progress: ProgressScreen,
    input_mode: InputMode,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(now: DateTime<Utc>) -> Result<Self> {
        let focused_source = StaticTaskSource::new(TaskSet::Focused, now)?;
        let progress_source = StaticTaskSource::new(TaskSet::Progress, now)?;

        Ok(Self {
            navigator: TabNavigator::new(default_routes()),
            tab_bar: TabBar::new(),
            fab: FabController::new(),
            fab_cursor: 0,
            focused: FocusedScreen::load(&focused_source)?,
            progress: ProgressScreen::load(&progress_source)?,
            input_mode: InputMode::Normal,
            status: None,
            should_quit: false,
        })
    }

    pub(crate) fn on_tick(&mut self, now: Instant) {
        self.tab_bar.tick(now);
        if let Some(status) = &self.status {
            if now.saturating_duration_since(status.created_at) > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn current_screen(&self) -> Screen {
        self.navigator
            .state()
            .focused_route()
            .and_then(|route| Screen::from_route(&route.name))
            .unwrap_or(Screen::Focused)
    }

    fn tab_count(&self) -> usize {
        self.navigator.state().routes.len()
    }

    fn press_tab(&mut self, index: usize) {
        let leaving = self.current_screen();
        if self.tab_bar.press(&mut self.navigator, index) && leaving.has_fab() {
            // The FAB belongs to the screen it sits on; leaving resets it.
            self.fab = FabController::new();
            self.fab_cursor = 0;
        }
    }

    fn cycle_tab(&mut self, forward: bool) {
        let count = self.tab_count();
        if count == 0 {
            return;
        }
        let index = self.navigator.state().index;
        let target = if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
        self.press_tab(target);
    }

    fn long_press_tab(&mut self, index: usize, now: Instant) {
        self.tab_bar.long_press(&mut self.navigator, index, now);
    }

    fn toggle_selected_task(&mut self, now: Instant) {
        let message = match self.focused.toggle_selected() {
            Some(task) if task.completed => format!("Completed \"{}\"", task.title),
            Some(task) => format!("Reopened \"{}\"", task.title),
            None => STATUS_NOTHING_TO_TOGGLE.to_string(),
        };
        self.set_status_info(message, now);
    }

    fn toggle_fab(&mut self, now: Instant) {
        if !self.current_screen().has_fab() {
            self.set_status_info(STATUS_FAB_UNAVAILABLE, now);
            return;
        }
        if self.fab.toggle(now) == FabState::Open {
            self.fab_cursor = 0;
            self.input_mode = InputMode::FabMenu;
            self.set_status_info(STATUS_FAB_OPEN, now);
        } else {
            self.input_mode = InputMode::Normal;
            self.status = None;
        }
    }

    fn select_fab_action(&mut self, action: FabAction, now: Instant) {
        let mut intents = BacklogIntents {
            status: &mut self.status,
            now,
        };
        self.fab.select(action, now, &mut intents);
        self.input_mode = InputMode::Normal;
    }

    fn dismiss_fab(&mut self, now: Instant) {
        self.fab.dismiss(now);
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    fn show_help_overlay(&mut self, now: Instant) {
        self.input_mode = InputMode::Help;
        self.set_status_info(STATUS_HELP, now);
    }

    fn set_status_info<T: Into<String>>(&mut self, message: T, now: Instant) {
        let mut text = String::from("ℹ️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Info, now));
    }
}
