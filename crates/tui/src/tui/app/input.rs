use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, InputMode, Screen};
use crate::interaction::{FabAction, NavigationHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NormalAction {
    Quit,
    PressTab(usize),
    LongPressTab(usize),
    LongPressCurrentTab,
    NextTab,
    PrevTab,
    SelectNext,
    SelectPrev,
    ToggleTask,
    ToggleFab,
    ShowHelp,
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        if let KeyCode::Char(digit @ '1'..='4') = key.code {
            let index = (digit as usize) - ('1' as usize);
            return if key.modifiers.contains(KeyModifiers::ALT) {
                Some(Self::LongPressTab(index))
            } else {
                Some(Self::PressTab(index))
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('L') => Some(Self::LongPressCurrentTab),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Self::NextTab),
            KeyCode::Left | KeyCode::BackTab => Some(Self::PrevTab),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Self::ToggleTask),
            KeyCode::Char('+') | KeyCode::Char('a') => Some(Self::ToggleFab),
            KeyCode::Char('h') | KeyCode::Char('?') => Some(Self::ShowHelp),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        self.on_key_at(key, Instant::now())
    }

    pub(crate) fn on_key_at(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key, now),
            InputMode::FabMenu => self.handle_fab_menu(key, now),
            InputMode::Help => self.handle_help_mode(key),
        }
        Ok(())
    }

    fn handle_normal_mode(&mut self, key: KeyEvent, now: Instant) {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action, now);
        }
    }

    fn execute_normal_action(&mut self, action: NormalAction, now: Instant) {
        match action {
            NormalAction::Quit => self.should_quit = true,
            NormalAction::PressTab(index) => self.press_tab(index),
            NormalAction::LongPressTab(index) => self.long_press_tab(index, now),
            NormalAction::LongPressCurrentTab => {
                let index = self.navigator.state().index;
                self.long_press_tab(index, now);
            }
            NormalAction::NextTab => self.cycle_tab(true),
            NormalAction::PrevTab => self.cycle_tab(false),
            NormalAction::SelectNext => match self.current_screen() {
                Screen::Focused => self.focused.select_next(),
                Screen::Progress => self.progress.select_next(),
                Screen::Backlogs | Screen::Goals => {}
            },
            NormalAction::SelectPrev => match self.current_screen() {
                Screen::Focused => self.focused.select_prev(),
                Screen::Progress => self.progress.select_prev(),
                Screen::Backlogs | Screen::Goals => {}
            },
            NormalAction::ToggleTask => {
                if self.current_screen() == Screen::Focused {
                    self.toggle_selected_task(now);
                }
            }
            NormalAction::ToggleFab => self.toggle_fab(now),
            NormalAction::ShowHelp => self.show_help_overlay(now),
        }
    }

    fn handle_fab_menu(&mut self, key: KeyEvent, now: Instant) {
        let actions = self.fab.visible_actions();
        match key.code {
            KeyCode::Esc => self.dismiss_fab(now),
            KeyCode::Char('+') | KeyCode::Char('a') => self.toggle_fab(now),
            KeyCode::Char('r') => self.select_fab_action(FabAction::RegularTask, now),
            KeyCode::Char('c') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.select_fab_action(FabAction::RecurringTask, now)
            }
            KeyCode::Char('c') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if !actions.is_empty() {
                    self.fab_cursor = (self.fab_cursor + 1).min(actions.len() - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.fab_cursor = self.fab_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(action) = actions.get(self.fab_cursor).copied() {
                    self.select_fab_action(action, now);
                }
            }
            _ => {}
        }
    }

    fn handle_help_mode(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?')
        ) {
            self.input_mode = InputMode::Normal;
            self.status = None;
        }
    }
}
