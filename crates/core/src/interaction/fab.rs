use std::time::{Duration, Instant};

use tracing::debug;

use super::animation::{Animator, Property, Timeline, Tween};
use crate::model::TaskKind;

pub const ICON_ROTATION_OPEN: f32 = 45.0;
pub const ICON_SCALE_OPEN: f32 = 1.1;

const SCALE_DURATION: Duration = Duration::from_millis(300);
const ROTATION_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabAction {
    RegularTask,
    RecurringTask,
}

impl FabAction {
    pub const ALL: &'static [FabAction] = &[FabAction::RegularTask, FabAction::RecurringTask];

    pub fn kind(self) -> TaskKind {
        match self {
            FabAction::RegularTask => TaskKind::Regular,
            FabAction::RecurringTask => TaskKind::Recurring,
        }
    }

    pub fn label(self) -> &'static str {
        self.kind().label()
    }
}

/// Receives the task-creation intents raised from the FAB menu.
pub trait CreateTaskIntent {
    fn regular_task(&mut self);
    fn recurring_task(&mut self);
}

pub fn open_timeline() -> Timeline {
    Timeline::new().parallel([
        Tween::new(Property::IconScale, ICON_SCALE_OPEN, SCALE_DURATION),
        Tween::new(Property::IconRotation, ICON_ROTATION_OPEN, ROTATION_DURATION),
    ])
}

pub fn close_timeline() -> Timeline {
    Timeline::new().parallel([
        Tween::new(Property::IconScale, 1.0, SCALE_DURATION),
        Tween::new(Property::IconRotation, 0.0, ROTATION_DURATION),
    ])
}

/// Open/closed state of the floating action button and its icon animation.
#[derive(Debug, Clone)]
pub struct FabController {
    state: FabState,
    animator: Animator,
}

impl Default for FabController {
    fn default() -> Self {
        Self::new()
    }
}

impl FabController {
    pub fn new() -> Self {
        Self {
            state: FabState::Closed,
            animator: Animator::new(&[(Property::IconScale, 1.0), (Property::IconRotation, 0.0)]),
        }
    }

    pub fn state(&self) -> FabState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == FabState::Open
    }

    pub fn toggle(&mut self, now: Instant) -> FabState {
        match self.state {
            FabState::Closed => {
                self.state = FabState::Open;
                self.animator.play(open_timeline(), now);
            }
            FabState::Open => self.close(now),
        }
        debug!(state = ?self.state, "fab toggled");
        self.state
    }

    /// Fire the intent behind `action` and close the menu. Ignored while closed,
    /// since the actions are not on screen then.
    pub fn select<I>(&mut self, action: FabAction, now: Instant, intents: &mut I) -> bool
    where
        I: CreateTaskIntent + ?Sized,
    {
        if !self.is_open() {
            return false;
        }

        match action {
            FabAction::RegularTask => intents.regular_task(),
            FabAction::RecurringTask => intents.recurring_task(),
        }
        self.close(now);
        debug!(action = action.label(), "fab action selected");
        true
    }

    /// Close the menu without raising an intent (tap outside the menu).
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close(now);
        debug!("fab menu dismissed");
        true
    }

    pub fn visible_actions(&self) -> &'static [FabAction] {
        match self.state {
            FabState::Open => FabAction::ALL,
            FabState::Closed => &[],
        }
    }

    pub fn icon_rotation(&self, now: Instant) -> f32 {
        self.animator.value(Property::IconRotation, now)
    }

    pub fn icon_scale(&self, now: Instant) -> f32 {
        self.animator.value(Property::IconScale, now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.animator.is_settled(now)
    }

    fn close(&mut self, now: Instant) {
        self.state = FabState::Closed;
        self.animator.play(close_timeline(), now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        regular: usize,
        recurring: usize,
    }

    impl CreateTaskIntent for Recorder {
        fn regular_task(&mut self) {
            self.regular += 1;
        }

        fn recurring_task(&mut self) {
            self.recurring += 1;
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn starts_closed_without_actions() {
        let fab = FabController::new();
        assert_eq!(fab.state(), FabState::Closed);
        assert!(fab.visible_actions().is_empty());
    }

    #[test]
    fn toggle_opens_and_reveals_both_actions() {
        let now = Instant::now();
        let mut fab = FabController::new();

        assert_eq!(fab.toggle(now), FabState::Open);
        assert_eq!(
            fab.visible_actions(),
            &[FabAction::RegularTask, FabAction::RecurringTask]
        );
    }

    #[test]
    fn selecting_regular_fires_once_and_closes() {
        let now = Instant::now();
        let mut fab = FabController::new();
        let mut recorder = Recorder::default();

        fab.toggle(now);
        assert!(fab.select(FabAction::RegularTask, now + ms(50), &mut recorder));

        assert_eq!(fab.state(), FabState::Closed);
        assert_eq!(recorder.regular, 1);
        assert_eq!(recorder.recurring, 0);
    }

    #[test]
    fn selecting_recurring_fires_once_and_closes() {
        let now = Instant::now();
        let mut fab = FabController::new();
        let mut recorder = Recorder::default();

        fab.toggle(now);
        fab.select(FabAction::RecurringTask, now, &mut recorder);

        assert_eq!(fab.state(), FabState::Closed);
        assert_eq!(recorder.recurring, 1);
        assert_eq!(recorder.regular, 0);
    }

    #[test]
    fn selecting_while_closed_is_ignored() {
        let mut fab = FabController::new();
        let mut recorder = Recorder::default();

        assert!(!fab.select(FabAction::RegularTask, Instant::now(), &mut recorder));
        assert_eq!(recorder.regular, 0);
        assert_eq!(fab.state(), FabState::Closed);
    }

    #[test]
    fn double_toggle_returns_to_closed_without_intents() {
        let now = Instant::now();
        let mut fab = FabController::new();
        let recorder = Recorder::default();

        fab.toggle(now);
        fab.toggle(now + ms(10));

        assert_eq!(fab.state(), FabState::Closed);
        assert_eq!(recorder.regular + recorder.recurring, 0);
    }

    #[test]
    fn icon_rotates_to_forty_five_degrees_when_open() {
        let now = Instant::now();
        let mut fab = FabController::new();
        fab.toggle(now);

        assert!(fab.is_animating(now + ms(100)));
        assert!((fab.icon_rotation(now + ms(400)) - ICON_ROTATION_OPEN).abs() < 0.01);
        assert!((fab.icon_scale(now + ms(400)) - ICON_SCALE_OPEN).abs() < 0.01);
        assert!(!fab.is_animating(now + ms(400)));
    }

    #[test]
    fn toggling_mid_animation_reverses_from_current_angle() {
        let now = Instant::now();
        let mut fab = FabController::new();
        fab.toggle(now);

        let midway = now + ms(200);
        let angle = fab.icon_rotation(midway);
        fab.toggle(midway);

        assert_eq!(fab.state(), FabState::Closed);
        assert!((fab.icon_rotation(midway) - angle).abs() < 0.01);
        assert!(fab.icon_rotation(midway + ms(400)).abs() < 0.01);
        assert!((fab.icon_scale(midway + ms(400)) - 1.0).abs() < 0.01);
    }

    #[test]
    fn dismiss_closes_without_intents() {
        let now = Instant::now();
        let mut fab = FabController::new();
        fab.toggle(now);

        assert!(fab.dismiss(now));
        assert!(!fab.dismiss(now));
        assert_eq!(fab.state(), FabState::Closed);
    }
}
