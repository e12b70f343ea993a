use std::time::{Duration, Instant};

use tracing::debug;

use super::animation::{Animator, Property, Timeline, Tween};

pub const TOAST_HIDDEN_OFFSET: f32 = -50.0;

const SLIDE_DURATION: Duration = Duration::from_millis(200);
const HOLD_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Hidden,
    Entering,
    Holding,
    Leaving,
}

pub fn toast_timeline() -> Timeline {
    Timeline::new()
        .parallel([Tween::new(Property::ToastOffset, 0.0, SLIDE_DURATION)])
        .delay(HOLD_DURATION)
        .parallel([Tween::new(
            Property::ToastOffset,
            TOAST_HIDDEN_OFFSET,
            SLIDE_DURATION,
        )])
}

/// A single transient label. Showing a new one restarts the timeline in place.
#[derive(Debug, Clone)]
pub struct Toast {
    label: Option<String>,
    shown_at: Option<Instant>,
    animator: Animator,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

impl Toast {
    pub fn new() -> Self {
        Self {
            label: None,
            shown_at: None,
            animator: Animator::new(&[(Property::ToastOffset, TOAST_HIDDEN_OFFSET)]),
        }
    }

    pub fn show(&mut self, label: impl Into<String>, now: Instant) {
        let label = label.into();
        debug!(label = label.as_str(), restarted = self.is_visible(), "toast shown");
        self.label = Some(label);
        self.shown_at = Some(now);
        self.animator.play(toast_timeline(), now);
    }

    /// Drop the toast once its timeline has run out. Returns `true` when it just hid.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() && self.phase(now) == ToastPhase::Hidden {
            self.label = None;
            self.shown_at = None;
            return true;
        }
        false
    }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let Some(shown_at) = self.shown_at else {
            return ToastPhase::Hidden;
        };
        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed < SLIDE_DURATION {
            ToastPhase::Entering
        } else if elapsed < SLIDE_DURATION + HOLD_DURATION {
            ToastPhase::Holding
        } else if elapsed < toast_timeline().duration() {
            ToastPhase::Leaving
        } else {
            ToastPhase::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        self.label.is_some()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn offset(&self, now: Instant) -> f32 {
        self.animator.value(Property::ToastOffset, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn starts_hidden() {
        let toast = Toast::new();
        assert_eq!(toast.phase(Instant::now()), ToastPhase::Hidden);
        assert!(toast.label().is_none());
    }

    #[test]
    fn show_is_immediately_visible() {
        let now = Instant::now();
        let mut toast = Toast::new();
        toast.show("Goals", now);

        assert!(toast.is_visible());
        assert_eq!(toast.phase(now), ToastPhase::Entering);
        assert_eq!(toast.label(), Some("Goals"));
    }

    #[test]
    fn follows_the_fixed_timeline() {
        let now = Instant::now();
        let mut toast = Toast::new();
        toast.show("Focused", now);

        assert_eq!(toast.phase(now + ms(199)), ToastPhase::Entering);
        assert_eq!(toast.phase(now + ms(200)), ToastPhase::Holding);
        assert_eq!(toast.phase(now + ms(1699)), ToastPhase::Holding);
        assert_eq!(toast.phase(now + ms(1700)), ToastPhase::Leaving);
        assert_eq!(toast.phase(now + ms(1900)), ToastPhase::Hidden);
        assert!(toast.offset(now + ms(1000)).abs() < 0.01);

        assert!(!toast.tick(now + ms(1899)));
        assert!(toast.is_visible());
        assert!(toast.tick(now + ms(1900)));
        assert!(!toast.is_visible());
        assert!(!toast.tick(now + ms(2000)));
    }

    #[test]
    fn second_show_restarts_with_new_label() {
        let now = Instant::now();
        let mut toast = Toast::new();
        toast.show("Focused", now);

        let later = now + ms(1000);
        toast.show("Progress", later);

        assert_eq!(toast.label(), Some("Progress"));
        assert_eq!(toast.phase(later), ToastPhase::Entering);
        assert!(!toast.tick(now + ms(1900)));
        assert_eq!(toast.label(), Some("Progress"));
        assert!(toast.tick(later + ms(1900)));
    }

    #[test]
    fn restart_while_leaving_slides_back_from_current_offset() {
        let now = Instant::now();
        let mut toast = Toast::new();
        toast.show("Backlogs", now);

        let leaving = now + ms(1800);
        let offset = toast.offset(leaving);
        assert!(offset < 0.0 && offset > TOAST_HIDDEN_OFFSET);

        toast.show("Goals", leaving);
        assert!((toast.offset(leaving) - offset).abs() < 0.01);
        assert!(toast.offset(leaving + ms(200)).abs() < 0.01);
    }
}
