use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Animated visual properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Degrees of rotation applied to the FAB icon.
    IconRotation,
    /// Scale factor of the FAB icon.
    IconScale,
    /// Vertical offset of the toast; negative values slide it out of view.
    ToastOffset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub property: Property,
    pub to: f32,
    pub duration: Duration,
}

impl Tween {
    pub fn new(property: Property, to: f32, duration: Duration) -> Self {
        Self {
            property,
            to,
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Tweens started together; the step lasts as long as its longest tween.
    Parallel(Vec<Tween>),
    Delay(Duration),
}

impl Step {
    pub fn duration(&self) -> Duration {
        match self {
            Step::Parallel(tweens) => tweens
                .iter()
                .map(|tween| tween.duration)
                .max()
                .unwrap_or_default(),
            Step::Delay(duration) => *duration,
        }
    }
}

/// Declarative description of an animation: steps run one after another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, tweens: impl IntoIterator<Item = Tween>) -> Self {
        self.steps.push(Step::Parallel(tweens.into_iter().collect()));
        self
    }

    pub fn delay(mut self, duration: Duration) -> Self {
        self.steps.push(Step::Delay(duration));
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn duration(&self) -> Duration {
        self.steps.iter().map(Step::duration).sum()
    }

    /// Sample `property` `elapsed` into the timeline, starting from `from`.
    fn sample(&self, property: Property, from: f32, elapsed: Duration) -> f32 {
        let mut value = from;
        let mut step_start = Duration::ZERO;
        for step in &self.steps {
            if elapsed < step_start {
                break;
            }
            if let Step::Parallel(tweens) = step {
                let local = elapsed - step_start;
                for tween in tweens.iter().filter(|t| t.property == property) {
                    value = lerp(value, tween.to, progress(local, tween.duration));
                }
            }
            step_start += step.duration();
        }
        value
    }
}

#[derive(Debug, Clone)]
struct Playback {
    timeline: Timeline,
    started: Instant,
}

/// Plays one [`Timeline`] at a time over a set of property values.
///
/// Playing a new timeline while another is in flight continues from the values
/// sampled at that instant.
#[derive(Debug, Clone)]
pub struct Animator {
    base: HashMap<Property, f32>,
    playback: Option<Playback>,
}

impl Animator {
    pub fn new(initial: &[(Property, f32)]) -> Self {
        Self {
            base: initial.iter().copied().collect(),
            playback: None,
        }
    }

    pub fn play(&mut self, timeline: Timeline, now: Instant) {
        let mut properties: Vec<Property> = self.base.keys().copied().collect();
        for step in timeline.steps() {
            if let Step::Parallel(tweens) = step {
                properties.extend(tweens.iter().map(|tween| tween.property));
            }
        }

        let snapshot: Vec<(Property, f32)> = properties
            .into_iter()
            .map(|property| (property, self.value(property, now)))
            .collect();
        self.base.extend(snapshot);
        self.playback = Some(Playback {
            timeline,
            started: now,
        });
    }

    pub fn value(&self, property: Property, now: Instant) -> f32 {
        let from = self.base.get(&property).copied().unwrap_or_default();
        match &self.playback {
            Some(playback) => {
                let elapsed = now.saturating_duration_since(playback.started);
                playback.timeline.sample(property, from, elapsed)
            }
            None => from,
        }
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.playback.as_ref().map_or(true, |playback| {
            now.saturating_duration_since(playback.started) >= playback.timeline.duration()
        })
    }
}

fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
