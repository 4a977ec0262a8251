//! Tick-driven tween interpolation.

use crate::easing::Easing;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before the interpolation starts, in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween spec with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween spec.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the interpolation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Result of advancing a tween by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    /// The tween needs further ticks to reach its target.
    Running,
    /// The tween has reached its target; `value()` now equals the target.
    Finished,
}

/// An explicit interpolation task from a start value to a target value.
///
/// The start time is latched on the first [`tick`](Tween::tick); callers
/// supply timestamps from whatever clock drives their frame loop. Dropping
/// a tween cancels it, leaving the last interpolated value with whoever
/// read it.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp + Clone> {
    start: T,
    target: T,
    current: T,
    spec: AnimationSpec,
    start_time_millis: Option<u64>,
    finished: bool,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Create a tween from `start` to `target` driven by `spec`.
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            current: start.clone(),
            start,
            target,
            spec,
            start_time_millis: None,
            finished: false,
        }
    }

    /// Advance the interpolation to `now_millis`.
    ///
    /// The first call latches the start time. Progress is clamped to
    /// `[0, 1]`, so late ticks land exactly on the target. Ticking a
    /// finished tween is a no-op that keeps reporting `Finished`.
    pub fn tick(&mut self, now_millis: u64) -> TweenStatus {
        if self.finished {
            return TweenStatus::Finished;
        }

        let start_time = *self.start_time_millis.get_or_insert(now_millis);
        let elapsed = now_millis.saturating_sub(start_time);
        if elapsed < self.spec.delay_millis {
            return TweenStatus::Running;
        }

        let animation_elapsed = elapsed - self.spec.delay_millis;
        let duration = self.spec.duration_millis.max(1);
        let linear_progress = (animation_elapsed as f32 / duration as f32).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, progress);

        if linear_progress >= 1.0 {
            self.current = self.target.clone();
            self.finished = true;
            TweenStatus::Finished
        } else {
            TweenStatus::Running
        }
    }

    /// The last interpolated value.
    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// The value this tween is heading toward.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether the tween has reached its target.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
