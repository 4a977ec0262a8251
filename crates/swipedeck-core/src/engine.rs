//! The swipe decision state machine.

use swipedeck_animation::{AnimationSpec, Lerp, Tween};

use crate::config::SwipeConfig;

/// Cumulative pointer displacement since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Lerp for Offset {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            x: self.x.lerp(&target.x, fraction),
            y: self.y.lerp(&target.y, fraction),
        }
    }
}

/// Where a release resolves to, returned synchronously by
/// [`SwipeEngine::release_drag`] so the caller can start painting the
/// settle / fly-out animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveTarget {
    Like,
    Dislike,
    Cancel,
}

/// Final outcome of one completed drag-release interaction.
///
/// `Cancelled` is a normal, expected result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    Like,
    Dislike,
    Cancelled,
}

impl From<ResolveTarget> for SwipeDecision {
    fn from(target: ResolveTarget) -> Self {
        match target {
            ResolveTarget::Like => SwipeDecision::Like,
            ResolveTarget::Dislike => SwipeDecision::Dislike,
            ResolveTarget::Cancel => SwipeDecision::Cancelled,
        }
    }
}

/// Lifecycle phase of one card's engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    /// The settle / fly-out animation is interpolating the offset.
    Resolving(ResolveTarget),
    /// Terminal. A fresh engine is required for the next interaction.
    Done(ResolveTarget),
}

/// Gesture-to-decision state machine for a single card.
///
/// Driven by a single gesture-event source on one thread; each visible card
/// owns an independent engine instance.
#[derive(Debug)]
pub struct SwipeEngine {
    config: SwipeConfig,
    phase: SwipePhase,
    offset: Offset,
    settle: Option<Tween<Offset>>,
}

impl SwipeEngine {
    /// Create an idle engine for a freshly shown card.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: SwipePhase::Idle,
            offset: Offset::ZERO,
            settle: None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Start a drag gesture.
    ///
    /// From `Idle` the offset resets to zero. From `Resolving` the running
    /// animation is discarded and the drag resumes from whichever offset
    /// the interpolation had reached. Calling this in `Dragging` or `Done`
    /// is a contract violation.
    pub fn begin_drag(&mut self) {
        match self.phase {
            SwipePhase::Idle => {
                self.offset = Offset::ZERO;
                self.phase = SwipePhase::Dragging;
            }
            SwipePhase::Resolving(_) => {
                if let Some(tween) = self.settle.take() {
                    self.offset = tween.value();
                }
                log::debug!(
                    "drag restarted mid-resolution at ({}, {})",
                    self.offset.x,
                    self.offset.y
                );
                self.phase = SwipePhase::Dragging;
            }
            SwipePhase::Dragging | SwipePhase::Done(_) => {
                debug_assert!(false, "begin_drag called in {:?}", self.phase);
            }
        }
    }

    /// Accumulate a pointer-move delta.
    ///
    /// Valid only while `Dragging`; elsewhere this is a state-preserving
    /// no-op. Non-finite deltas are ignored.
    pub fn apply_drag_delta(&mut self, dx: f32, dy: f32) {
        if self.phase != SwipePhase::Dragging {
            log::warn!("apply_drag_delta ignored in {:?}", self.phase);
            return;
        }
        if !dx.is_finite() || !dy.is_finite() {
            log::warn!("non-finite drag delta ignored: ({dx}, {dy})");
            return;
        }
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// End the drag and evaluate the commit rule.
    ///
    /// Returns `Like` iff the horizontal offset exceeds the commit
    /// distance, `Dislike` iff it exceeds it in the negative direction,
    /// and `Cancel` otherwise; a release at exactly the threshold settles
    /// back. Starts the settle / fly-out animation. Valid only while
    /// `Dragging`.
    pub fn release_drag(&mut self) -> ResolveTarget {
        if self.phase != SwipePhase::Dragging {
            debug_assert!(false, "release_drag called in {:?}", self.phase);
            return ResolveTarget::Cancel;
        }

        let target = if self.offset.x > self.config.commit_distance {
            ResolveTarget::Like
        } else if self.offset.x < -self.config.commit_distance {
            ResolveTarget::Dislike
        } else {
            ResolveTarget::Cancel
        };
        log::debug!(
            "released at ({}, {}) -> {:?}",
            self.offset.x,
            self.offset.y,
            target
        );
        self.start_resolution(target);
        target
    }

    /// Abort the drag, forcing a settle-back regardless of offset.
    ///
    /// Used when the platform cancels the pointer stream mid-gesture, so a
    /// cancelled stream can never commit a decision. Valid only while
    /// `Dragging`.
    pub fn abort_drag(&mut self) {
        if self.phase != SwipePhase::Dragging {
            debug_assert!(false, "abort_drag called in {:?}", self.phase);
            return;
        }
        log::debug!("drag aborted at ({}, {})", self.offset.x, self.offset.y);
        self.start_resolution(ResolveTarget::Cancel);
    }

    fn start_resolution(&mut self, target: ResolveTarget) {
        let end = match target {
            ResolveTarget::Cancel => Offset::ZERO,
            // Only the horizontal axis flies off-screen; the vertical
            // offset holds its release value.
            ResolveTarget::Like => Offset::new(self.config.fly_out_distance, self.offset.y),
            ResolveTarget::Dislike => Offset::new(-self.config.fly_out_distance, self.offset.y),
        };
        let spec = AnimationSpec::tween(self.config.settle_duration_millis, self.config.settle_easing);
        self.settle = Some(Tween::new(self.offset, end, spec));
        self.phase = SwipePhase::Resolving(target);
    }

    /// Advance the settle / fly-out animation to `now_millis`.
    ///
    /// Returns `true` if the visual state changed (a repaint is needed).
    /// Outside `Resolving` this does nothing.
    pub fn tick(&mut self, now_millis: u64) -> bool {
        let Some(tween) = self.settle.as_mut() else {
            return false;
        };
        tween.tick(now_millis);
        let next = tween.value();
        if next != self.offset {
            self.offset = next;
            true
        } else {
            false
        }
    }

    /// Whether the settle / fly-out animation has reached its target.
    pub fn resolution_finished(&self) -> bool {
        matches!(self.phase, SwipePhase::Resolving(_))
            && self.settle.as_ref().is_some_and(|tween| tween.is_finished())
    }

    /// Finish the resolution and emit the decision.
    ///
    /// Transitions `Resolving` to the terminal `Done` phase and returns the
    /// decision exactly once; the offset snaps to the animation target if
    /// the caller completes early. Calling again in `Done` returns `None`
    /// without emitting a second decision.
    pub fn complete_resolution(&mut self) -> Option<SwipeDecision> {
        match self.phase {
            SwipePhase::Resolving(target) => {
                if let Some(tween) = self.settle.take() {
                    self.offset = *tween.target();
                }
                self.phase = SwipePhase::Done(target);
                Some(target.into())
            }
            SwipePhase::Done(_) => None,
            SwipePhase::Idle | SwipePhase::Dragging => {
                debug_assert!(false, "complete_resolution called in {:?}", self.phase);
                None
            }
        }
    }

    /// Current displacement, read on every render frame.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Rotation derived from the horizontal offset, saturating at the
    /// configured maximum in either direction.
    pub fn rotation_degrees(&self) -> f32 {
        (self.offset.x / self.config.rotation_divisor).clamp(
            -self.config.max_rotation_degrees,
            self.config.max_rotation_degrees,
        )
    }

    /// Card opacity. Fully opaque while dragging and while settling back;
    /// fades with horizontal distance only during fly-out.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            SwipePhase::Resolving(ResolveTarget::Like)
            | SwipePhase::Resolving(ResolveTarget::Dislike)
            | SwipePhase::Done(ResolveTarget::Like)
            | SwipePhase::Done(ResolveTarget::Dislike) => {
                1.0 - (self.offset.x.abs() / self.config.fly_out_distance).min(1.0)
            }
            _ => 1.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == SwipePhase::Dragging
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, SwipePhase::Done(_))
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
