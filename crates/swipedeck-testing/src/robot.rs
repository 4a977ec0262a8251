//! Gesture robot for end-to-end stack testing.
//!
//! The robot scripts pointer traces against a real [`CardStack`] and owns
//! the test clock, so a whole press / drag / release / settle interaction
//! reads as a few lines:
//!
//! ```
//! use swipedeck_core::{SwipeConfig, SwipeDecision};
//! use swipedeck_stack::CardStack;
//! use swipedeck_testing::GestureRobot;
//!
//! let mut stack = CardStack::new(SwipeConfig::default());
//! stack.push("ada");
//! let mut robot = GestureRobot::new(stack);
//!
//! robot.swipe_right(400.0);
//! let outcome = robot.wait_for_outcome().expect("fly-out completes");
//! assert_eq!(outcome.decision, SwipeDecision::Like);
//! ```

use swipedeck_foundation::PointerEvent;
use swipedeck_stack::{CardStack, SwipeOutcome};

/// Milliseconds per simulated frame (~60 FPS).
pub const FRAME_MILLIS: u64 = 16;

/// Frames the robot will wait for an animation before giving up.
const MAX_WAIT_FRAMES: usize = 120;

/// Scripts pointer input and frame advancement against a card stack.
pub struct GestureRobot<T> {
    stack: CardStack<T>,
    now_millis: u64,
    pointer: (f32, f32),
    outcomes: Vec<SwipeOutcome>,
}

impl<T> GestureRobot<T> {
    pub fn new(stack: CardStack<T>) -> Self {
        Self {
            stack,
            now_millis: 0,
            pointer: (0.0, 0.0),
            outcomes: Vec::new(),
        }
    }

    pub fn stack(&self) -> &CardStack<T> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CardStack<T> {
        &mut self.stack
    }

    /// The simulated clock, in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_millis
    }

    /// Every outcome observed so far, oldest first.
    pub fn outcomes(&self) -> &[SwipeOutcome] {
        &self.outcomes
    }

    /// Press the pointer down at the given position.
    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        self.stack.handle_pointer(&PointerEvent::down(x, y));
    }

    /// Move the pointer to the given position in one step.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        self.stack.handle_pointer(&PointerEvent::moved(x, y));
    }

    /// Release the pointer at its current position.
    pub fn release(&mut self) {
        let (x, y) = self.pointer;
        self.stack.handle_pointer(&PointerEvent::up(x, y));
    }

    /// Abort the pointer stream at its current position.
    pub fn cancel(&mut self) {
        let (x, y) = self.pointer;
        self.stack.handle_pointer(&PointerEvent::cancel(x, y));
    }

    /// Drag from the current pointer position by `(dx, dy)` in `steps`
    /// evenly spaced moves.
    pub fn drag_by(&mut self, dx: f32, dy: f32, steps: usize) {
        let steps = steps.max(1);
        let (start_x, start_y) = self.pointer;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(start_x + dx * fraction, start_y + dy * fraction);
        }
    }

    /// Full press / drag / release moving `distance` to the right.
    pub fn swipe_right(&mut self, distance: f32) {
        self.press(0.0, 0.0);
        self.drag_by(distance, 0.0, 4);
        self.release();
    }

    /// Full press / drag / release moving `distance` to the left.
    pub fn swipe_left(&mut self, distance: f32) {
        self.press(0.0, 0.0);
        self.drag_by(-distance, 0.0, 4);
        self.release();
    }

    /// Advance the clock by `frames` simulated frames, collecting any
    /// outcomes the stack reports.
    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.now_millis += FRAME_MILLIS;
            if let Some(outcome) = self.stack.tick(self.now_millis) {
                self.outcomes.push(outcome);
            }
        }
    }

    /// Run frames until the stack reports an outcome, or give up after the
    /// animation budget.
    pub fn wait_for_outcome(&mut self) -> Option<SwipeOutcome> {
        for _ in 0..MAX_WAIT_FRAMES {
            self.now_millis += FRAME_MILLIS;
            if let Some(outcome) = self.stack.tick(self.now_millis) {
                self.outcomes.push(outcome);
                return Some(outcome);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
