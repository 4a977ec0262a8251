//! Drag gesture recognition.

use swipedeck_core::{SwipeEngine, SwipePhase};

use crate::gesture_constants::TOUCH_SLOP;
use crate::pointer::{PointerEvent, PointerEventKind};

/// Per-card recognizer that feeds a pointer stream into a [`SwipeEngine`].
///
/// Arms on `Down` and accumulates movement until the touch slop is passed,
/// then begins the drag and forwards every subsequent delta. `Up` releases
/// the drag; `Cancel` aborts it, so an interrupted stream always settles
/// back. Pressing a card whose fly-out or settle animation is still running
/// grabs it immediately, without a second slop phase.
#[derive(Debug, Default)]
pub struct DragGestureRecognizer {
    pressed: bool,
    slop_passed: bool,
    accumulated_distance: f32,
    last_position: Option<(f32, f32)>,
}

impl DragGestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any in-flight gesture. Used when the card under this
    /// recognizer changes.
    pub fn reset(&mut self) {
        self.pressed = false;
        self.slop_passed = false;
        self.accumulated_distance = 0.0;
        self.last_position = None;
    }

    /// Feed one pointer event, driving `engine` as the gesture develops.
    ///
    /// Returns `true` if the event belonged to a tracked gesture.
    pub fn handle(&mut self, engine: &mut SwipeEngine, event: &PointerEvent) -> bool {
        if !event.x.is_finite() || !event.y.is_finite() {
            log::warn!("non-finite pointer position ignored: ({}, {})", event.x, event.y);
            return false;
        }

        match event.kind {
            PointerEventKind::Down => {
                self.pressed = true;
                self.accumulated_distance = 0.0;
                self.last_position = Some((event.x, event.y));
                // Re-grab a card that is still animating: the engine keeps
                // the interpolated offset, and slop has already been earned
                // by the original gesture.
                if matches!(engine.phase(), SwipePhase::Resolving(_)) {
                    engine.begin_drag();
                    self.slop_passed = true;
                } else {
                    self.slop_passed = false;
                }
                true
            }
            PointerEventKind::Move => {
                if !self.pressed {
                    return false;
                }
                let Some((last_x, last_y)) = self.last_position else {
                    return false;
                };
                let dx = event.x - last_x;
                let dy = event.y - last_y;
                self.last_position = Some((event.x, event.y));

                if !self.slop_passed {
                    self.accumulated_distance += (dx * dx + dy * dy).sqrt();
                    if self.accumulated_distance > TOUCH_SLOP {
                        self.slop_passed = true;
                        match engine.phase() {
                            SwipePhase::Idle => {
                                engine.begin_drag();
                                engine.apply_drag_delta(dx, dy);
                            }
                            SwipePhase::Dragging => engine.apply_drag_delta(dx, dy),
                            phase => {
                                log::warn!("drag slop passed against an engine in {:?}", phase)
                            }
                        }
                    }
                } else {
                    engine.apply_drag_delta(dx, dy);
                }
                true
            }
            PointerEventKind::Up => {
                if !self.pressed {
                    return false;
                }
                if self.slop_passed && engine.is_dragging() {
                    engine.release_drag();
                }
                self.reset();
                true
            }
            PointerEventKind::Cancel => {
                if !self.pressed {
                    return false;
                }
                if self.slop_passed && engine.is_dragging() {
                    engine.abort_drag();
                }
                self.reset();
                true
            }
        }
    }

    /// Whether a pointer is currently down on this card.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
#[path = "tests/recognizer_tests.rs"]
mod tests;
