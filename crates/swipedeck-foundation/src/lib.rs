//! Pointer input handling for Swipedeck.
//!
//! Translates a raw pointer event stream (down / move / up / cancel) into
//! the swipe engine's drag operations, applying a touch-slop threshold so
//! taps and finger jitter never start a drag.

pub mod gesture_constants;
pub mod pointer;
pub mod recognizer;

pub use gesture_constants::TOUCH_SLOP;
pub use pointer::{PointerEvent, PointerEventKind};
pub use recognizer::DragGestureRecognizer;
