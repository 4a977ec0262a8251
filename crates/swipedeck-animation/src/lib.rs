//! Animation primitives for Swipedeck.
//!
//! Provides easing curves and an explicit, tick-driven tween task. There is
//! no frame-callback registry here: the host rendering loop owns time and
//! advances every running tween by calling [`Tween::tick`] with the current
//! timestamp. Cancelling an animation is dropping the tween; its last
//! interpolated value stays readable until then.

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::{AnimationSpec, Lerp, Tween, TweenStatus};
