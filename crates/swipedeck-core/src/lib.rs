//! Core swipe decision engine for Swipedeck.
//!
//! A [`SwipeEngine`] owns one card's drag displacement and turns a
//! pointer-down / move / up interaction into exactly one [`SwipeDecision`].
//! It is a plain pull-model state machine: the host rendering loop feeds it
//! drag deltas and timestamps, and reads the offset, rotation, and opacity
//! back on every frame to paint the card. The engine performs no I/O and
//! knows nothing about the rendered card stack.

pub mod config;
pub mod engine;

pub use config::SwipeConfig;
pub use engine::{Offset, ResolveTarget, SwipeDecision, SwipeEngine, SwipePhase};
