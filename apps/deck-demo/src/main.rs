//! Headless Swipedeck demo.
//!
//! Seeds a deck of profiles and replays scripted pointer gestures through
//! the real input path: recognizer, engine, settle animation, stack
//! removal. Frames are simulated at 60 FPS on a synthetic clock, so the
//! run is deterministic. Run with `RUST_LOG=debug` to watch the engine's
//! state transitions.

use swipedeck_core::{SwipeConfig, SwipeDecision};
use swipedeck_foundation::PointerEvent;
use swipedeck_stack::{CardStack, SwipeOutcome};

#[derive(Debug)]
struct Profile {
    name: &'static str,
    age: u32,
    location: &'static str,
}

const FRAME_MILLIS: u64 = 16;

/// Replay a press / drag / release gesture ending `dx` from the press
/// point, then run frames until the interaction resolves.
fn swipe(stack: &mut CardStack<Profile>, now: &mut u64, dx: f32) -> Option<SwipeOutcome> {
    stack.handle_pointer(&PointerEvent::down(0.0, 0.0));
    for step in 1..=4 {
        let x = dx * step as f32 / 4.0;
        stack.handle_pointer(&PointerEvent::moved(x, 0.0));
    }
    stack.handle_pointer(&PointerEvent::up(dx, 0.0));
    run_frames(stack, now)
}

/// Advance the simulated clock until the stack reports an outcome or the
/// animation budget runs out.
fn run_frames(stack: &mut CardStack<Profile>, now: &mut u64) -> Option<SwipeOutcome> {
    for _ in 0..120 {
        *now += FRAME_MILLIS;
        if let Some(outcome) = stack.tick(*now) {
            return Some(outcome);
        }
    }
    None
}

fn describe(decision: SwipeDecision) -> &'static str {
    match decision {
        SwipeDecision::Like => "liked",
        SwipeDecision::Dislike => "passed on",
        SwipeDecision::Cancelled => "kept",
    }
}

fn report(stack: &CardStack<Profile>, outcome: Option<SwipeOutcome>) {
    let Some(outcome) = outcome else {
        log::warn!("gesture did not resolve within the animation budget");
        return;
    };
    println!(
        "{} card {} ({} remaining)",
        describe(outcome.decision),
        outcome.card.raw(),
        stack.len()
    );
}

fn main() {
    env_logger::init();

    let mut stack = CardStack::new(SwipeConfig::default());
    for profile in [
        Profile { name: "Juniper", age: 27, location: "Lisbon" },
        Profile { name: "Marlowe", age: 31, location: "Osaka" },
        Profile { name: "Sable", age: 24, location: "Reykjavik" },
        Profile { name: "Callum", age: 29, location: "Valparaiso" },
    ] {
        println!("queued {} ({}, {})", profile.name, profile.age, profile.location);
        stack.push(profile);
    }

    let mut now = 0u64;

    // Decisive swipe right on the top profile.
    let outcome = swipe(&mut stack, &mut now, 420.0);
    report(&stack, outcome);

    // Hesitant nudge: under the commit threshold, the card settles back.
    let outcome = swipe(&mut stack, &mut now, 140.0);
    report(&stack, outcome);

    // Second attempt on the same card, committed left this time.
    let outcome = swipe(&mut stack, &mut now, -380.0);
    report(&stack, outcome);

    // A drag the platform cancels mid-stream always settles back.
    stack.handle_pointer(&PointerEvent::down(0.0, 0.0));
    stack.handle_pointer(&PointerEvent::moved(500.0, 0.0));
    stack.handle_pointer(&PointerEvent::cancel(500.0, 0.0));
    let outcome = run_frames(&mut stack, &mut now);
    report(&stack, outcome);

    // The action bar skips the animation entirely.
    if let Ok(outcome) = stack.like_top() {
        println!(
            "{} card {} via action bar ({} remaining)",
            describe(outcome.decision),
            outcome.card.raw(),
            stack.len()
        );
    }

    while let Ok(outcome) = stack.dislike_top() {
        println!(
            "{} card {} via action bar ({} remaining)",
            describe(outcome.decision),
            outcome.card.raw(),
            stack.len()
        );
    }

    if stack.is_empty() {
        println!("no more profiles nearby");
    }
}
