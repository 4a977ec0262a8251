use super::*;
use swipedeck_core::{SwipeConfig, SwipeDecision, SwipePhase};
use swipedeck_stack::CardStack;

fn robot_with(names: &[&str]) -> GestureRobot<String> {
    let mut stack = CardStack::new(SwipeConfig::default());
    for name in names {
        stack.push((*name).to_string());
    }
    GestureRobot::new(stack)
}

#[test]
fn swiping_through_a_deck_reports_outcomes_in_order() {
    let mut robot = robot_with(&["ada", "grace", "edsger"]);

    robot.swipe_right(400.0);
    robot.wait_for_outcome().expect("first fly-out completes");

    robot.swipe_left(400.0);
    robot.wait_for_outcome().expect("second fly-out completes");

    robot.swipe_right(50.0);
    robot.wait_for_outcome().expect("settle-back completes");

    let decisions: Vec<SwipeDecision> = robot
        .outcomes()
        .iter()
        .map(|outcome| outcome.decision)
        .collect();
    assert_eq!(
        decisions,
        vec![
            SwipeDecision::Like,
            SwipeDecision::Dislike,
            SwipeDecision::Cancelled,
        ]
    );
    // Two committed, one retained.
    assert_eq!(robot.stack().len(), 1);
}

#[test]
fn regrabbing_mid_fly_out_can_reverse_the_decision() {
    let mut robot = robot_with(&["ada"]);

    robot.swipe_right(400.0);
    // Let the fly-out run a little, then catch the card.
    robot.advance_frames(5);
    assert!(robot.outcomes().is_empty());

    robot.press(400.0, 0.0);
    let engine = robot.stack().engine().expect("top card engine");
    assert_eq!(engine.phase(), SwipePhase::Dragging);
    let grabbed_x = engine.offset().x;
    assert!(grabbed_x > 400.0, "grab should keep the interpolated offset");

    // Drag it back across to the other side and release.
    robot.drag_by(-(grabbed_x + 350.0), 0.0, 8);
    robot.release();

    let outcome = robot.wait_for_outcome().expect("reversed fly-out completes");
    assert_eq!(outcome.decision, SwipeDecision::Dislike);
    assert!(robot.stack().is_empty());
}

#[test]
fn cancelling_the_stream_keeps_the_card() {
    let mut robot = robot_with(&["ada"]);

    robot.press(0.0, 0.0);
    robot.drag_by(500.0, 0.0, 4);
    robot.cancel();

    let outcome = robot.wait_for_outcome().expect("settle-back completes");
    assert_eq!(outcome.decision, SwipeDecision::Cancelled);
    assert_eq!(robot.stack().len(), 1);
}

#[test]
fn programmatic_decisions_interleave_with_gestures() {
    let mut robot = robot_with(&["ada", "grace"]);

    robot.stack_mut().like_top().expect("action bar pops the top");
    assert_eq!(robot.stack().len(), 1);

    robot.swipe_left(400.0);
    let outcome = robot.wait_for_outcome().expect("fly-out completes");
    assert_eq!(outcome.decision, SwipeDecision::Dislike);
    assert!(robot.stack().is_empty());
}

#[test]
fn waiting_on_an_idle_stack_reports_nothing() {
    let mut robot = robot_with(&["ada"]);
    assert!(robot.wait_for_outcome().is_none());
    assert_eq!(robot.stack().len(), 1);
}
