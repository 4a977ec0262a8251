use super::*;
use crate::easing::Easing;

#[test]
fn first_tick_latches_start_time() {
    let mut tween = Tween::new(0.0f32, 100.0, AnimationSpec::linear(100));
    assert_eq!(tween.tick(5_000), TweenStatus::Running);
    assert_eq!(tween.value(), 0.0);

    assert_eq!(tween.tick(5_050), TweenStatus::Running);
    assert!((tween.value() - 50.0).abs() < 1e-3);
}

#[test]
fn reaches_target_exactly_at_duration() {
    let mut tween = Tween::new(0.0f32, 100.0, AnimationSpec::linear(100));
    tween.tick(0);
    assert_eq!(tween.tick(100), TweenStatus::Finished);
    assert_eq!(tween.value(), 100.0);
    assert!(tween.is_finished());
}

#[test]
fn late_tick_lands_on_target_not_past_it() {
    let mut tween = Tween::new(0.0f32, 100.0, AnimationSpec::linear(100));
    tween.tick(0);
    assert_eq!(tween.tick(10_000), TweenStatus::Finished);
    assert_eq!(tween.value(), 100.0);
}

#[test]
fn finished_tween_keeps_reporting_finished() {
    let mut tween = Tween::new(0.0f32, 10.0, AnimationSpec::linear(10));
    tween.tick(0);
    tween.tick(10);
    assert!(tween.is_finished());
    assert_eq!(tween.tick(20), TweenStatus::Finished);
    assert_eq!(tween.value(), 10.0);
}

#[test]
fn delay_holds_the_start_value() {
    let spec = AnimationSpec::linear(100).with_delay(50);
    let mut tween = Tween::new(0.0f32, 100.0, spec);
    tween.tick(0);
    assert_eq!(tween.tick(40), TweenStatus::Running);
    assert_eq!(tween.value(), 0.0);

    assert_eq!(tween.tick(100), TweenStatus::Running);
    assert!((tween.value() - 50.0).abs() < 1e-3);
}

#[test]
fn eased_tween_reports_intermediate_values() {
    let spec = AnimationSpec::tween(100, Easing::FastOutSlowIn);
    let mut tween = Tween::new(0.0f32, 1.0, spec);
    tween.tick(0);

    let mut saw_midpoint = false;
    for now in (16..100).step_by(16) {
        if tween.tick(now) == TweenStatus::Finished {
            break;
        }
        let value = tween.value();
        if value > 0.0 && value < 1.0 {
            saw_midpoint = true;
        }
    }
    assert!(saw_midpoint, "tween should report intermediate values");

    assert_eq!(tween.tick(100), TweenStatus::Finished);
    assert_eq!(tween.value(), 1.0);
}

#[test]
fn zero_duration_finishes_on_first_elapsed_tick() {
    let mut tween = Tween::new(0.0f32, 1.0, AnimationSpec::linear(0));
    tween.tick(0);
    assert_eq!(tween.tick(1), TweenStatus::Finished);
    assert_eq!(tween.value(), 1.0);
}

#[test]
fn default_spec_matches_material_tween() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
    assert_eq!(spec.delay_millis, 0);
}
