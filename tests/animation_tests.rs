use approx::assert_abs_diff_eq;
use schedule_viewport::animation::{AnimatedScalar, AnimationPhase, AnimationSpec, Easing};

#[test]
fn linear_animation_interpolates_and_finishes_at_target() {
    let mut scalar = AnimatedScalar::new(0.0);
    scalar.animate_to(100.0, 0.0, AnimationSpec::new(1.0, Easing::Linear));
    assert!(scalar.is_animating());
    assert_eq!(scalar.target(), 100.0);

    assert_abs_diff_eq!(scalar.sample(0.25), 25.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scalar.sample(0.5), 50.0, epsilon = 1e-12);
    assert_eq!(scalar.sample(1.5), 100.0);
    assert_eq!(scalar.phase(), AnimationPhase::Idle);
}

#[test]
fn retarget_continues_from_sampled_value() {
    let mut scalar = AnimatedScalar::new(0.0);
    let spec = AnimationSpec::new(1.0, Easing::Linear);
    scalar.animate_to(100.0, 0.0, spec);
    scalar.sample(0.5);

    scalar.animate_to(-100.0, 0.5, spec);
    match scalar.phase() {
        AnimationPhase::Animating {
            from,
            to,
            started_at,
            ..
        } => {
            assert_abs_diff_eq!(from, 50.0, epsilon = 1e-12);
            assert_eq!(to, -100.0);
            assert_eq!(started_at, 0.5);
        }
        AnimationPhase::Idle => panic!("retarget must keep animating"),
    }

    assert_abs_diff_eq!(scalar.sample(1.0), -25.0, epsilon = 1e-12);
    assert_eq!(scalar.sample(2.0), -100.0);
}

#[test]
fn snap_cancels_animation() {
    let mut scalar = AnimatedScalar::new(0.0);
    scalar.animate_to(100.0, 0.0, AnimationSpec::default());
    scalar.snap_to(7.0);

    assert!(!scalar.is_animating());
    assert_eq!(scalar.sample(10.0), 7.0);
    assert_eq!(scalar.target(), 7.0);
}

#[test]
fn sampling_before_start_holds_initial_value() {
    let mut scalar = AnimatedScalar::new(10.0);
    scalar.animate_to(20.0, 5.0, AnimationSpec::new(1.0, Easing::Decelerate));
    assert_eq!(scalar.sample(4.0), 10.0);
    // Cubic ease-out is 7/8 of the way at half time.
    assert_abs_diff_eq!(scalar.sample(5.5), 18.75, epsilon = 1e-12);
}
