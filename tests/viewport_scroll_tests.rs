use chrono::{NaiveDate, NaiveDateTime};
use schedule_viewport::{ViewportConfig, ViewportController, ViewportError};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid date")
}

fn six_hour_controller() -> ViewportController {
    // 1350 px over 6h gives exactly 1/16 px per second.
    let config = ViewportConfig::default().with_initial_view(21_600.0, 1_350);
    ViewportController::new(at(10, 0, 0), config).expect("controller init")
}

#[test]
fn scroll_moves_window_without_animation() {
    let mut controller = six_hour_controller();

    let consumed = controller.scroll_by(60.0).expect("scroll");
    assert_eq!(consumed, 60.0);
    assert!(!controller.is_animating());
    assert_eq!(controller.offset_seconds(), -960.0);
    assert_eq!(controller.visible_range(), (at(9, 23, 44), at(10, 5, 44)));
}

#[test]
fn negative_delta_moves_window_forward() {
    let mut controller = six_hour_controller();

    controller.scroll_by(-225.0).expect("scroll");
    assert_eq!(controller.visible_range(), (at(10, 1, 0), at(10, 7, 0)));
}

#[test]
fn scroll_is_always_fully_consumed() {
    let mut controller = six_hour_controller();
    for delta in [0.0, 1.5, -12_000.0, 1e6] {
        assert_eq!(controller.scroll_by(delta).expect("scroll"), delta);
    }
}

#[test]
fn split_scrolls_match_single_scroll() {
    let mut split = six_hour_controller();
    let mut single = six_hour_controller();

    split.scroll_by(37.0).expect("first");
    split.scroll_by(-112.0).expect("second");
    single.scroll_by(-75.0).expect("combined");

    assert!((split.offset_seconds() - single.offset_seconds()).abs() <= 1e-9);
    assert_eq!(split.visible_range(), single.visible_range());
}

#[test]
fn visible_range_read_is_idempotent() {
    let mut controller = six_hour_controller();
    controller.scroll_by(13.0).expect("scroll");

    let first = controller.visible_range();
    let second = controller.visible_range();
    assert_eq!(first, second);
}

#[test]
fn scroll_cancels_in_flight_offset_animation() {
    let mut controller = six_hour_controller();
    controller.fling(-8_400.0).expect("fling");
    assert!(controller.is_animating());

    controller.advance(0.1).expect("advance");
    let mid_flight = controller.offset_seconds();
    controller.scroll_by(16.0).expect("scroll");

    assert!(!controller.is_animating());
    assert!((controller.offset_seconds() - (mid_flight - 256.0)).abs() <= 1e-9);
    assert_eq!(controller.offset_target_seconds(), controller.offset_seconds());
}

#[test]
fn scroll_rejects_non_finite_delta() {
    let mut controller = six_hour_controller();
    let err = controller
        .scroll_by(f64::NAN)
        .expect_err("nan delta must fail");
    assert!(matches!(err, ViewportError::InvalidData(_)));
    assert_eq!(controller.offset_seconds(), 0.0);
}
