use schedule_viewport::telemetry::{
    DEFAULT_FILTER, GESTURE_TRACE_FILTER, init_default_tracing, init_tracing,
};

#[test]
fn subscriber_installs_at_most_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
    assert!(!init_tracing(GESTURE_TRACE_FILTER));
}

#[test]
fn gesture_filter_extends_default_filter() {
    assert!(GESTURE_TRACE_FILTER.starts_with(DEFAULT_FILTER));
    assert!(GESTURE_TRACE_FILTER.contains("schedule_viewport::api=trace"));
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn install_is_a_no_op_without_feature() {
    assert!(!init_tracing(DEFAULT_FILTER));
    assert!(!init_tracing("not a filter ==="));
}
