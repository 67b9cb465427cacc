//! Opt-in log output for hosts embedding the viewport.
//!
//! Resize, fling and settle decisions are emitted at `debug`; per-gesture
//! scroll steps and animation completion at `trace` under
//! `schedule_viewport::api`. Nothing is printed until a subscriber is installed.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "schedule_viewport=info";

/// Keeps everything at `info` except the controller, which logs every
/// scroll step and settle.
pub const GESTURE_TRACE_FILTER: &str = "schedule_viewport=info,schedule_viewport::api=trace";

/// Installs a compact subscriber filtered by [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact `tracing` subscriber. `RUST_LOG` wins over
/// `fallback_filter` when set.
///
/// Returns `false` when the `telemetry` feature is disabled, the fallback
/// filter does not parse, or the host already installed a global subscriber.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        install_fmt_subscriber(fallback_filter)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install_fmt_subscriber(fallback_filter: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(fallback_filter) {
            Ok(filter) => filter,
            Err(_) => return false,
        },
    };

    // Event timestamps would be wall time; animations run on the host clock.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .compact()
        .try_init()
        .is_ok()
}
