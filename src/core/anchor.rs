use serde::{Deserialize, Serialize};

use super::primitives::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// Grid step the offset snaps to once a fling or zoom settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorRange {
    Hour,
    ThreeHours,
    SixHours,
    Day,
}

impl AnchorRange {
    /// Picks the anchor bucket for a view span, evaluated high to low with
    /// half-open thresholds: `> 24h`, `> 12h`, `> 6h`, otherwise hourly.
    #[must_use]
    pub fn for_view_span(view_span_seconds: f64) -> Self {
        let hours = |n: i64| (n * SECONDS_PER_HOUR) as f64;
        if view_span_seconds > hours(24) {
            Self::Day
        } else if view_span_seconds > hours(12) {
            Self::SixHours
        } else if view_span_seconds > hours(6) {
            Self::ThreeHours
        } else {
            Self::Hour
        }
    }

    #[must_use]
    pub fn seconds(self) -> i64 {
        match self {
            Self::Hour => SECONDS_PER_HOUR,
            Self::ThreeHours => 3 * SECONDS_PER_HOUR,
            Self::SixHours => 6 * SECONDS_PER_HOUR,
            Self::Day => SECONDS_PER_DAY,
        }
    }

    #[must_use]
    pub fn hours(self) -> u32 {
        match self {
            Self::Hour => 1,
            Self::ThreeHours => 3,
            Self::SixHours => 6,
            Self::Day => 24,
        }
    }

    /// Whether intermediate hour gridlines are drawn at this zoom level.
    #[must_use]
    pub fn shows_hour_marks(self) -> bool {
        self != Self::Day
    }
}

/// Snaps a pixel position to the nearest multiple of `anchor_range_px`.
///
/// Position `0` always maps to itself. Equidistant targets resolve to the
/// later (upper) anchor. The remainder keeps the sign of the target, so for
/// negative positions the first candidate is the anchor toward zero.
#[must_use]
pub fn find_settle_position(target_px: f64, anchor_range_px: f64) -> f64 {
    if target_px == 0.0 {
        return 0.0;
    }
    if !anchor_range_px.is_finite() || anchor_range_px <= 0.0 {
        return target_px;
    }

    let lower = target_px - target_px % anchor_range_px;
    let upper = lower + anchor_range_px;
    if (target_px - lower).abs() >= (target_px - upper).abs() {
        upper
    } else {
        lower
    }
}
