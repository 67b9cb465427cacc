use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};

pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

#[must_use]
pub fn truncate_to_day(time: NaiveDateTime) -> NaiveDateTime {
    time.date().and_time(NaiveTime::MIN)
}

#[must_use]
pub fn truncate_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    truncate_to_day(time) + TimeDelta::hours(i64::from(time.hour()))
}

/// Adds fractional seconds with millisecond resolution.
///
/// Results outside chrono's representable range saturate at
/// `NaiveDateTime::MIN`/`MAX` instead of panicking.
#[must_use]
pub fn add_seconds(time: NaiveDateTime, seconds: f64) -> NaiveDateTime {
    let millis = (seconds * 1_000.0).round();
    let saturated = if millis >= 0.0 {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    };
    // `as` saturates for out-of-range floats.
    TimeDelta::try_milliseconds(millis as i64)
        .and_then(|delta| time.checked_add_signed(delta))
        .unwrap_or(saturated)
}

/// Signed seconds from `from` to `to`, millisecond resolution.
#[must_use]
pub fn seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / 1_000.0
}

/// Iterates `start + step, start + 2 * step, ...` while strictly before `end`.
///
/// Both bounds are exclusive. A non-positive step yields nothing.
pub fn step_between(
    start: NaiveDateTime,
    end: NaiveDateTime,
    step: TimeDelta,
) -> impl Iterator<Item = NaiveDateTime> {
    let first = if step > TimeDelta::zero() {
        start.checked_add_signed(step)
    } else {
        None
    };
    std::iter::successors(first, move |current| current.checked_add_signed(step))
        .take_while(move |current| *current < end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid date")
    }

    #[test]
    fn truncation_drops_sub_unit_components() {
        assert_eq!(truncate_to_hour(at(13, 45, 12)), at(13, 0, 0));
        assert_eq!(truncate_to_day(at(13, 45, 12)), at(0, 0, 0));
        assert_eq!(truncate_to_hour(at(0, 0, 0)), at(0, 0, 0));
    }

    #[test]
    fn add_seconds_rounds_to_milliseconds() {
        assert_eq!(add_seconds(at(1, 0, 0), 59.9996), at(1, 1, 0));
        assert_eq!(add_seconds(at(1, 0, 0), -3_600.0), at(0, 0, 0));
        assert_eq!(seconds_between(at(1, 0, 0), at(0, 30, 0)), -1_800.0);
    }

    #[test]
    fn add_seconds_saturates_instead_of_panicking() {
        assert_eq!(add_seconds(at(0, 0, 0), f64::MAX), NaiveDateTime::MAX);
        assert_eq!(add_seconds(at(0, 0, 0), f64::MIN), NaiveDateTime::MIN);
    }

    #[test]
    fn step_between_excludes_both_bounds() {
        let steps: Vec<_> = step_between(at(1, 0, 0), at(4, 0, 0), TimeDelta::hours(1)).collect();
        assert_eq!(steps, vec![at(2, 0, 0), at(3, 0, 0)]);

        let empty: Vec<_> = step_between(at(1, 0, 0), at(4, 0, 0), TimeDelta::zero()).collect();
        assert!(empty.is_empty());
    }
}
