use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::anchor::AnchorRange;
use crate::core::primitives::{add_seconds, seconds_between, step_between, truncate_to_hour};
use crate::error::{ViewportError, ViewportResult};

/// Hour gridlines inside the visible window; typical spans stay inline.
pub type AnchorHours = SmallVec<[NaiveDateTime; 8]>;

/// Pixel projection of a time interval onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelExtent {
    pub width_px: i64,
    pub offset_px: i64,
}

/// One frame of the time axis: the canonical fields every derived read is
/// computed from.
///
/// Values are captured from the controller's animated scalars at read time,
/// so nothing here is cached across frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    reference: NaiveDateTime,
    offset_seconds: f64,
    view_span_seconds: f64,
    width_px: u32,
}

impl TimeAxis {
    pub fn new(
        reference: NaiveDateTime,
        offset_seconds: f64,
        view_span_seconds: f64,
        width_px: u32,
    ) -> ViewportResult<Self> {
        if !offset_seconds.is_finite() {
            return Err(ViewportError::InvalidData(
                "offset seconds must be finite".to_owned(),
            ));
        }
        validate_view_span(view_span_seconds)?;
        validate_width(width_px)?;
        Ok(Self::from_parts(
            reference,
            offset_seconds,
            view_span_seconds,
            width_px,
        ))
    }

    /// Builds an axis from values the caller already validated.
    pub(crate) fn from_parts(
        reference: NaiveDateTime,
        offset_seconds: f64,
        view_span_seconds: f64,
        width_px: u32,
    ) -> Self {
        Self {
            reference,
            offset_seconds,
            view_span_seconds,
            width_px,
        }
    }

    #[must_use]
    pub fn reference(self) -> NaiveDateTime {
        self.reference
    }

    #[must_use]
    pub fn offset_seconds(self) -> f64 {
        self.offset_seconds
    }

    #[must_use]
    pub fn view_span_seconds(self) -> f64 {
        self.view_span_seconds
    }

    #[must_use]
    pub fn width_px(self) -> u32 {
        self.width_px
    }

    #[must_use]
    pub fn pixels_per_second(self) -> f64 {
        f64::from(self.width_px) / self.view_span_seconds
    }

    #[must_use]
    pub fn seconds_to_px(self, seconds: f64) -> f64 {
        seconds * self.pixels_per_second()
    }

    #[must_use]
    pub fn px_to_seconds(self, px: f64) -> f64 {
        px / self.pixels_per_second()
    }

    #[must_use]
    pub fn start(self) -> NaiveDateTime {
        add_seconds(self.reference, self.offset_seconds)
    }

    #[must_use]
    pub fn end(self) -> NaiveDateTime {
        add_seconds(self.start(), self.view_span_seconds)
    }

    #[must_use]
    pub fn visible_range(self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start(), self.end())
    }

    /// Position of `time` relative to the visible window: `0.0` at start,
    /// `1.0` at end, unclamped outside.
    #[must_use]
    pub fn offset_fraction(self, time: NaiveDateTime) -> f64 {
        seconds_between(self.start(), time) / self.view_span_seconds
    }

    /// Projects `[start, end)` onto a surface `total_width_px` wide.
    ///
    /// Endpoints are clamped to the visible window, and the width carries a
    /// `+1` floor so zero-length or fully clipped intervals still draw.
    #[must_use]
    pub fn pixel_extent_of(
        self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        total_width_px: u32,
    ) -> PixelExtent {
        let total = f64::from(total_width_px);
        let start_fraction = self.offset_fraction(start).clamp(0.0, 1.0);
        let end_fraction = self.offset_fraction(end).clamp(0.0, 1.0);

        PixelExtent {
            width_px: ((end_fraction - start_fraction) * total).round() as i64 + 1,
            offset_px: (start_fraction * total).round() as i64,
        }
    }

    /// Hour instants to draw as gridlines for the given anchor bucket.
    ///
    /// Candidates lie strictly between the start's hour and one hour past
    /// the end's hour; midnight is skipped since the day boundary is drawn
    /// separately.
    #[must_use]
    pub fn visible_anchor_hours(self, anchor: AnchorRange) -> AnchorHours {
        if !anchor.shows_hour_marks() {
            return AnchorHours::new();
        }

        let (start, end) = self.visible_range();
        let first = truncate_to_hour(start);
        let last = truncate_to_hour(end)
            .checked_add_signed(TimeDelta::hours(1))
            .unwrap_or(NaiveDateTime::MAX);
        let every = anchor.hours();

        step_between(first, last, TimeDelta::hours(1))
            .filter(|hour| hour.hour() != 0 && hour.hour() % every == 0)
            .collect()
    }
}

pub(crate) fn validate_view_span(view_span_seconds: f64) -> ViewportResult<f64> {
    if !view_span_seconds.is_finite() || view_span_seconds <= 0.0 {
        return Err(ViewportError::InvalidSpan(view_span_seconds));
    }
    Ok(view_span_seconds)
}

pub(crate) fn validate_width(width_px: u32) -> ViewportResult<u32> {
    if width_px == 0 {
        return Err(ViewportError::InvalidViewport { width: width_px });
    }
    Ok(width_px)
}
