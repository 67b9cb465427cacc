use chrono::{Local, NaiveDateTime};
use tracing::{debug, trace};

use crate::animation::AnimatedScalar;
use crate::core::primitives::truncate_to_day;
use crate::core::{AnchorHours, AnchorRange, PixelExtent, TimeAxis};
use crate::error::{ViewportError, ViewportResult};

use super::ViewportConfig;

/// View state of a horizontally scrolling schedule.
///
/// Owns the visible window (reference instant plus animated offset and
/// span), the viewport width and the current anchor bucket. Gestures are
/// fed in through `scroll_by`/`fling`, zoom through `resize`, and the host
/// drives animations by calling `advance` once per frame.
#[derive(Debug, Clone)]
pub struct ViewportController {
    pub(super) reference: NaiveDateTime,
    pub(super) config: ViewportConfig,
    pub(super) offset_seconds: AnimatedScalar,
    pub(super) view_span_seconds: AnimatedScalar,
    pub(super) width_px: u32,
    pub(super) anchor_range: AnchorRange,
    pub(super) clock_seconds: f64,
}

impl ViewportController {
    pub fn new(reference: NaiveDateTime, config: ViewportConfig) -> ViewportResult<Self> {
        let config = config.validate()?;
        debug!(
            %reference,
            view_span_seconds = config.initial_view_span_seconds,
            width_px = config.initial_width_px,
            "create viewport controller"
        );
        Ok(Self {
            reference,
            config,
            offset_seconds: AnimatedScalar::new(0.0),
            view_span_seconds: AnimatedScalar::new(config.initial_view_span_seconds),
            width_px: config.initial_width_px,
            anchor_range: AnchorRange::for_view_span(config.initial_view_span_seconds),
            clock_seconds: 0.0,
        })
    }

    /// Creates a controller anchored at local midnight of the current day.
    pub fn starting_today(config: ViewportConfig) -> ViewportResult<Self> {
        Self::new(truncate_to_day(Local::now().naive_local()), config)
    }

    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    #[must_use]
    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Current frame of the time axis, built from the latest sampled values.
    #[must_use]
    pub fn axis(&self) -> TimeAxis {
        TimeAxis::from_parts(
            self.reference,
            self.offset_seconds.value(),
            self.view_span_seconds.value(),
            self.width_px,
        )
    }

    #[must_use]
    pub fn offset_seconds(&self) -> f64 {
        self.offset_seconds.value()
    }

    #[must_use]
    pub fn offset_target_seconds(&self) -> f64 {
        self.offset_seconds.target()
    }

    #[must_use]
    pub fn view_span_seconds(&self) -> f64 {
        self.view_span_seconds.value()
    }

    #[must_use]
    pub fn view_span_target_seconds(&self) -> f64 {
        self.view_span_seconds.target()
    }

    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    #[must_use]
    pub fn anchor_range(&self) -> AnchorRange {
        self.anchor_range
    }

    #[must_use]
    pub fn pixels_per_second(&self) -> f64 {
        self.axis().pixels_per_second()
    }

    #[must_use]
    pub fn clock_seconds(&self) -> f64 {
        self.clock_seconds
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.offset_seconds.is_animating() || self.view_span_seconds.is_animating()
    }

    #[must_use]
    pub fn visible_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.axis().visible_range()
    }

    #[must_use]
    pub fn offset_fraction(&self, time: NaiveDateTime) -> f64 {
        self.axis().offset_fraction(time)
    }

    /// Width and left offset, in pixels, of `[start, end)` on a surface
    /// `total_width_px` wide. See [`TimeAxis::pixel_extent_of`].
    #[must_use]
    pub fn pixel_extent_of(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        total_width_px: u32,
    ) -> PixelExtent {
        self.axis().pixel_extent_of(start, end, total_width_px)
    }

    #[must_use]
    pub fn visible_anchor_hours(&self) -> AnchorHours {
        self.axis().visible_anchor_hours(self.anchor_range)
    }

    /// Advances the animation clock by `delta_seconds` and samples both
    /// animated scalars.
    ///
    /// Returns `true` while any animation is still running.
    pub fn advance(&mut self, delta_seconds: f64) -> ViewportResult<bool> {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return Err(ViewportError::InvalidData(
                "advance delta seconds must be finite and > 0".to_owned(),
            ));
        }

        let was_animating = self.is_animating();
        self.clock_seconds += delta_seconds;
        self.view_span_seconds.sample(self.clock_seconds);
        self.offset_seconds.sample(self.clock_seconds);

        let animating = self.is_animating();
        if was_animating && !animating {
            trace!(
                offset_seconds = self.offset_seconds.value(),
                view_span_seconds = self.view_span_seconds.value(),
                "viewport animations settled"
            );
        }
        Ok(animating)
    }

    /// Advances in fixed steps until every animation has settled.
    ///
    /// Returns the number of steps taken, capped at `max_steps`.
    pub fn run_to_rest(&mut self, step_seconds: f64, max_steps: usize) -> ViewportResult<usize> {
        let mut steps = 0;
        while self.is_animating() && steps < max_steps {
            self.advance(step_seconds)?;
            steps += 1;
        }
        Ok(steps)
    }
}
