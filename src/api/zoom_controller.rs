use tracing::debug;

use crate::core::AnchorRange;
use crate::core::time_axis::{validate_view_span, validate_width};
use crate::error::ViewportResult;

use super::ViewportController;

impl ViewportController {
    /// Changes the zoom level and viewport width.
    ///
    /// The width applies immediately; the span animates toward
    /// `view_span_seconds`. The anchor bucket is re-derived from the requested
    /// span and the offset settles onto the new grid. Calling again before
    /// the animations finish retargets them from their current values.
    pub fn resize(&mut self, view_span_seconds: f64, width_px: u32) -> ViewportResult<()> {
        validate_view_span(view_span_seconds)?;
        validate_width(width_px)?;

        self.width_px = width_px;
        self.view_span_seconds.animate_to(
            view_span_seconds,
            self.clock_seconds,
            self.config.span_animation,
        );

        let anchor_range = AnchorRange::for_view_span(view_span_seconds);
        if anchor_range != self.anchor_range {
            debug!(from = ?self.anchor_range, to = ?anchor_range, "anchor range changed");
        }
        self.anchor_range = anchor_range;
        debug!(view_span_seconds, width_px, "resize viewport");

        self.settle_to_anchor();
        Ok(())
    }

    /// Animates the offset from its current value to the nearest anchor.
    pub fn settle_to_anchor(&mut self) {
        let target_px = self.axis().seconds_to_px(self.offset_seconds.value());
        let target_seconds = self.settle_target_seconds(target_px);
        debug!(
            offset_seconds = self.offset_seconds.value(),
            target_seconds, "settle viewport to anchor"
        );
        self.offset_seconds.animate_to(
            target_seconds,
            self.clock_seconds,
            self.config.settle_animation,
        );
    }
}
