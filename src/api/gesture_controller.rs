use tracing::{debug, trace};

use crate::core::find_settle_position;
use crate::error::{ViewportError, ViewportResult};

use super::ViewportController;

impl ViewportController {
    /// Applies a drag delta in pixels without animation.
    ///
    /// Positive deltas move the window toward earlier times. Any offset
    /// animation in flight is cancelled. The delta is always fully consumed
    /// and returned unchanged.
    pub fn scroll_by(&mut self, delta_px: f64) -> ViewportResult<f64> {
        if !delta_px.is_finite() {
            return Err(ViewportError::InvalidData(
                "scroll delta must be finite".to_owned(),
            ));
        }

        let delta_seconds = self.axis().px_to_seconds(delta_px);
        let offset = self.offset_seconds.value() - delta_seconds;
        self.offset_seconds.snap_to(offset);
        trace!(delta_px, offset_seconds = offset, "scroll viewport");
        Ok(delta_px)
    }

    /// Releases a drag with `velocity_px_per_sec`.
    ///
    /// The decayed travel distance is added to the current position, the
    /// result is snapped to the nearest anchor and the offset animates
    /// there. Returns the residual velocity, which is always zero.
    pub fn fling(&mut self, velocity_px_per_sec: f64) -> ViewportResult<f64> {
        if !velocity_px_per_sec.is_finite() {
            return Err(ViewportError::InvalidData(
                "fling velocity must be finite".to_owned(),
            ));
        }

        let travel_px = self
            .config
            .fling_decay
            .target_value(0.0, -velocity_px_per_sec);
        let target_px = self.axis().seconds_to_px(self.offset_seconds.value()) + travel_px;
        let target_seconds = self.settle_target_seconds(target_px);
        debug!(
            velocity_px_per_sec,
            travel_px,
            target_seconds,
            anchor_range = ?self.anchor_range,
            "fling viewport"
        );
        self.offset_seconds
            .animate_to(target_seconds, self.clock_seconds, self.config.fling_animation);
        Ok(0.0)
    }

    /// Nearest anchor to `target_px`, in whole seconds from the reference.
    pub(super) fn settle_target_seconds(&self, target_px: f64) -> f64 {
        let axis = self.axis();
        let anchor_range_px = axis.seconds_to_px(self.anchor_range.seconds() as f64);
        let settled_px = find_settle_position(target_px, anchor_range_px);
        axis.px_to_seconds(settled_px).round()
    }
}
