use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::AnchorRange;

use super::ViewportController;

/// Point-in-time copy of the view state, for assertions and debug output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub reference: NaiveDateTime,
    pub clock_seconds: f64,
    pub offset_seconds: f64,
    pub offset_target_seconds: f64,
    pub view_span_seconds: f64,
    pub view_span_target_seconds: f64,
    pub width_px: u32,
    pub anchor_range: AnchorRange,
    pub visible_start: NaiveDateTime,
    pub visible_end: NaiveDateTime,
    pub animating: bool,
}

impl ViewportController {
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        let (visible_start, visible_end) = self.visible_range();
        ViewportSnapshot {
            reference: self.reference,
            clock_seconds: self.clock_seconds,
            offset_seconds: self.offset_seconds(),
            offset_target_seconds: self.offset_target_seconds(),
            view_span_seconds: self.view_span_seconds(),
            view_span_target_seconds: self.view_span_target_seconds(),
            width_px: self.width_px,
            anchor_range: self.anchor_range,
            visible_start,
            visible_end,
            animating: self.is_animating(),
        }
    }
}
