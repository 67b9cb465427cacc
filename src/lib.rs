//! schedule-viewport: time-axis view state for scrolling schedule widgets.
//!
//! The crate maps horizontal drag and fling gestures onto a date-time window,
//! animates zoom changes and snaps the window to hour/day anchors. Drawing
//! is left to the host, which reads pixel extents and gridline instants back
//! from the controller.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ViewportConfig, ViewportController};
pub use error::{ViewportError, ViewportResult};
