//! Public controller surface.
//!
//! `ViewportController` is split across files by concern: reads and the
//! animation clock in `controller`, drag/fling in `gesture_controller`,
//! zoom and anchor settling in `zoom_controller`.

mod config;
mod controller;
mod gesture_controller;
mod snapshot;
mod zoom_controller;

pub use config::ViewportConfig;
pub use controller::ViewportController;
pub use snapshot::ViewportSnapshot;
