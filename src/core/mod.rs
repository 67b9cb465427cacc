pub mod anchor;
pub mod primitives;
pub mod time_axis;

pub use anchor::{AnchorRange, find_settle_position};
pub use time_axis::{AnchorHours, PixelExtent, TimeAxis};
