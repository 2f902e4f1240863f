//! Input handling primitives.

pub mod long_press;

pub use long_press::{Press, PressTracker, DEFAULT_HOLD_MS, MOVE_THRESHOLD_CELLS};
