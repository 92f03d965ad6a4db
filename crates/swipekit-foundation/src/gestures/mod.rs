//! Gesture recognizers and shared gesture constants.
//!
//! The thresholds here are matched between the pan and long-press
//! recognizers so the two never disagree about whether a touch sequence is a
//! drag: once the pointer travels past [`TOUCH_SLOP`], the pan may begin and
//! the long-press has failed.

mod long_press;
mod pan;

pub use long_press::*;
pub use pan::*;

/// Drag threshold in logical pixels.
///
/// Pointer travel beyond this distance from the press turns the sequence
/// into a pan candidate and cancels any pending long-press. Matches common
/// platform touch slop (~8dp).
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum release velocity in logical pixels per second.
///
/// Velocities reported by the tracker are capped here before any open/close
/// decision sees them.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Minimum press duration, in milliseconds, before the long-press
/// (pane-cancel) recognizer may begin.
pub const LONG_PRESS_MIN_DURATION_MS: i64 = 50;
