//! Spring animation driver for swipekit
//!
//! Provides frame-time-driven spring interpolation between two translation
//! values. There is no frame clock in this crate: the host event loop owns
//! the clock and calls [`SpringAnimation::tick`] with frame timestamps.

mod spring;

pub use spring::*;
