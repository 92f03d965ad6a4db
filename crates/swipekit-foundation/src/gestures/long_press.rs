//! Long-press recognizer used as the pane-cancel gesture.
//!
//! A short minimum press duration makes this behave like "tap anywhere to
//! dismiss": it begins once the press outlives the threshold without moving
//! past the slop, and the owner closes the pane when it ends. The owner
//! filters the proposed `Began` against the action strip's bounds so a tap
//! on an action button never doubles as a dismiss.

use smallvec::{smallvec, SmallVec};
use swipekit_ui_graphics::Point;

use crate::{PointerEvent, PointerEventKind};

use super::{LONG_PRESS_MIN_DURATION_MS, TOUCH_SLOP};

#[derive(Clone, Debug, PartialEq)]
pub enum LongPressEvent {
    /// The press crossed the minimum duration. The owner must answer with
    /// [`LongPressRecognizer::accept`] or [`LongPressRecognizer::fail`].
    Began { touches: SmallVec<[Point; 2]> },
    /// An accepted press lifted.
    Ended,
}

#[derive(Default)]
pub struct LongPressRecognizer {
    press: Option<(Point, i64)>,
    begun: bool,
    failed: bool,
    /// Set when the press crossed the threshold on the same event that
    /// lifted it; the owner polls it with `take_ended` after accepting.
    pending_end: bool,
}

impl LongPressRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_begun(&self) -> bool {
        self.begun
    }

    pub fn accept(&mut self) {
        if !self.failed {
            self.begun = true;
        }
    }

    pub fn fail(&mut self) {
        self.begun = false;
        self.failed = true;
        self.pending_end = false;
    }

    /// True once, if an accepted press already lifted when it was proposed.
    pub fn take_ended(&mut self) -> bool {
        if self.begun && self.pending_end {
            self.begun = false;
            self.pending_end = false;
            self.press = None;
            true
        } else {
            false
        }
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Option<LongPressEvent> {
        match event.kind {
            PointerEventKind::Down => {
                self.press = Some((event.position, event.time_ms));
                self.begun = false;
                self.failed = false;
                self.pending_end = false;
                None
            }
            PointerEventKind::Move => {
                let (origin, pressed_at) = self.press?;
                if self.failed || self.begun {
                    return None;
                }
                let dx = event.position.x - origin.x;
                let dy = event.position.y - origin.y;
                if dx.hypot(dy) > TOUCH_SLOP {
                    // The sequence became a drag; the pan owns it now.
                    self.failed = true;
                    return None;
                }
                if event.time_ms - pressed_at >= LONG_PRESS_MIN_DURATION_MS {
                    return Some(LongPressEvent::Began {
                        touches: smallvec![event.position],
                    });
                }
                None
            }
            PointerEventKind::Up => {
                let (_, pressed_at) = self.press?;
                if self.begun {
                    self.press = None;
                    self.begun = false;
                    return Some(LongPressEvent::Ended);
                }
                if !self.failed && event.time_ms - pressed_at >= LONG_PRESS_MIN_DURATION_MS {
                    // Crossed the threshold only as it lifted: propose Began
                    // now and report the end through `take_ended`.
                    self.pending_end = true;
                    return Some(LongPressEvent::Began {
                        touches: smallvec![event.position],
                    });
                }
                self.press = None;
                None
            }
            PointerEventKind::Cancel => {
                self.press = None;
                self.begun = false;
                self.failed = false;
                self.pending_end = false;
                None
            }
        }
    }
}
