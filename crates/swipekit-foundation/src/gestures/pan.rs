//! Horizontal pan recognizer.
//!
//! Converts raw pointer samples into a begin/change/end stream once the
//! pointer travels past the touch slop. The recognizer proposes `Began` and
//! the owner either lets it proceed or calls [`PanRecognizer::fail`], after
//! which the rest of the touch sequence is ignored.

use swipekit_ui_graphics::Point;

use crate::{PointerEvent, PointerEventKind, VelocityTracker};

use super::{MAX_FLING_VELOCITY, TOUCH_SLOP};

#[derive(Clone, Debug, PartialEq)]
pub enum PanEvent {
    /// The pointer passed the touch slop. `velocity` carries both axes so
    /// the owner can reject vertically dominated movement.
    Began { position: Point, velocity: Point },
    /// Pointer moved while the pan is active. `delta_x` is measured from the
    /// press position.
    Changed { delta_x: f32, velocity_x: f32 },
    /// Pointer lifted (or the sequence was cancelled) while the pan was
    /// active.
    Ended { delta_x: f32, velocity_x: f32 },
}

#[derive(Default)]
pub struct PanRecognizer {
    tracker_x: VelocityTracker,
    tracker_y: VelocityTracker,
    press: Option<Point>,
    begun: bool,
    failed: bool,
}

impl PanRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_begun(&self) -> bool {
        self.begun
    }

    /// Reject the proposed pan. The remainder of this touch sequence is
    /// ignored; the next `Down` starts fresh.
    pub fn fail(&mut self) {
        self.begun = false;
        self.failed = true;
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Option<PanEvent> {
        match event.kind {
            PointerEventKind::Down => {
                self.press = Some(event.position);
                self.begun = false;
                self.failed = false;
                self.tracker_x.reset();
                self.tracker_y.reset();
                self.track(event);
                None
            }
            PointerEventKind::Move => {
                let press = self.press?;
                self.track(event);
                if self.failed {
                    return None;
                }
                if self.begun {
                    return Some(PanEvent::Changed {
                        delta_x: event.position.x - press.x,
                        velocity_x: self.velocity_x(),
                    });
                }
                let dx = event.position.x - press.x;
                let dy = event.position.y - press.y;
                if dx.hypot(dy) > TOUCH_SLOP {
                    self.begun = true;
                    return Some(PanEvent::Began {
                        position: press,
                        velocity: Point::new(self.velocity_x(), self.velocity_y()),
                    });
                }
                None
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let press = self.press.take()?;
                self.track(event);
                if !self.begun {
                    return None;
                }
                self.begun = false;
                Some(PanEvent::Ended {
                    delta_x: event.position.x - press.x,
                    velocity_x: self.velocity_x(),
                })
            }
        }
    }

    fn track(&mut self, event: &PointerEvent) {
        self.tracker_x.add_sample(event.time_ms, event.position.x);
        self.tracker_y.add_sample(event.time_ms, event.position.y);
    }

    fn velocity_x(&self) -> f32 {
        self.tracker_x.velocity_capped(MAX_FLING_VELOCITY)
    }

    fn velocity_y(&self) -> f32 {
        self.tracker_y.velocity_capped(MAX_FLING_VELOCITY)
    }
}
