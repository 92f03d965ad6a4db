//! Testing utilities and harness for swipekit
//!
//! `FakeHost` is a headless stand-in for the host list: rows with fixed
//! bounds and action sets, a scroll-enabled flag, and a log of performed
//! actions. `FramePump` drives the controller's animations with a
//! deterministic 60 fps clock so tests can settle panes without a real
//! frame source.

use swipekit_foundation::{Action, RowKey};
use swipekit_ui::{LayoutDirection, SwipeController, SwipeEdge, SwipeHost, TextMeasurer};
use swipekit_ui_graphics::{Point, Rect};

/// Fixed-advance text measurer: every character is the same width.
pub struct FixedTextMeasurer(pub f32);

impl TextMeasurer for FixedTextMeasurer {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

/// One configured row of the fake list.
struct FakeRow {
    key: RowKey,
    bounds: Rect,
    primary: Vec<Action>,
    secondary: Vec<Action>,
}

/// Headless host list for exercising [`SwipeController`] in tests.
pub struct FakeHost {
    rows: Vec<FakeRow>,
    direction: LayoutDirection,
    scroll_enabled: bool,
    performed: Vec<(Action, RowKey)>,
    char_width: f32,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            direction: LayoutDirection::LeftToRight,
            scroll_enabled: true,
            performed: Vec::new(),
            char_width: 8.0,
        }
    }

    pub fn with_direction(direction: LayoutDirection) -> Self {
        let mut host = Self::new();
        host.direction = direction;
        host
    }

    /// Add a row with the same actions on both edges.
    pub fn push_row(&mut self, key: RowKey, bounds: Rect, actions: Vec<Action>) {
        self.push_row_with_edges(key, bounds, actions.clone(), actions);
    }

    pub fn push_row_with_edges(
        &mut self,
        key: RowKey,
        bounds: Rect,
        primary: Vec<Action>,
        secondary: Vec<Action>,
    ) {
        self.rows.push(FakeRow {
            key,
            bounds,
            primary,
            secondary,
        });
    }

    /// Drop a row, as if it scrolled out and was recycled.
    pub fn remove_row(&mut self, key: RowKey) {
        self.rows.retain(|row| row.key != key);
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Actions delivered through `on_action_performed`, in order.
    pub fn performed(&self) -> &[(Action, RowKey)] {
        &self.performed
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeHost for FakeHost {
    fn row_at(&self, position: Point) -> Option<RowKey> {
        self.rows
            .iter()
            .find(|row| row.bounds.contains_point(position))
            .map(|row| row.key)
    }

    fn actions_for_row(&self, row: RowKey, edge: SwipeEdge) -> Vec<Action> {
        self.rows
            .iter()
            .find(|candidate| candidate.key == row)
            .map(|candidate| match edge {
                SwipeEdge::Primary => candidate.primary.clone(),
                SwipeEdge::Secondary => candidate.secondary.clone(),
            })
            .unwrap_or_default()
    }

    fn row_bounds(&self, row: RowKey) -> Option<Rect> {
        self.rows
            .iter()
            .find(|candidate| candidate.key == row)
            .map(|candidate| candidate.bounds)
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn on_action_performed(&mut self, action: &Action, row: RowKey) {
        self.performed.push((action.clone(), row));
    }
}

/// Deterministic ~60 fps clock for settling controller animations.
pub struct FramePump {
    time_nanos: u64,
}

pub const FRAME_NANOS: u64 = 16_666_667;

impl FramePump {
    pub fn new() -> Self {
        Self { time_nanos: 0 }
    }

    pub fn now(&self) -> u64 {
        self.time_nanos
    }

    /// Advance one frame and tick the controller.
    pub fn advance(&mut self, controller: &mut SwipeController, host: &mut FakeHost) {
        self.time_nanos += FRAME_NANOS;
        controller.on_frame(host, self.time_nanos);
    }

    /// Tick frames until no animation is in flight.
    ///
    /// Panics after ten seconds of simulated time; a pane that has not
    /// settled by then never will.
    pub fn settle(&mut self, controller: &mut SwipeController, host: &mut FakeHost) {
        let mut frames = 0;
        while controller.is_animating() {
            self.advance(controller, host);
            frames += 1;
            assert!(frames < 600, "animations did not settle within 10s");
        }
    }
}

impl Default for FramePump {
    fn default() -> Self {
        Self::new()
    }
}
