//! The surface the host list exposes to the swipe controller.

use swipekit_foundation::{Action, RowKey};
use swipekit_ui_graphics::{Point, Rect};

/// Resolved layout direction of the host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutDirection {
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }
}

/// Which edge a swipe reveals.
///
/// Primary actions sit on the trailing edge (revealed by a leading-directed
/// swipe); secondary actions on the opposite edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeEdge {
    Primary,
    Secondary,
}

/// Text measurement service for sizing strip buttons.
pub trait TextMeasurer {
    /// Width in logical pixels of `text` in the strip's button font.
    fn text_width(&self, text: &str) -> f32;
}

impl<F: Fn(&str) -> f32> TextMeasurer for F {
    fn text_width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Everything the controller needs from the host list, borrowed per call.
///
/// The controller never stores a host reference; the host owns the
/// controller and passes itself into each operation, so there are no
/// lifetime knots and no stale back-pointers.
pub trait SwipeHost {
    /// Row under `position` (list coordinates), if any.
    fn row_at(&self, position: Point) -> Option<RowKey>;

    /// Ordered actions for the given edge. May be empty.
    fn actions_for_row(&self, row: RowKey, edge: SwipeEdge) -> Vec<Action>;

    /// Current bounds of the row in list coordinates. `None` when the row is
    /// not materialized (scrolled out of the viewport).
    fn row_bounds(&self, row: RowKey) -> Option<Rect>;

    fn layout_direction(&self) -> LayoutDirection;

    /// Toggle the list's own scrolling. Disabled while a pane is open so a
    /// vertical scroll cannot tear the interaction.
    fn set_scroll_enabled(&mut self, enabled: bool);

    /// Width of `text` in the strip's button font.
    fn text_width(&self, text: &str) -> f32;

    /// An action was selected on a row. Fired exactly once per completed
    /// action tap, after any expand animation resolves.
    fn on_action_performed(&mut self, action: &Action, row: RowKey);
}
