//! The action button strip revealed behind a swiped row.
//!
//! The strip owns button sizing and layout only; taps are resolved to the
//! bound [`Action`] and handed back to the controller, which decides what
//! closing looks like. Rendering reads the button states (frame, colors,
//! alphas) each frame.

use smallvec::SmallVec;

use swipekit_foundation::Action;
use swipekit_ui_graphics::{Color, Point, Rect, Size};

use crate::{LayoutDirection, StripTheme, TextMeasurer};

/// Horizontal content inset on each side of a button's title.
pub const BUTTON_CONTENT_INSET: f32 = 14.0;

/// Width reserved for a button's icon, when it has one.
pub const ICON_RESERVE: f32 = 24.0;

/// Presentation state of one strip button.
///
/// Alphas and frames are plain data; the rendering layer applies them. When
/// a button is activated its `title_alpha`/`icon_alpha` fade while the frame
/// grows; deactivated neighbors fade through `alpha`.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonState {
    pub frame: Rect,
    pub background: Color,
    pub alpha: f32,
    pub title_alpha: f32,
    pub icon_alpha: f32,
    natural_width: f32,
}

/// Lays out and hit-tests the action buttons for the active row.
pub struct ActionsStrip {
    theme: StripTheme,
    actions: Vec<Action>,
    buttons: SmallVec<[ButtonState; 4]>,
    direction: LayoutDirection,
    /// Shared (uniform) button width: the widest natural width.
    button_width: f32,
    /// `button_width * count`; the strip never lays out wider than this.
    max_total_width: f32,
    background: Color,
    activated: Option<usize>,
    expand_progress: f32,
    bounds: Size,
}

impl ActionsStrip {
    pub fn new(theme: StripTheme) -> Self {
        Self {
            theme,
            actions: Vec::new(),
            buttons: SmallVec::new(),
            direction: LayoutDirection::LeftToRight,
            button_width: 0.0,
            max_total_width: 0.0,
            background: Color::TRANSPARENT,
            activated: None,
            expand_progress: 0.0,
            bounds: Size::ZERO,
        }
    }

    /// Replace the strip's content. Clears any activated state and resizes
    /// the buttons from their measured titles.
    pub fn set_actions(
        &mut self,
        actions: Vec<Action>,
        direction: LayoutDirection,
        measurer: &dyn TextMeasurer,
    ) {
        self.activated = None;
        self.expand_progress = 0.0;
        self.direction = direction;
        self.buttons.clear();

        let mut max_natural_width = 0.0f32;
        for action in &actions {
            let mut natural_width = measurer.text_width(action.title()) + 2.0 * BUTTON_CONTENT_INSET;
            if action.icon().is_some() {
                natural_width += ICON_RESERVE;
            }
            max_natural_width = max_natural_width.max(natural_width);
            self.buttons.push(ButtonState {
                frame: Rect::default(),
                background: self.theme.color_for(action.kind()),
                alpha: 1.0,
                title_alpha: 1.0,
                icon_alpha: 1.0,
                natural_width,
            });
        }

        self.background = self
            .buttons
            .last()
            .map(|button| button.background)
            .unwrap_or(Color::TRANSPARENT);
        self.button_width = max_natural_width;
        self.max_total_width = max_natural_width * actions.len() as f32;
        self.actions = actions;

        if self.bounds != Size::ZERO {
            self.layout(self.bounds);
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn buttons(&self) -> &[ButtonState] {
        &self.buttons
    }

    pub fn button_width(&self) -> f32 {
        self.button_width
    }

    pub fn max_total_width(&self) -> f32 {
        self.max_total_width
    }

    /// The strip's own background, matching the trailing button.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Width the strip wants inside a row of the given width.
    pub fn preferred_width(&self, row_width: f32) -> f32 {
        row_width.min(self.max_total_width)
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Index of the activated button, for draw ordering (it renders above
    /// its collapsing neighbors).
    pub fn activated_index(&self) -> Option<usize> {
        self.activated
    }

    /// Compute button frames for the given strip size.
    pub fn layout(&mut self, size: Size) {
        self.bounds = size;
        if self.buttons.is_empty() {
            return;
        }

        let count = self.buttons.len();
        let button_delta = size.width.min(self.max_total_width) / count as f32;
        let mut x = match self.direction {
            LayoutDirection::RightToLeft => (size.width - self.max_total_width).max(0.0),
            LayoutDirection::LeftToRight => 0.0,
        };

        // Normal frames, edge to edge in visual order.
        let mut normal_frames: SmallVec<[Rect; 4]> = SmallVec::from_elem(Rect::default(), count);
        for visual_slot in 0..count {
            let index = match self.direction {
                LayoutDirection::RightToLeft => count - 1 - visual_slot,
                LayoutDirection::LeftToRight => visual_slot,
            };
            normal_frames[index] = Rect::new(x, 0.0, button_delta, size.height);
            x += button_delta;
        }

        match self.activated {
            None => {
                for (button, frame) in self.buttons.iter_mut().zip(normal_frames.iter()) {
                    button.frame = *frame;
                    button.alpha = 1.0;
                    button.title_alpha = 1.0;
                    button.icon_alpha = 1.0;
                }
            }
            Some(activated) => {
                let progress = self.expand_progress;
                for (index, (button, normal)) in
                    self.buttons.iter_mut().zip(normal_frames.iter()).enumerate()
                {
                    if index == activated {
                        // Swallow the row: grow to full width while the
                        // content fades, collapsing to zero height.
                        let expanded = Rect::new(0.0, 0.0, size.width, 0.0);
                        button.frame = Rect::lerp(*normal, expanded, progress);
                        button.alpha = 1.0;
                        button.title_alpha = 1.0 - progress;
                        button.icon_alpha = 1.0 - progress;
                    } else {
                        let collapsed = Rect::new(normal.x, normal.y, normal.width, 0.0);
                        button.frame = Rect::lerp(*normal, collapsed, progress);
                        button.alpha = 1.0 - progress;
                        button.title_alpha = 1.0 - progress;
                        button.icon_alpha = 1.0 - progress;
                    }
                }
            }
        }
    }

    /// Begin the activate transition for `action`. Returns false (and leaves
    /// the layout alone) when the action is not on this strip.
    pub fn expand(&mut self, action: &Action) -> bool {
        let Some(index) = self.actions.iter().position(|candidate| candidate == action) else {
            log::warn!("expand requested for an action not on the strip: {:?}", action.title());
            return false;
        };
        self.activated = Some(index);
        self.expand_progress = 0.0;
        self.layout(self.bounds);
        true
    }

    /// Drive the activate transition; `progress` is clamped to [0, 1].
    pub fn set_expand_progress(&mut self, progress: f32) {
        if self.activated.is_none() {
            return;
        }
        self.expand_progress = progress.clamp(0.0, 1.0);
        self.layout(self.bounds);
    }

    /// Resolve a tap in strip-local coordinates to its bound action.
    ///
    /// Only meaningful in the normal layout; an activated strip no longer
    /// takes taps.
    pub fn hit_test(&self, point: Point) -> Option<&Action> {
        if self.activated.is_some() {
            return None;
        }
        self.buttons
            .iter()
            .position(|button| button.frame.contains_point(point))
            .map(|index| &self.actions[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipekit_foundation::ActionKind;

    // 8 px per character keeps widths easy to reason about.
    fn measurer() -> impl TextMeasurer {
        |text: &str| text.chars().count() as f32 * 8.0
    }

    fn sample_actions() -> Vec<Action> {
        vec![
            Action::new("Share", ActionKind::Share),
            Action::new("Save", ActionKind::Save),
            Action::new("Delete", ActionKind::Delete),
        ]
    }

    fn strip_with_sample_actions(direction: LayoutDirection) -> ActionsStrip {
        let mut strip = ActionsStrip::new(StripTheme::default());
        strip.set_actions(sample_actions(), direction, &measurer());
        strip
    }

    #[test]
    fn uniform_width_is_the_widest_natural_width() {
        let strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        // "Delete" = 6 chars * 8 + 2 * 14 = 76.
        assert_eq!(strip.button_width(), 76.0);
        assert_eq!(strip.max_total_width(), 228.0);
    }

    #[test]
    fn icon_widens_the_natural_width() {
        let mut strip = ActionsStrip::new(StripTheme::default());
        strip.set_actions(
            vec![Action::new("Save", ActionKind::Save).with_icon("bookmark")],
            LayoutDirection::LeftToRight,
            &measurer(),
        );
        assert_eq!(strip.button_width(), 4.0 * 8.0 + 2.0 * BUTTON_CONTENT_INSET + ICON_RESERVE);
    }

    #[test]
    fn ltr_layout_is_edge_to_edge_left_anchored() {
        let mut strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        strip.layout(Size::new(228.0, 50.0));
        let buttons = strip.buttons();
        assert_eq!(buttons[0].frame, Rect::new(0.0, 0.0, 76.0, 50.0));
        assert_eq!(buttons[1].frame, Rect::new(76.0, 0.0, 76.0, 50.0));
        assert_eq!(buttons[2].frame, Rect::new(152.0, 0.0, 76.0, 50.0));
    }

    #[test]
    fn rtl_layout_reverses_order_and_anchors_right() {
        let mut strip = strip_with_sample_actions(LayoutDirection::RightToLeft);
        strip.layout(Size::new(300.0, 50.0));
        let buttons = strip.buttons();
        // Visual order is reversed: last action leftmost, first rightmost,
        // packed against the right edge.
        assert_eq!(buttons[2].frame.x, 72.0);
        assert_eq!(buttons[1].frame.x, 148.0);
        assert_eq!(buttons[0].frame.x, 224.0);
    }

    #[test]
    fn narrow_row_shrinks_buttons() {
        let mut strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        strip.layout(Size::new(150.0, 50.0));
        for button in strip.buttons() {
            assert_eq!(button.frame.width, 50.0);
        }
    }

    #[test]
    fn background_matches_trailing_button() {
        let strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        assert_eq!(strip.background(), StripTheme::default().destructive);
    }

    #[test]
    fn expand_swallows_the_strip() {
        let mut strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        strip.layout(Size::new(228.0, 50.0));
        let delete = Action::new("Delete", ActionKind::Delete);
        assert!(strip.expand(&delete));
        strip.set_expand_progress(1.0);

        let buttons = strip.buttons();
        assert_eq!(buttons[2].frame, Rect::new(0.0, 0.0, 228.0, 0.0));
        assert_eq!(buttons[2].title_alpha, 0.0);
        assert_eq!(buttons[0].alpha, 0.0);
        assert_eq!(buttons[1].alpha, 0.0);
        assert_eq!(buttons[0].frame.height, 0.0);
        assert_eq!(buttons[1].frame.height, 0.0);
    }

    #[test]
    fn expand_rejects_unknown_actions() {
        let mut strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        assert!(!strip.expand(&Action::new("Archive", ActionKind::Share)));
        assert_eq!(strip.activated_index(), None);
    }

    #[test]
    fn reassigning_actions_clears_activation() {
        let mut strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        strip.layout(Size::new(228.0, 50.0));
        strip.expand(&Action::new("Delete", ActionKind::Delete));
        strip.set_actions(sample_actions(), LayoutDirection::LeftToRight, &measurer());
        assert_eq!(strip.activated_index(), None);
    }

    #[test]
    fn hit_test_resolves_taps_to_actions() {
        let mut strip = strip_with_sample_actions(LayoutDirection::LeftToRight);
        strip.layout(Size::new(228.0, 50.0));
        let hit = strip.hit_test(Point::new(160.0, 25.0));
        assert_eq!(hit.map(Action::kind), Some(ActionKind::Delete));
        assert_eq!(strip.hit_test(Point::new(500.0, 25.0)), None);
    }
}
