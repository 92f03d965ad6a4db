//! Semantic colors for the action strip.

use swipekit_foundation::ActionKind;
use swipekit_ui_graphics::Color;

/// Maps action kinds to button colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripTheme {
    /// Destructive actions (delete).
    pub destructive: Color,
    /// Affirmative bookmark-style actions (save/unsave).
    pub link: Color,
    /// Neutral secondary actions (share).
    pub secondary_action: Color,
}

impl StripTheme {
    pub fn color_for(&self, kind: ActionKind) -> Color {
        match kind {
            ActionKind::Delete => self.destructive,
            ActionKind::Save | ActionKind::Unsave => self.link,
            ActionKind::Share => self.secondary_action,
        }
    }
}

impl Default for StripTheme {
    fn default() -> Self {
        Self {
            destructive: Color::from_rgb_u8(0xDD, 0x33, 0x33),
            link: Color::from_rgb_u8(0x33, 0x66, 0xCC),
            secondary_action: Color::from_rgb_u8(0x72, 0x77, 0x7D),
        }
    }
}
