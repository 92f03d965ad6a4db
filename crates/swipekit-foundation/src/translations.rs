//! Per-row swipe translation state and the rubber-band clamp.

use rustc_hash::FxHashMap;

use crate::RowKey;

/// How far, in logical pixels, the pane may press past a travel limit before
/// the logarithmic damping flattens further movement.
pub const MAX_EXTENSION: f32 = 10.0;

/// Translation and release velocity for one row mid-interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeInfo {
    /// Signed horizontal translation of the row content in pixels.
    pub translation: f32,
    /// Last observed horizontal velocity in px/s.
    pub velocity: f32,
}

/// Translation store keyed by row.
///
/// Entries exist only for rows the user has interacted with; absence means
/// translation 0. Clearing removes the entry entirely, which is distinct from
/// setting a zero translation: it releases the per-row memory once a pane is
/// fully closed and inactive.
#[derive(Default)]
pub struct SwipeTranslations {
    by_row: FxHashMap<RowKey, SwipeInfo>,
}

impl SwipeTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: RowKey) -> Option<SwipeInfo> {
        self.by_row.get(&row).copied()
    }

    pub fn translation(&self, row: RowKey) -> Option<f32> {
        self.by_row.get(&row).map(|info| info.translation)
    }

    pub fn set(&mut self, row: RowKey, info: SwipeInfo) {
        self.by_row.insert(row, info);
    }

    pub fn clear(&mut self, row: RowKey) {
        self.by_row.remove(&row);
    }

    /// Number of rows with live swipe state. Mostly useful in tests.
    pub fn tracked_rows(&self) -> usize {
        self.by_row.len()
    }
}

/// Rubber-band clamp in direction-normalized space.
///
/// `normalized` is 0 when the pane is closed and grows toward
/// `open_magnitude` as the pane opens, regardless of layout direction.
/// Within [0, open_magnitude] the value passes through untouched. Past either
/// limit the excess is compressed through
/// `max_extension * ln(1 + excess / max_extension)`, so the pane keeps
/// following the finger at a diminishing rate. The scaled `ln_1p` form is
/// continuous at the limit with unit slope, finite for sub-pixel excess, and
/// flattens toward the logarithmic tail as the excess grows.
pub fn rubber_band(normalized: f32, open_magnitude: f32, max_extension: f32) -> f32 {
    if normalized < 0.0 {
        -damp_excess(-normalized, max_extension)
    } else if normalized > open_magnitude {
        open_magnitude + damp_excess(normalized - open_magnitude, max_extension)
    } else {
        normalized
    }
}

fn damp_excess(excess: f32, max_extension: f32) -> f32 {
    max_extension * (excess / max_extension).ln_1p()
}
