//! Gesture arbitration and pane state for swipeable rows.
//!
//! [`SwipeController`] is the single source of truth for which row, if any,
//! is mid-interaction. It composes the two recognizers, the per-row
//! translation store, the strip, and the spring driver; the host list feeds
//! it pointer events and frame ticks and reads translations back.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use swipekit_animation::{SpringAnimation, SpringSpec};
use swipekit_foundation::gestures::{
    LongPressEvent, LongPressRecognizer, PanEvent, PanRecognizer,
};
use swipekit_foundation::{
    rubber_band, Action, ActionKind, PointerEvent, PointerEventKind, RowKey, SwipeInfo,
    SwipeTranslations, MAX_EXTENSION,
};
use swipekit_ui_graphics::{Point, Rect, Size};

use crate::{ActionsStrip, LayoutDirection, StripTheme, SwipeEdge, SwipeHost};

/// Weight of the release velocity in the open/close decision: the decision
/// is made on `translation + 0.3 * velocity`, i.e. where the pane would be
/// 300 ms from now at the current speed.
const VELOCITY_PROJECTION: f32 = 0.3;

/// Fraction of the open translation the projected translation must pass for
/// the pane to open.
const HALF_OPEN_FRACTION: f32 = 0.5;

/// Spring for pane settling. Slightly under-damped so a flick lands with a
/// hint of follow-through.
const PANE_SPRING: SpringSpec = SpringSpec {
    damping_ratio: 0.8,
    stiffness: 160.0,
    velocity_threshold: 0.01,
    position_threshold: 0.001,
};

/// Animation/interaction completion callback. `finished` is false when the
/// operation no-oped or the animation was superseded before settling.
pub type Completion = Box<dyn FnOnce(bool)>;

/// Interaction state of the list's single swipe pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneState {
    Idle,
    Dragging,
    Opening,
    Open,
    Closing,
}

/// Per-row visual state, owned here and read by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowVisualState {
    /// Signed translation at which the pane rests open.
    pub translation_when_open: f32,
    /// Signed translation to apply to the row content right now.
    pub current_translation: f32,
    /// True while the row is dragging or animating as the active row.
    pub is_swiping: bool,
}

struct PaneAnimation {
    row: RowKey,
    /// Stamp taken when the animation started; a completion whose row has a
    /// newer animation must not touch state.
    generation: u64,
    spring: SpringAnimation,
    /// Drives the strip's activate transition while closing.
    expand: Option<Action>,
    /// Delivered to the host exactly once, after the animation resolves.
    notify: Option<Action>,
    completion: Option<Completion>,
    end_state: PaneState,
}

/// Coordinates swipe gestures, pane animations, and the action strip for one
/// host list.
pub struct SwipeController {
    translations: SwipeTranslations,
    visual: FxHashMap<RowKey, RowVisualState>,
    strip: ActionsStrip,
    active_row: Option<RowKey>,
    active_edge: SwipeEdge,
    pane_state: PaneState,
    direction: LayoutDirection,
    /// Translation of the active row at the moment the current pan began.
    initial_translation: f32,
    animations: SmallVec<[PaneAnimation; 2]>,
    generation: u64,
    pan: PanRecognizer,
    long_press: LongPressRecognizer,
}

impl SwipeController {
    pub fn new(theme: StripTheme) -> Self {
        Self {
            translations: SwipeTranslations::new(),
            visual: FxHashMap::default(),
            strip: ActionsStrip::new(theme),
            active_row: None,
            active_edge: SwipeEdge::Primary,
            pane_state: PaneState::Idle,
            direction: LayoutDirection::LeftToRight,
            initial_translation: 0.0,
            animations: SmallVec::new(),
            generation: 0,
            pan: PanRecognizer::new(),
            long_press: LongPressRecognizer::new(),
        }
    }

    /// Whether any row currently has an open, opening, or dragging pane.
    pub fn is_active(&self) -> bool {
        self.active_row.is_some()
    }

    pub fn active_row(&self) -> Option<RowKey> {
        self.active_row
    }

    /// Which edge the active interaction revealed.
    pub fn active_edge(&self) -> Option<SwipeEdge> {
        self.active_row.map(|_| self.active_edge)
    }

    pub fn pane_state(&self) -> PaneState {
        self.pane_state
    }

    pub fn translation_for_row(&self, row: RowKey) -> Option<f32> {
        self.translations.translation(row)
    }

    pub fn translations(&self) -> &SwipeTranslations {
        &self.translations
    }

    /// Visual state for the rendering layer. Absence means the row sits at
    /// translation 0.
    pub fn visual_state(&self, row: RowKey) -> Option<&RowVisualState> {
        self.visual.get(&row)
    }

    pub fn strip(&self) -> &ActionsStrip {
        &self.strip
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// The strip's frame in list coordinates, anchored to the revealed edge
    /// of the active row.
    pub fn strip_frame(&self, host: &dyn SwipeHost) -> Option<Rect> {
        let row = self.active_row?;
        let bounds = host.row_bounds(row)?;
        let visual = self.visual.get(&row)?;
        let width = visual.translation_when_open.abs();
        let x = if self.direction.is_rtl() {
            bounds.x
        } else {
            bounds.x + bounds.width - width
        };
        Some(Rect::new(x, bounds.y, width, bounds.height))
    }

    // ── Gesture entry points ────────────────────────────────────────────

    /// Decide whether a pan at `position` with initial `velocity` starts a
    /// swipe. On acceptance the touched row becomes the active row (closing
    /// any other open row first) and the strip is loaded with its actions.
    pub fn should_begin_pan(
        &mut self,
        host: &mut dyn SwipeHost,
        position: Point,
        velocity: Point,
    ) -> bool {
        // A vertically dominated movement is a scroll, not a swipe.
        if velocity.y.abs() >= velocity.x.abs() {
            self.sync_initial_translation();
            return false;
        }

        let Some(row) = host.row_at(position) else {
            self.sync_initial_translation();
            return false;
        };

        self.direction = host.layout_direction();
        let is_primary = if self.direction.is_rtl() {
            velocity.x > 0.0
        } else {
            velocity.x < 0.0
        };
        let edge = if is_primary {
            SwipeEdge::Primary
        } else {
            SwipeEdge::Secondary
        };

        // A back-swipe on the already-open row is the close gesture.
        if self.active_row == Some(row) && !is_primary {
            self.cancel_animation_for(host, row);
            self.sync_initial_translation();
            return true;
        }

        if let Some(active) = self.active_row {
            if active != row {
                self.close_action_pane(host, None, |_| {});
            }
        }

        // Still active here means the same row is being swiped further.
        if self.active_row.is_some() {
            self.cancel_animation_for(host, row);
            self.sync_initial_translation();
            return true;
        }

        let primary = host.actions_for_row(row, SwipeEdge::Primary);
        let resolved = match edge {
            SwipeEdge::Primary => primary.clone(),
            SwipeEdge::Secondary => host.actions_for_row(row, SwipeEdge::Secondary),
        };
        if resolved.is_empty() {
            self.sync_initial_translation();
            return false;
        }

        // A re-drag may land while this row's close animation is still in
        // flight; adopt its live value before activating.
        self.cancel_animation_for(host, row);

        self.active_row = Some(row);
        self.active_edge = edge;
        self.strip
            .set_actions(primary, self.direction, &|text: &str| host.text_width(text));

        if let Some(bounds) = host.row_bounds(row) {
            let open_magnitude = self.strip.preferred_width(bounds.width);
            let when_open = if self.direction.is_rtl() {
                open_magnitude
            } else {
                -open_magnitude
            };
            let current = self
                .visual
                .get(&row)
                .map(|visual| visual.current_translation)
                .or_else(|| self.translations.translation(row))
                .unwrap_or(0.0);
            self.visual.insert(
                row,
                RowVisualState {
                    translation_when_open: when_open,
                    current_translation: current,
                    is_swiping: false,
                },
            );
            self.strip.layout(Size::new(open_magnitude, bounds.height));
        }

        self.sync_initial_translation();
        true
    }

    /// Decide whether the pane-cancel press may begin: only when no touch
    /// lies within the strip, so a tap on an action button never doubles as
    /// a dismiss.
    pub fn should_begin_long_press(&self, host: &dyn SwipeHost, touches: &[Point]) -> bool {
        let Some(frame) = self.strip_frame(host) else {
            return false;
        };
        touches.iter().all(|touch| !frame.contains_point(*touch))
    }

    /// Apply a pan movement. `delta_x` is measured from the pan's start; the
    /// clamped translation is written through to the store and the row's
    /// visual state before this returns.
    pub fn on_pan_changed(&mut self, delta_x: f32, velocity_x: f32) {
        let Some(row) = self.active_row else {
            return;
        };
        let Some(visual) = self.visual.get_mut(&row) else {
            return;
        };

        let raw = delta_x + self.initial_translation;
        let open_magnitude = visual.translation_when_open.abs();
        let normalized = if self.direction.is_rtl() { raw } else { -raw };
        let clamped_normalized = rubber_band(normalized, open_magnitude, MAX_EXTENSION);
        let clamped = if self.direction.is_rtl() {
            clamped_normalized
        } else {
            -clamped_normalized
        };

        visual.current_translation = clamped;
        visual.is_swiping = true;
        self.translations.set(
            row,
            SwipeInfo {
                translation: clamped,
                velocity: velocity_x,
            },
        );
        self.pane_state = PaneState::Dragging;
    }

    /// The pan lifted: open if the velocity-projected translation passes the
    /// half-open threshold, close otherwise.
    pub fn on_pan_ended(&mut self, host: &mut dyn SwipeHost, delta_x: f32, velocity_x: f32) {
        let Some(row) = self.active_row else {
            return;
        };
        let Some(visual) = self.visual.get(&row) else {
            return;
        };

        let final_translation = delta_x + self.initial_translation;
        let projected = final_translation + VELOCITY_PROJECTION * velocity_x;
        let threshold = HALF_OPEN_FRACTION * visual.translation_when_open;
        let should_open = if self.direction.is_rtl() {
            projected > threshold
        } else {
            projected < threshold
        };

        if should_open {
            self.open_action_pane(host, |_| {});
        } else {
            self.close_action_pane(host, None, |_| {});
        }
    }

    /// The cancel press lifted: close unconditionally.
    pub fn on_long_press_ended(&mut self, host: &mut dyn SwipeHost) {
        if self.active_row.is_some() {
            self.close_action_pane(host, None, |_| {});
        }
    }

    /// An action button was tapped. Delete gets the expand transition; every
    /// kind closes the pane and then notifies the host once.
    pub fn did_perform_action(&mut self, host: &mut dyn SwipeHost, action: &Action) {
        if self.active_row.is_none() {
            return;
        }
        let expanded = (action.kind() == ActionKind::Delete).then(|| action.clone());
        self.close_pane(host, expanded.as_ref(), Some(action.clone()), None);
    }

    // ── Pane transitions ────────────────────────────────────────────────

    /// Animate the active row to its open translation. List scrolling stays
    /// disabled while the pane is open.
    pub fn open_action_pane(
        &mut self,
        host: &mut dyn SwipeHost,
        completion: impl FnOnce(bool) + 'static,
    ) {
        host.set_scroll_enabled(false);
        let Some(row) = self.active_row else {
            completion(false);
            return;
        };
        let Some(visual) = self.visual.get_mut(&row) else {
            completion(false);
            return;
        };

        let target = visual.translation_when_open;
        visual.is_swiping = true;
        let velocity = self
            .translations
            .get(row)
            .map(|info| info.velocity)
            .unwrap_or(0.0);
        self.translations.set(
            row,
            SwipeInfo {
                translation: target,
                velocity,
            },
        );
        self.pane_state = PaneState::Opening;
        self.start_animation(
            host,
            row,
            target,
            velocity,
            None,
            None,
            Some(Box::new(completion)),
            PaneState::Open,
        );
    }

    /// Animate the active pane closed, releasing the row's swipe state and
    /// re-enabling list scrolling. With `expanded_action` the strip plays
    /// the swallow transition and the pane travels the full row width.
    pub fn close_action_pane(
        &mut self,
        host: &mut dyn SwipeHost,
        expanded_action: Option<&Action>,
        completion: impl FnOnce(bool) + 'static,
    ) {
        self.close_pane(host, expanded_action, None, Some(Box::new(completion)));
    }

    fn close_pane(
        &mut self,
        host: &mut dyn SwipeHost,
        expanded_action: Option<&Action>,
        notify: Option<Action>,
        completion: Option<Completion>,
    ) {
        host.set_scroll_enabled(true);
        let Some(row) = self.active_row else {
            if let Some(completion) = completion {
                completion(false);
            }
            return;
        };
        let Some(bounds) = host.row_bounds(row) else {
            // The row is gone from the viewport; report failure but still
            // deliver the action so a tap is never silently dropped.
            if let Some(completion) = completion {
                completion(false);
            }
            if let Some(action) = notify {
                host.on_action_performed(&action, row);
            }
            return;
        };

        self.active_row = None;
        let velocity = self
            .translations
            .get(row)
            .map(|info| info.velocity)
            .unwrap_or(0.0);
        self.translations.clear(row);
        self.pane_state = PaneState::Closing;

        let target = match expanded_action {
            Some(action) => {
                self.strip.expand(action);
                if self.direction.is_rtl() {
                    bounds.width
                } else {
                    -bounds.width
                }
            }
            None => 0.0,
        };

        self.start_animation(
            host,
            row,
            target,
            velocity,
            expanded_action.cloned(),
            notify,
            completion,
            PaneState::Idle,
        );
    }

    /// Force-close and restore host state; for tearing the controller down
    /// mid-gesture. The scroll flag always ends up enabled.
    pub fn teardown(&mut self, host: &mut dyn SwipeHost) {
        host.set_scroll_enabled(true);
        let animations = std::mem::take(&mut self.animations);
        for animation in animations {
            self.finish_animation(host, animation, false);
        }
        if let Some(row) = self.active_row.take() {
            self.translations.clear(row);
        }
        self.visual.clear();
        self.pane_state = PaneState::Idle;
    }

    // ── Animation plumbing ──────────────────────────────────────────────

    /// Advance in-flight pane animations to `frame_time_nanos`, writing the
    /// interpolated translations through and resolving completions.
    pub fn on_frame(&mut self, host: &mut dyn SwipeHost, frame_time_nanos: u64) {
        let mut index = 0;
        while index < self.animations.len() {
            let animation = &mut self.animations[index];
            let value = animation.spring.tick(frame_time_nanos);
            let row = animation.row;
            let expand_progress = animation
                .expand
                .is_some()
                .then(|| animation.spring.progress());
            let finished = animation.spring.is_finished();

            if let Some(visual) = self.visual.get_mut(&row) {
                visual.current_translation = value;
            }
            if let Some(progress) = expand_progress {
                self.strip.set_expand_progress(progress);
            }

            if finished {
                let animation = self.animations.remove(index);
                self.finish_animation(host, animation, true);
            } else {
                index += 1;
            }
        }
    }

    fn start_animation(
        &mut self,
        host: &mut dyn SwipeHost,
        row: RowKey,
        target: f32,
        release_velocity: f32,
        expand: Option<Action>,
        notify: Option<Action>,
        completion: Option<Completion>,
        end_state: PaneState,
    ) {
        // A newer animation on the same row supersedes the old one, adopting
        // its live value as the start point.
        self.cancel_animation_for(host, row);

        let start = self
            .visual
            .get(&row)
            .map(|visual| visual.current_translation)
            .or_else(|| self.translations.translation(row))
            .unwrap_or(0.0);
        self.generation += 1;
        let animation = PaneAnimation {
            row,
            generation: self.generation,
            spring: SpringAnimation::new(start, target, release_velocity, PANE_SPRING),
            expand,
            notify,
            completion,
            end_state,
        };

        if animation.spring.is_finished() {
            // Nothing to travel; resolve synchronously.
            self.finish_animation(host, animation, true);
        } else {
            self.animations.push(animation);
        }
    }

    /// Cancel any in-flight animation for `row`, adopting its live value and
    /// firing its completion with `finished = false`.
    fn cancel_animation_for(&mut self, host: &mut dyn SwipeHost, row: RowKey) {
        if let Some(position) = self.animations.iter().position(|a| a.row == row) {
            let animation = self.animations.remove(position);
            let live = animation.spring.value();
            if let Some(visual) = self.visual.get_mut(&row) {
                visual.current_translation = live;
            }
            if let Some(mut info) = self.translations.get(row) {
                info.translation = live;
                self.translations.set(row, info);
            }
            self.finish_animation(host, animation, false);
        }
    }

    fn finish_animation(
        &mut self,
        host: &mut dyn SwipeHost,
        animation: PaneAnimation,
        finished: bool,
    ) {
        let PaneAnimation {
            row,
            generation,
            spring,
            expand,
            notify,
            completion,
            end_state,
        } = animation;

        // Guard against superseded completions touching newer state.
        let superseded = self
            .animations
            .iter()
            .any(|candidate| candidate.row == row && candidate.generation > generation);
        let still_active = self.active_row == Some(row);

        if !superseded {
            if let Some(visual) = self.visual.get_mut(&row) {
                if finished {
                    visual.current_translation = spring.target();
                }
                visual.is_swiping = still_active;
            }
            if finished {
                if expand.is_some() {
                    self.strip.set_expand_progress(1.0);
                }
                if !still_active {
                    self.visual.remove(&row);
                }
                match end_state {
                    PaneState::Open if still_active => self.pane_state = PaneState::Open,
                    PaneState::Idle
                        if self.active_row.is_none() && self.animations.is_empty() =>
                    {
                        self.pane_state = PaneState::Idle
                    }
                    _ => {}
                }
            }
        }

        if let Some(completion) = completion {
            completion(finished);
        }
        if let Some(action) = notify {
            host.on_action_performed(&action, row);
        }
    }

    // ── Raw pointer front end ───────────────────────────────────────────

    /// Feed a raw pointer sample through the recognizers. Hosts with their
    /// own recognizers can skip this and call the begin/changed/ended
    /// operations directly.
    pub fn handle_pointer_event(&mut self, host: &mut dyn SwipeHost, event: &PointerEvent) {
        match self.pan.handle(event) {
            Some(PanEvent::Began { position, velocity }) => {
                if self.should_begin_pan(host, position, velocity) {
                    // The sequence is a drag now; the cancel press is out.
                    self.long_press.fail();
                } else {
                    self.pan.fail();
                }
            }
            Some(PanEvent::Changed {
                delta_x,
                velocity_x,
            }) => self.on_pan_changed(delta_x, velocity_x),
            Some(PanEvent::Ended {
                delta_x,
                velocity_x,
            }) => self.on_pan_ended(host, delta_x, velocity_x),
            None => {}
        }

        match self.long_press.handle(event) {
            Some(LongPressEvent::Began { touches }) => {
                if self.should_begin_long_press(&*host, &touches) {
                    self.long_press.accept();
                    if self.long_press.take_ended() {
                        self.on_long_press_ended(host);
                    }
                } else {
                    self.long_press.fail();
                }
            }
            Some(LongPressEvent::Ended) => self.on_long_press_ended(host),
            None => {}
        }

        // A released tap over the open strip activates the touched button.
        if event.kind == PointerEventKind::Up && !self.pan.is_begun() {
            self.dispatch_strip_tap(host, event.position);
        }
    }

    fn dispatch_strip_tap(&mut self, host: &mut dyn SwipeHost, position: Point) {
        if self.pane_state != PaneState::Open {
            return;
        }
        let Some(frame) = self.strip_frame(&*host) else {
            return;
        };
        if !frame.contains_point(position) {
            return;
        }
        let local = Point::new(position.x - frame.x, position.y - frame.y);
        let Some(action) = self.strip.hit_test(local).cloned() else {
            return;
        };
        self.did_perform_action(host, &action);
    }

    /// Reload the active pan's baseline translation, mirroring how the
    /// gesture's start point is captured when recognition begins.
    fn sync_initial_translation(&mut self) {
        if let Some(active) = self.active_row {
            self.initial_translation = self.translations.translation(active).unwrap_or(0.0);
        }
    }
}
