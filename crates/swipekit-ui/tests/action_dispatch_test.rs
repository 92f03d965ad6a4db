//! Action taps: the delete expand transition, exactly-once delegate
//! notification, and the long-press cancel filter.

use swipekit_foundation::{Action, ActionKind, RowKey};
use swipekit_testing::{FakeHost, FramePump};
use swipekit_ui::{PaneState, StripTheme, SwipeController};
use swipekit_ui_graphics::{Point, Rect};

const ROW: RowKey = RowKey::new(7);

fn sample_actions() -> Vec<Action> {
    vec![
        Action::new("Share", ActionKind::Share),
        Action::new("Save", ActionKind::Save),
        Action::new("Delete", ActionKind::Delete),
    ]
}

fn host_with_row() -> FakeHost {
    let mut host = FakeHost::new();
    host.push_row(ROW, Rect::new(0.0, 0.0, 400.0, 50.0), sample_actions());
    host
}

fn open_pane(controller: &mut SwipeController, host: &mut FakeHost, pump: &mut FramePump) {
    assert!(controller.should_begin_pan(host, Point::new(200.0, 25.0), Point::new(-500.0, 0.0)));
    controller.on_pan_changed(-150.0, -900.0);
    controller.on_pan_ended(host, -150.0, -900.0);
    pump.settle(controller, host);
    assert_eq!(controller.pane_state(), PaneState::Open);
}

#[test]
fn delete_expands_before_notifying() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_row();
    let mut pump = FramePump::new();
    open_pane(&mut controller, &mut host, &mut pump);

    let delete = Action::new("Delete", ActionKind::Delete);
    controller.did_perform_action(&mut host, &delete);
    assert_eq!(controller.strip().activated_index(), Some(2));
    assert!(
        host.performed().is_empty(),
        "no notification until the expand animation resolves"
    );

    pump.settle(&mut controller, &mut host);

    // Swallow transition fully applied: the tapped button spans the strip
    // at zero height, the others have faded out.
    let strip_width = controller.strip().bounds().width;
    let buttons = controller.strip().buttons();
    assert_eq!(buttons[2].frame.width, strip_width);
    assert_eq!(buttons[2].frame.height, 0.0);
    assert_eq!(buttons[2].title_alpha, 0.0);
    assert_eq!(buttons[0].alpha, 0.0);
    assert_eq!(buttons[1].alpha, 0.0);

    assert_eq!(host.performed(), &[(delete, ROW)]);
    assert_eq!(controller.translation_for_row(ROW), None);
    assert!(host.scroll_enabled());
}

#[test]
fn non_destructive_actions_close_without_expanding() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_row();
    let mut pump = FramePump::new();
    open_pane(&mut controller, &mut host, &mut pump);

    let share = Action::new("Share", ActionKind::Share);
    controller.did_perform_action(&mut host, &share);
    assert_eq!(controller.strip().activated_index(), None);

    pump.settle(&mut controller, &mut host);
    assert_eq!(host.performed(), &[(share, ROW)]);
    assert_eq!(controller.pane_state(), PaneState::Idle);
}

#[test]
fn action_without_an_active_row_is_ignored() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_row();

    controller.did_perform_action(&mut host, &Action::new("Delete", ActionKind::Delete));
    assert!(host.performed().is_empty());
}

#[test]
fn action_on_a_vanished_row_still_notifies_once() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_row();
    let mut pump = FramePump::new();
    open_pane(&mut controller, &mut host, &mut pump);

    // The row scrolls out and is recycled before the tap lands.
    host.remove_row(ROW);
    let delete = Action::new("Delete", ActionKind::Delete);
    controller.did_perform_action(&mut host, &delete);

    assert_eq!(host.performed(), &[(delete, ROW)]);
    pump.settle(&mut controller, &mut host);
    assert_eq!(host.performed().len(), 1, "never notified twice");
}

#[test]
fn cancel_press_is_filtered_by_the_strip_bounds() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_row();
    let mut pump = FramePump::new();
    open_pane(&mut controller, &mut host, &mut pump);

    // Strip occupies the trailing 228 px of the 400 px row.
    let inside_strip = Point::new(300.0, 25.0);
    let outside_strip = Point::new(50.0, 25.0);

    assert!(controller.should_begin_long_press(&host, &[outside_strip]));
    assert!(!controller.should_begin_long_press(&host, &[inside_strip]));
    // All-touches semantics: a single touch on the strip vetoes the press.
    assert!(!controller.should_begin_long_press(&host, &[outside_strip, inside_strip]));
}

#[test]
fn cancel_press_requires_an_active_row() {
    let controller = SwipeController::new(StripTheme::default());
    let host = host_with_row();
    assert!(!controller.should_begin_long_press(&host, &[Point::new(50.0, 25.0)]));
}

#[test]
fn long_press_end_closes_unconditionally() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_row();
    let mut pump = FramePump::new();
    open_pane(&mut controller, &mut host, &mut pump);

    controller.on_long_press_ended(&mut host);
    pump.settle(&mut controller, &mut host);
    assert!(!controller.is_active());
    assert_eq!(controller.pane_state(), PaneState::Idle);
}
