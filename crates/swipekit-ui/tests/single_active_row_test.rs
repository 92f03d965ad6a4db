//! The exactly-one-open-row invariant and supersession of in-flight
//! animations.

use std::cell::Cell;
use std::rc::Rc;

use swipekit_foundation::{Action, ActionKind, RowKey};
use swipekit_testing::{FakeHost, FramePump};
use swipekit_ui::{PaneState, StripTheme, SwipeController};
use swipekit_ui_graphics::{Point, Rect};

const ROW_A: RowKey = RowKey::new(0);
const ROW_B: RowKey = RowKey::new(1);

fn sample_actions() -> Vec<Action> {
    vec![
        Action::new("Save", ActionKind::Save),
        Action::new("Delete", ActionKind::Delete),
    ]
}

fn host_with_two_rows() -> FakeHost {
    let mut host = FakeHost::new();
    host.push_row(ROW_A, Rect::new(0.0, 0.0, 400.0, 50.0), sample_actions());
    host.push_row(ROW_B, Rect::new(0.0, 50.0, 400.0, 50.0), sample_actions());
    host
}

fn open_row(
    controller: &mut SwipeController,
    host: &mut FakeHost,
    pump: &mut FramePump,
    y: f32,
) {
    assert!(controller.should_begin_pan(host, Point::new(200.0, y), Point::new(-500.0, 0.0)));
    controller.on_pan_changed(-150.0, -900.0);
    controller.on_pan_ended(host, -150.0, -900.0);
    pump.settle(controller, host);
    assert_eq!(controller.pane_state(), PaneState::Open);
}

#[test]
fn activating_another_row_closes_the_open_one_first() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_two_rows();
    let mut pump = FramePump::new();

    open_row(&mut controller, &mut host, &mut pump, 25.0);
    assert_eq!(controller.active_row(), Some(ROW_A));

    // A new swipe on row B takes over immediately.
    assert!(controller.should_begin_pan(
        &mut host,
        Point::new(200.0, 75.0),
        Point::new(-500.0, 0.0)
    ));
    assert_eq!(controller.active_row(), Some(ROW_B));
    // Row A's swipe state was released the moment its close began.
    assert_eq!(controller.translation_for_row(ROW_A), None);

    controller.on_pan_changed(-100.0, -400.0);
    controller.on_pan_ended(&mut host, -100.0, -400.0);
    pump.settle(&mut controller, &mut host);

    assert_eq!(controller.active_row(), Some(ROW_B));
    assert!(controller.visual_state(ROW_A).is_none(), "row A fully released");
    assert_eq!(controller.pane_state(), PaneState::Open);
}

#[test]
fn both_rows_animate_during_the_handover() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_two_rows();
    let mut pump = FramePump::new();

    open_row(&mut controller, &mut host, &mut pump, 25.0);

    assert!(controller.should_begin_pan(
        &mut host,
        Point::new(200.0, 75.0),
        Point::new(-500.0, 0.0)
    ));
    controller.on_pan_changed(-100.0, -400.0);
    controller.on_pan_ended(&mut host, -100.0, -400.0);

    // Row A is still settling closed while row B opens.
    assert!(controller.is_animating());
    pump.advance(&mut controller, &mut host);
    pump.advance(&mut controller, &mut host);
    assert!(
        controller.visual_state(ROW_A).is_some(),
        "row A keeps its visual state while its close settles"
    );

    pump.settle(&mut controller, &mut host);
    assert!(controller.visual_state(ROW_A).is_none());
    assert_eq!(controller.active_row(), Some(ROW_B));
}

#[test]
fn superseded_close_reports_unfinished() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_two_rows();
    let mut pump = FramePump::new();

    open_row(&mut controller, &mut host, &mut pump, 25.0);

    let finished = Rc::new(Cell::new(None));
    let seen = Rc::clone(&finished);
    controller.close_action_pane(&mut host, None, move |value| seen.set(Some(value)));
    assert!(controller.is_animating());
    assert_eq!(finished.get(), None, "close is still in flight");

    // A new swipe on the same row supersedes the close mid-flight.
    assert!(controller.should_begin_pan(
        &mut host,
        Point::new(200.0, 25.0),
        Point::new(-500.0, 0.0)
    ));
    assert_eq!(
        finished.get(),
        Some(false),
        "the superseded completion fires with finished = false"
    );

    controller.on_pan_changed(-120.0, -500.0);
    controller.on_pan_ended(&mut host, -120.0, -500.0);
    pump.settle(&mut controller, &mut host);
    assert_eq!(controller.pane_state(), PaneState::Open);
    assert_eq!(controller.active_row(), Some(ROW_A));
}

#[test]
fn completed_close_reports_finished() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_two_rows();
    let mut pump = FramePump::new();

    open_row(&mut controller, &mut host, &mut pump, 25.0);

    let finished = Rc::new(Cell::new(None));
    let seen = Rc::clone(&finished);
    controller.close_action_pane(&mut host, None, move |value| seen.set(Some(value)));
    pump.settle(&mut controller, &mut host);
    assert_eq!(finished.get(), Some(true));
}

#[test]
fn close_without_an_active_row_fails_the_completion() {
    let mut controller = SwipeController::new(StripTheme::default());
    let mut host = host_with_two_rows();

    let finished = Rc::new(Cell::new(None));
    let seen = Rc::clone(&finished);
    controller.close_action_pane(&mut host, None, move |value| seen.set(Some(value)));
    assert_eq!(finished.get(), Some(false));
    assert!(host.scroll_enabled(), "the scroll flag is restored regardless");
}
