//! End-to-end drawer workflows: commands, drags, and interrupts
//! composed the way the UI layer drives them.

use crate::helpers::{ms, open_controller, settle, DragScript, W};
use budgetboard::drawer::{claims_gesture, DrawerController, DrawerTarget};
use std::time::Instant;

#[test]
fn test_edge_swipe_open_workflow() {
    let mut ctl = DrawerController::new(W);

    // Pointer down at x=20 (inside the edge band), moving right: the
    // input layer claims once displacement clears the threshold
    assert!(!claims_gesture(true, 20.0, 8.0, 1.0));
    assert!(claims_gesture(true, 20.0, 14.0, 1.0));

    DragScript::new()
        .move_to(14.0)
        .move_to(60.0)
        .move_to(120.0)
        .release_velocity(0.1)
        .run(&mut ctl, Instant::now());
    // 120 > W/3: distance rule opens
    assert!(ctl.is_open());
}

#[test]
fn test_rejected_swipe_leaves_drawer_closed() {
    let ctl = DrawerController::new(W);
    // Start outside the edge band: never claimed, controller untouched
    assert!(!claims_gesture(true, 200.0, 40.0, 2.0));
    assert!(!ctl.overlay_visible());
    assert_eq!(ctl.offset(), -W);
    assert!(ctl.state().is_settled());
}

#[test]
fn test_open_interrupted_by_close_settles_closed_exactly() {
    let mut ctl = DrawerController::new(W);
    let t0 = Instant::now();
    ctl.open(t0);
    // Close lands before the open animation finishes
    ctl.tick(t0 + ms(40));
    ctl.close(t0 + ms(40));

    // From here offset must move monotonically toward -W
    let mut prev = ctl.offset();
    let mut now = t0 + ms(50);
    while ctl.tick(now) {
        assert!(ctl.offset() <= prev + 1e-4, "offset moved away from target");
        prev = ctl.offset();
        now += ms(10);
    }
    assert!(!ctl.is_open());
    assert_eq!(ctl.offset(), -W, "offset converges to exactly -W");
}

#[test]
fn test_slow_partial_drag_snaps_back() {
    let mut ctl = DrawerController::new(W);
    DragScript::new()
        .move_to(30.0)
        .move_to(50.0)
        .release_velocity(0.05)
        .run(&mut ctl, Instant::now());
    // 50 < W/3 and < intent distance: prior (closed) state wins
    assert!(!ctl.is_open());
    assert!(!ctl.overlay_visible());
}

#[test]
fn test_catch_and_reverse_a_closing_drawer() {
    let (mut ctl, t) = open_controller();
    ctl.close(t);
    ctl.tick(t + ms(80));
    let caught_at = ctl.offset();
    assert!(caught_at > -W && caught_at < 0.0);

    // Catch mid-close and fling back open
    ctl.begin_drag(t + ms(80));
    assert_eq!(ctl.offset(), caught_at, "drag base is the live value");
    ctl.drag_move(10.0);
    ctl.release(10.0, 0.6, t + ms(120));
    assert_eq!(ctl.state().animating_target(), Some(DrawerTarget::Open));
    settle(&mut ctl, t + ms(120));
    assert!(ctl.is_open());
}

#[test]
fn test_full_cycle_returns_to_initial_state() {
    let mut ctl = DrawerController::new(W);
    let t0 = Instant::now();
    ctl.open(t0);
    let t1 = settle(&mut ctl, t0);
    ctl.close(t1);
    settle(&mut ctl, t1);

    assert!(!ctl.is_open());
    assert_eq!(ctl.offset(), -W);
    assert!(!ctl.overlay_visible());
    assert_eq!(ctl.backdrop_opacity(), 0.0);
    assert!(ctl.state().is_settled());
}
