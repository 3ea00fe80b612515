//! Unit tests for gesture claim and release interpretation.

use budgetboard::constants::{EDGE_BAND_WIDTH, FLING_VELOCITY, INTENT_DISTANCE};
use budgetboard::drawer::{claims_gesture, resolve_release, DrawerTarget};

const W: f32 = 280.0;

#[test]
fn test_small_move_is_not_claimed() {
    // dx = 5 is below the claim threshold: the list keeps the gesture
    assert!(!claims_gesture(true, 20.0, 5.0, 0.0));
    assert!(!claims_gesture(false, 20.0, 5.0, 0.0));
}

#[test]
fn test_edge_band_boundary() {
    assert!(claims_gesture(true, EDGE_BAND_WIDTH, 20.0, 0.0));
    assert!(!claims_gesture(true, EDGE_BAND_WIDTH + 1.0, 20.0, 0.0));
}

#[test]
fn test_vertical_scroll_never_claimed() {
    // A list scroll with slight horizontal drift
    assert!(!claims_gesture(true, 20.0, 12.0, 80.0));
    assert!(!claims_gesture(false, 200.0, 12.0, 80.0));
}

#[test]
fn test_leftward_edge_swipe_not_claimed_when_closed() {
    assert!(!claims_gesture(true, 20.0, -40.0, 0.0));
}

#[test]
fn test_release_rules_in_precedence_order() {
    // 1. Fling beats distance
    assert_eq!(resolve_release(W, false, -50.0, 0.4), DrawerTarget::Open);
    // 2. Distance beats the prior-state fallback
    assert_eq!(resolve_release(W, false, W / 3.0 + 1.0, 0.0), DrawerTarget::Open);
    // 3. Fallback keeps the prior state
    assert_eq!(resolve_release(W, false, 30.0, 0.0), DrawerTarget::Closed);
    assert_eq!(resolve_release(W, true, 30.0, 0.0), DrawerTarget::Open);
}

#[test]
fn test_fling_threshold_is_exclusive() {
    // Exactly at the threshold the fling rule does not fire; the 10px
    // displacement then falls back to the prior (closed) state
    assert_eq!(
        resolve_release(W, false, 10.0, FLING_VELOCITY),
        DrawerTarget::Closed
    );
    assert_eq!(
        resolve_release(W, false, 10.0, FLING_VELOCITY + 0.01),
        DrawerTarget::Open
    );
}

#[test]
fn test_intent_distance_flips_only_toward_other_state() {
    let past_intent = INTENT_DISTANCE + 5.0;
    assert_eq!(resolve_release(W, false, past_intent, 0.0), DrawerTarget::Open);
    assert_eq!(
        resolve_release(W, true, -past_intent, 0.0),
        DrawerTarget::Closed
    );
    // Dragging further open while already open stays open via fallback
    assert_eq!(resolve_release(W, true, past_intent, 0.0), DrawerTarget::Open);
}

#[test]
fn test_overlapping_thresholds_agree_on_target() {
    // Between INTENT_DISTANCE (80) and W/3 (~93.3) the intent exception
    // fires; past W/3 the distance rule fires. Both resolve the same
    // way, so the overlap is not observable in behavior.
    assert_eq!(resolve_release(W, false, 85.0, 0.0), DrawerTarget::Open);
    assert_eq!(resolve_release(W, false, 100.0, 0.0), DrawerTarget::Open);
}
