// Host-side tests for constants and their geometric relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_constants_are_within_reasonable_bounds() {
    assert_eq!(FOCUS_DURATION_MS, 600);
    assert_eq!(CLOSE_DURATION_MS, 600);
    assert!(FOCUS_DISTANCE > 0.0);
    assert!(FOCUS_MIN_LIFT > 0.0);
    // Focus enlarges the ring
    assert!(FOCUS_SCALE_FACTOR > 1.0);
    assert!(DEFAULT_DRAG_SENSITIVITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn focus_point_sits_between_camera_and_box() {
    let view_dist = (CAMERA_TARGET - CAMERA_EYE).length();
    assert!(FOCUS_DISTANCE < view_dist);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_picking_is_unambiguous() {
    // A pick sphere must cover the whole ring...
    assert!(PICK_SPHERE_RADIUS >= RING_MAJOR_RADIUS + RING_MINOR_RADIUS);
    // ...without overlapping its neighbour's.
    for pair in RING_POSITIONS.windows(2) {
        let dx = pair[1][0] - pair[0][0];
        assert!(dx > 2.0 * PICK_SPHERE_RADIUS);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rings_stand_above_the_tray() {
    let tray_top = BOX_CENTER.y + BOX_HALF_EXTENTS.y;
    for p in RING_POSITIONS {
        assert!(p[1] > tray_top);
        assert!(p[0].abs() + RING_MAJOR_RADIUS <= BOX_HALF_EXTENTS.x);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn click_slop_is_a_small_rotation() {
    assert!(CLICK_SLOP_PX > 0.0);
    // A press that wobbles within the slop turns the ring by well under 0.1 rad.
    assert!(CLICK_SLOP_PX * DEFAULT_DRAG_SENSITIVITY < 0.1);
}

#[test]
fn colors_are_normalized() {
    for c in RING_COLORS.iter().chain(std::iter::once(&BOX_COLOR)) {
        for v in c {
            assert!((0.0..=1.0).contains(v));
        }
    }
    for v in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&v));
    }
    assert!((0.0..=1.0).contains(&AMBIENT));
}
