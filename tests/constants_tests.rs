// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use globe_core::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_consistent() {
    assert_eq!(PLANET_RADIUS, 1.0);
    assert!(MARKER_RADIUS > 0.0 && MARKER_RADIUS < PLANET_RADIUS);
    assert!(TUBE_RADIUS > 0.0 && TUBE_RADIUS < MARKER_RADIUS);
    // peak lift exceeds the tube thickness
    assert!(ARC_BULGE > TUBE_RADIUS);
    assert_eq!(ARC_SEGMENTS, 20);
    assert_eq!(TUBE_TUBULAR_SEGMENTS, 20);
    assert_eq!(TUBE_RADIAL_SEGMENTS, 8);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_planet() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z > PLANET_RADIUS && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert_eq!(MAX_PIXEL_RATIO, 2.0);
    assert!(ORBIT_ZOOM_SCALE > 0.0 && ORBIT_ZOOM_SCALE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn progress_range_is_whole_steps() {
    assert!(PROGRESS_MIN < PROGRESS_MAX);
    let steps = (PROGRESS_MAX - PROGRESS_MIN) / PROGRESS_STEP;
    assert!((steps - steps.round()).abs() < 1e-3);
}

#[test]
fn clear_color_is_opaque_grey() {
    assert_eq!(CLEAR_COLOR[3], 1.0);
    assert_eq!(CLEAR_COLOR[0], CLEAR_COLOR[1]);
    assert_eq!(CLEAR_COLOR[1], CLEAR_COLOR[2]);
}

#[test]
fn demo_endpoints_parse_back() {
    let text = format!("{},{}", DEFAULT_POINT_A[0], DEFAULT_POINT_A[1]);
    let p: GeoPoint = text.parse().unwrap();
    assert_eq!(p, GlobeParams::default().from);
}

#[test]
fn host_page_ids_are_distinct() {
    let ids = [CONTAINER_ID, CANVAS_ID, GUI_PANEL_ID, GUI_PROGRESS_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(KEY_TOGGLE_PLAY, KEY_TOGGLE_GUI);
    assert!(GUI_PANEL_STYLE.contains("position:fixed"));
}
