// Host-side tests for surface sizing, camera aspect and orbit controls.

use globe_core::*;
use glam::Vec3;

#[test]
fn new_viewport_sets_aspect_and_default_camera() {
    let vp = Viewport::new(800, 600);
    assert_eq!(vp.size(), (800, 600));
    assert_eq!(vp.camera().aspect, 800.0 / 600.0);
    assert_eq!(vp.camera().eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!((vp.camera().fovy_radians - 70f32.to_radians()).abs() < 1e-6);
}

#[test]
fn resize_sets_exact_aspect() {
    let mut vp = Viewport::new(800, 600);
    assert!(vp.resize(1917, 1003));
    assert_eq!(vp.size(), (1917, 1003));
    assert_eq!(vp.camera().aspect, 1917.0f32 / 1003.0f32);
}

#[test]
fn resize_updates_projection() {
    let mut vp = Viewport::new(100, 100);
    let before = vp.camera().projection_matrix();
    vp.resize(200, 100);
    let after = vp.camera().projection_matrix();
    assert_ne!(before, after);
    // x scale halves when the aspect doubles
    assert!((after.x_axis.x * 2.0 - before.x_axis.x).abs() < 1e-5);
}

#[test]
fn zero_sized_resize_is_ignored() {
    let mut vp = Viewport::new(640, 480);
    assert!(!vp.resize(0, 480));
    assert!(!vp.resize(640, 0));
    assert_eq!(vp.size(), (640, 480));
    assert_eq!(vp.camera().aspect, 640.0 / 480.0);
}

#[test]
fn same_size_resize_reports_unchanged() {
    let mut vp = Viewport::new(640, 480);
    assert!(!vp.resize(640, 480));
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(effective_pixel_ratio(1.0), 1.0);
    assert_eq!(effective_pixel_ratio(1.5), 1.5);
    assert_eq!(effective_pixel_ratio(3.0), 2.0);
    assert_eq!(effective_pixel_ratio(0.0), 1.0);
    assert_eq!(effective_pixel_ratio(f64::NAN), 1.0);
    assert_eq!(physical_size(400.0, 300.0, 3.0), (800, 600));
    assert_eq!(physical_size(0.0, 0.0, 1.0), (1, 1));
}

#[test]
fn view_proj_puts_origin_in_front_of_the_camera() {
    let vp = Viewport::new(800, 600);
    let clip = vp.camera().view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn orbit_starts_at_default_eye() {
    let orbit = OrbitControls::default();
    assert!((orbit.eye() - Vec3::new(0.0, 0.0, CAMERA_Z)).length() < 1e-5);
    assert!((orbit.distance() - CAMERA_Z).abs() < 1e-6);
}

#[test]
fn orbit_polar_angle_stays_off_the_poles() {
    let mut orbit = OrbitControls::default();
    orbit.rotate(0.0, 10.0);
    assert!(orbit.polar_angle() >= ORBIT_POLAR_EPS);
    orbit.rotate(0.0, -20.0);
    assert!(orbit.polar_angle() <= std::f32::consts::PI - ORBIT_POLAR_EPS);
    assert!(orbit.eye().is_finite());
}

#[test]
fn orbit_rotation_keeps_distance() {
    let mut orbit = OrbitControls::default();
    orbit.rotate(1.3, 0.4);
    assert!((orbit.eye().length() - CAMERA_Z).abs() < 1e-5);
    assert!(orbit.azimuth() >= 0.0 && orbit.azimuth() < std::f32::consts::TAU);
}

#[test]
fn orbit_zoom_is_clamped() {
    let mut orbit = OrbitControls::default();
    for _ in 0..200 {
        orbit.zoom(-1.0);
    }
    assert!(orbit.distance() > PLANET_RADIUS);
    for _ in 0..200 {
        orbit.zoom(1.0);
    }
    assert!(orbit.distance() < CAMERA_FAR);
    let d = orbit.distance();
    orbit.zoom(0.0);
    orbit.zoom(f32::NAN);
    assert_eq!(orbit.distance(), d);
}

#[test]
fn orbit_drag_only_rotates_while_dragging() {
    let mut orbit = OrbitControls::default();
    let start = orbit.eye();
    orbit.drag_to(50.0, 0.0, 100.0);
    assert_eq!(orbit.eye(), start);

    orbit.begin_drag(0.0, 0.0);
    assert!(orbit.is_dragging());
    // half the height is half a turn
    orbit.drag_to(50.0, 0.0, 100.0);
    orbit.end_drag();
    assert!(!orbit.is_dragging());
    assert!((orbit.eye() - Vec3::new(0.0, 0.0, -CAMERA_Z)).length() < 1e-4);
}

#[test]
fn settings_clamp_and_snap() {
    let mut s = Settings::default();
    assert_eq!(s.progress(), 0.0);
    assert!((s.set_progress(0.234) - 0.23).abs() < 1e-6);
    assert_eq!(s.set_progress(5.0), 1.0);
    assert_eq!(s.set_progress(-1.0), 0.0);
    s.set_progress(0.5);
    assert!((s.set_progress(f32::NAN) - 0.5).abs() < 1e-6);
}

#[test]
fn settings_snap_lands_on_exact_hundredths() {
    let mut s = Settings::default();
    for k in 0..=100 {
        let value = k as f32 / 100.0;
        assert_eq!(s.set_progress(value), value);
        assert_eq!(s.set_progress(value + 0.003), value);
    }
    assert_eq!(s.set_progress(0.05), 0.05);
}

#[test]
fn right_drag_pans_target_without_turning() {
    let mut orbit = OrbitControls::default();
    let offset = orbit.eye() - Vec3::ZERO;
    orbit.begin_pan(100.0, 100.0);
    assert_eq!(orbit.drag_mode(), Some(DragMode::Pan));
    orbit.drag_to(150.0, 100.0, 600.0);

    let target = orbit.eye() - offset;
    assert!(target.x < 0.0);
    assert!(target.y.abs() < 1e-5 && target.z.abs() < 1e-5);
    assert!((orbit.distance() - CAMERA_Z).abs() < 1e-6);

    let mut camera = Camera::new(1.0);
    orbit.apply_to(&mut camera);
    assert!((camera.eye - camera.target - offset).length() < 1e-5);
    assert!((camera.target - target).length() < 1e-5);

    orbit.end_drag();
    assert_eq!(orbit.drag_mode(), None);
    orbit.drag_to(400.0, 400.0, 600.0);
    assert!((orbit.eye() - offset - target).length() < 1e-5);
}

#[test]
fn vertical_pan_moves_target_up() {
    let mut orbit = OrbitControls::default();
    // pointer moves down the screen, content follows, target moves up
    orbit.pan(0.0, 30.0, 600.0);
    let mut camera = Camera::new(1.0);
    orbit.apply_to(&mut camera);
    assert!(camera.target.y > 0.0);
    assert!(camera.target.x.abs() < 1e-5);
}

#[test]
fn left_drag_rotates_instead_of_panning() {
    let mut orbit = OrbitControls::default();
    orbit.begin_drag(0.0, 0.0);
    assert_eq!(orbit.drag_mode(), Some(DragMode::Rotate));
    orbit.drag_to(60.0, 0.0, 600.0);
    let mut camera = Camera::new(1.0);
    orbit.apply_to(&mut camera);
    assert_eq!(camera.target, Vec3::ZERO);
    assert!((orbit.distance() - CAMERA_Z).abs() < 1e-5);
}
