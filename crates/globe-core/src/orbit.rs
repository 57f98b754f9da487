//! Drag-to-rotate, right-drag-to-pan, wheel-to-zoom camera around the globe.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, ORBIT_POLAR_EPS, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SCALE,
};
use crate::viewport::Camera;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// What a pointer drag does to the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Spherical orbit state around `target`.
///
/// `theta` is the azimuth around +Y (0 looks from +Z), `phi` the polar
/// angle from +Y.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    min_distance: f32,
    max_distance: f32,
    dragging: Option<DragMode>,
    last_pointer: [f32; 2],
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(CAMERA_NEAR);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            radius,
            theta,
            phi: phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS),
            // stay outside the planet and inside the far plane
            min_distance: 1.0 + CAMERA_NEAR * 10.0,
            max_distance: CAMERA_FAR * 0.9,
            dragging: None,
            last_pointer: [0.0, 0.0],
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth(&self) -> f32 {
        self.theta
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn drag_mode(&self) -> Option<DragMode> {
        self.dragging
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    /// Point `camera` at the orbit's current eye and target.
    pub fn apply_to(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = self.target;
    }

    /// Start a rotating drag (primary button).
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.begin(DragMode::Rotate, x, y);
    }

    /// Start a panning drag (secondary button).
    pub fn begin_pan(&mut self, x: f32, y: f32) {
        self.begin(DragMode::Pan, x, y);
    }

    fn begin(&mut self, mode: DragMode, x: f32, y: f32) {
        self.dragging = Some(mode);
        self.last_pointer = [x, y];
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Pointer moved to (`x`, `y`) in pixels on a surface `height` pixels tall.
    ///
    /// Rotating across the full height turns the globe by one full
    /// revolution. Panning keeps the point under the cursor at the target
    /// depth fixed to the cursor.
    pub fn drag_to(&mut self, x: f32, y: f32, height: f32) {
        let Some(mode) = self.dragging else {
            return;
        };
        let dx = x - self.last_pointer[0];
        let dy = y - self.last_pointer[1];
        self.last_pointer = [x, y];
        let h = height.max(1.0);
        match mode {
            DragMode::Rotate => self.rotate(
                TAU * dx / h * ORBIT_ROTATE_SPEED,
                TAU * dy / h * ORBIT_ROTATE_SPEED,
            ),
            DragMode::Pan => self.pan(dx, dy, h),
        }
    }

    /// Slide target and eye together in the view plane by a pixel delta.
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        // world units per pixel at the target's depth
        let target_distance = self.radius * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
        let scale = 2.0 * target_distance / height.max(1.0);
        self.target += up * (dy * scale) - right * (dx * scale);
    }

    /// Rotate left/up by the given angles in radians.
    pub fn rotate(&mut self, left: f32, up: f32) {
        self.theta = (self.theta - left).rem_euclid(TAU);
        self.phi = (self.phi - up).clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
    }

    /// Positive `delta_y` (wheel down) moves away from the target.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let scale = if delta_y > 0.0 {
            1.0 / ORBIT_ZOOM_SCALE
        } else {
            ORBIT_ZOOM_SCALE
        };
        self.radius = (self.radius * scale).clamp(self.min_distance, self.max_distance);
    }
}
