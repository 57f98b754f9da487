// Shared scene/animation tuning constants used by both web and native frontends.

// Planet
pub const PLANET_RADIUS: f32 = 1.0;
pub const PLANET_SEGMENTS: u32 = 60; // both width and height segments

// Markers
pub const MARKER_RADIUS: f32 = 0.03;
pub const MARKER_SEGMENTS: u32 = 20;
pub const MARKER_A_COLOR: [f32; 3] = [1.0, 0.0, 0.0]; // 0xff0000
pub const MARKER_B_COLOR: [f32; 3] = [0.0, 1.0, 0.0]; // 0x00ff00

// Arc path sampling
pub const ARC_SEGMENTS: usize = 20; // samples = ARC_SEGMENTS + 1
pub const ARC_BULGE: f32 = 0.04; // peak radial lift at the midpoint

// Tube sweep
pub const TUBE_TUBULAR_SEGMENTS: usize = 20;
pub const TUBE_RADIUS: f32 = 0.01;
pub const TUBE_RADIAL_SEGMENTS: usize = 8;

// Arc-length lookup resolution for curve reparameterisation
pub const CURVE_ARC_LENGTH_DIVISIONS: usize = 200;

// Animation
pub const TIME_STEP: f32 = 0.05; // per rendered frame, not per second

// Camera
pub const CAMERA_FOV_DEG: f32 = 70.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 10.0;
pub const CAMERA_Z: f32 = 2.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // dolly factor per wheel notch
pub const ORBIT_POLAR_EPS: f32 = 1e-3; // keep away from the poles

// Settings panel
pub const PROGRESS_MIN: f32 = 0.0;
pub const PROGRESS_MAX: f32 = 1.0;
pub const PROGRESS_STEP: f32 = 0.01;

// Clear colour 0xeeeeee, converted to linear for sRGB surfaces
pub const CLEAR_COLOR: [f64; 4] = [0.855, 0.855, 0.855, 1.0];

// Demo endpoints (Kyiv and a point due north of it)
pub const DEFAULT_POINT_A: [f32; 2] = [50.4501, 30.5234];
pub const DEFAULT_POINT_B: [f32; 2] = [60.6345, 30.5528];
