//! Bulging arc between two points on the globe.

use crate::constants::{
    ARC_BULGE, ARC_SEGMENTS, TUBE_RADIAL_SEGMENTS, TUBE_RADIUS, TUBE_TUBULAR_SEGMENTS,
};
use crate::curve::CatmullRomCurve;
use crate::mesh::{tube_mesh, MeshData};
use glam::Vec3;
use std::f32::consts::PI;

/// Radial scale for sample `i` of `ARC_SEGMENTS + 1`.
///
/// Exactly 1 at both ends and `1 + ARC_BULGE` at the midpoint.
#[inline]
pub fn bulge_factor(i: usize) -> f32 {
    if i == 0 || i >= ARC_SEGMENTS {
        return 1.0;
    }
    1.0 + ARC_BULGE * (PI * i as f32 / ARC_SEGMENTS as f32).sin()
}

/// Below this cosine the endpoints count as antipodal.
const ANTIPODAL_DOT: f32 = -0.9999;

/// Sample the lifted path from `start` to `end`.
///
/// Each sample is the chord interpolation pushed back onto the unit sphere
/// and then lifted by [`bulge_factor`]. Always `ARC_SEGMENTS + 1` points.
///
/// Antipodal endpoints have no unique great circle and their chord runs
/// through the origin, so the path is routed through a waypoint a quarter
/// turn from `start` instead.
pub fn arc_path(start: Vec3, end: Vec3) -> Vec<Vec3> {
    let waypoint = match (start.try_normalize(), end.try_normalize()) {
        (Some(a), Some(b)) if a.dot(b) < ANTIPODAL_DOT => Some(a.any_orthonormal_vector()),
        _ => None,
    };
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = i as f32 / ARC_SEGMENTS as f32;
            let chord = match waypoint {
                Some(mid) if t <= 0.5 => start.lerp(mid, t * 2.0),
                Some(mid) => mid.lerp(end, t * 2.0 - 1.0),
                None => start.lerp(end, t),
            };
            chord.try_normalize().unwrap_or(Vec3::Z) * bulge_factor(i)
        })
        .collect()
}

/// The smooth curve the tube follows.
pub fn arc_curve(start: Vec3, end: Vec3) -> CatmullRomCurve {
    CatmullRomCurve::new(arc_path(start, end))
}

/// Tube mesh following the arc, ready for the arc material.
pub fn build_arc(start: Vec3, end: Vec3) -> MeshData {
    tube_mesh(
        &arc_curve(start, end),
        TUBE_TUBULAR_SEGMENTS,
        TUBE_RADIUS,
        TUBE_RADIAL_SEGMENTS,
    )
}
