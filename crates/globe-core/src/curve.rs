//! Centripetal Catmull-Rom spline with arc-length reparameterisation.

use crate::constants::CURVE_ARC_LENGTH_DIVISIONS;
use glam::{Quat, Vec3};

/// Tangent/normal/binormal triple per sample, transported along the curve.
#[derive(Clone, Debug, Default)]
pub struct FrenetFrames {
    pub tangents: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub binormals: Vec<Vec3>,
}

/// Open centripetal Catmull-Rom curve through an ordered set of points.
///
/// `point(t)` uses the raw spline parameter; the `*_at(u)` variants take a
/// normalized arc length so that equal steps in `u` cover equal distances.
#[derive(Clone, Debug)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    // cumulative chord lengths at CURVE_ARC_LENGTH_DIVISIONS + 1 samples
    lengths: Vec<f32>,
}

impl CatmullRomCurve {
    /// Needs at least two points; a single point is duplicated.
    pub fn new(mut points: Vec<Vec3>) -> Self {
        match points.len() {
            0 => points.extend([Vec3::ZERO, Vec3::ZERO]),
            1 => points.push(points[0]),
            _ => {}
        }
        let mut curve = Self {
            points,
            lengths: Vec::new(),
        };
        curve.lengths = curve.compute_lengths(CURVE_ARC_LENGTH_DIVISIONS);
        curve
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Total length, approximated by the chord sum used for reparameterisation.
    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at spline parameter `t` in [0, 1].
    pub fn point(&self, t: f32) -> Vec3 {
        let pts = &self.points;
        let l = pts.len();
        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut int_point = p.floor() as usize;
        let mut weight = p - int_point as f32;
        if int_point >= l - 1 {
            int_point = l - 2;
            weight = 1.0;
        }

        let p1 = pts[int_point];
        let p2 = pts[int_point + 1];
        // Ends are extended by reflecting the neighbouring point.
        let p0 = if int_point > 0 {
            pts[int_point - 1]
        } else {
            2.0 * pts[0] - pts[1]
        };
        let p3 = if int_point + 2 < l {
            pts[int_point + 2]
        } else {
            2.0 * pts[l - 1] - pts[l - 2]
        };

        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        let c0 = p1;
        let c1 = t1;
        let c2 = -3.0 * p1 + 3.0 * p2 - 2.0 * t1 - t2;
        let c3 = 2.0 * p1 - 2.0 * p2 + t1 + t2;
        let w = weight;
        c0 + c1 * w + c2 * (w * w) + c3 * (w * w * w)
    }

    /// Point at normalized arc length `u` in [0, 1].
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    /// Unit tangent at normalized arc length `u`, by central difference.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let t = self.u_to_t(u);
        let delta = 1e-4;
        let t1 = (t - delta).max(0.0);
        let t2 = (t + delta).min(1.0);
        (self.point(t2) - self.point(t1)).normalize_or_zero()
    }

    /// Map normalized arc length to spline parameter.
    pub fn u_to_t(&self, u: f32) -> f32 {
        let lengths = &self.lengths;
        let il = lengths.len();
        let total = self.length();
        if il < 2 || total <= 0.0 {
            return u.clamp(0.0, 1.0);
        }
        let target = u.clamp(0.0, 1.0) * total;

        // largest i with lengths[i] <= target
        let i = match lengths.partition_point(|&len| len <= target) {
            0 => 0,
            n => (n - 1).min(il - 2),
        };
        let before = lengths[i];
        if before == target {
            return i as f32 / (il - 1) as f32;
        }
        let segment = lengths[i + 1] - before;
        let fraction = if segment > 0.0 {
            (target - before) / segment
        } else {
            0.0
        };
        (i as f32 + fraction) / (il - 1) as f32
    }

    /// Parallel-transport frames at `segments + 1` evenly spaced arc lengths.
    pub fn frenet_frames(&self, segments: usize) -> FrenetFrames {
        let segments = segments.max(1);
        let tangents: Vec<Vec3> = (0..=segments)
            .map(|i| self.tangent_at(i as f32 / segments as f32))
            .collect();

        let mut normals = Vec::with_capacity(segments + 1);
        let mut binormals = Vec::with_capacity(segments + 1);

        // Seed with the axis least aligned with the first tangent.
        let t0 = tangents[0];
        let abs = t0.abs();
        let mut min = f32::MAX;
        let mut seed = Vec3::X;
        if abs.x <= min {
            min = abs.x;
            seed = Vec3::X;
        }
        if abs.y <= min {
            min = abs.y;
            seed = Vec3::Y;
        }
        if abs.z <= min {
            seed = Vec3::Z;
        }
        let side = t0.cross(seed).normalize_or_zero();
        normals.push(t0.cross(side));
        binormals.push(t0.cross(normals[0]));

        for i in 1..=segments {
            let mut normal = normals[i - 1];
            let axis = tangents[i - 1].cross(tangents[i]);
            if axis.length() > f32::EPSILON {
                let axis = axis.normalize();
                let theta = tangents[i - 1].dot(tangents[i]).clamp(-1.0, 1.0).acos();
                normal = Quat::from_axis_angle(axis, theta) * normal;
            }
            normals.push(normal);
            binormals.push(tangents[i].cross(normal));
        }

        FrenetFrames {
            tangents,
            normals,
            binormals,
        }
    }

    fn compute_lengths(&self, divisions: usize) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut sum = 0.0;
        let mut last = self.point(0.0);
        lengths.push(0.0);
        for d in 1..=divisions {
            let current = self.point(d as f32 / divisions as f32);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }
        lengths
    }
}
