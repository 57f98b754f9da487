// Host-side tests for the arc path, the spline and the tube mesh.

use globe_core::*;
use glam::Vec3;

fn kyiv_pair() -> (Vec3, Vec3) {
    let p = GlobeParams::default();
    (p.from.to_cartesian(), p.to.to_cartesian())
}

#[test]
fn bulge_is_one_at_the_ends_and_peaks_in_the_middle() {
    assert_eq!(bulge_factor(0), 1.0);
    assert_eq!(bulge_factor(ARC_SEGMENTS), 1.0);
    assert!((bulge_factor(10) - 1.04).abs() < 1e-6);
    for i in 1..ARC_SEGMENTS {
        let f = bulge_factor(i);
        assert!(f > 1.0 && f <= bulge_factor(10) + 1e-6, "i={i} f={f}");
    }
    // symmetric around the midpoint
    assert!((bulge_factor(3) - bulge_factor(17)).abs() < 1e-6);
}

#[test]
fn arc_path_has_21_points_and_keeps_endpoints() {
    let (a, b) = kyiv_pair();
    let path = arc_path(a, b);
    assert_eq!(path.len(), ARC_SEGMENTS + 1);
    assert!((path[0] - a).length() < 1e-5);
    assert!((path[ARC_SEGMENTS] - b).length() < 1e-5);
}

#[test]
fn arc_path_radius_follows_bulge() {
    let a = to_cartesian(0.0, 0.0);
    let b = to_cartesian(0.0, 60.0);
    let path = arc_path(a, b);
    for (i, p) in path.iter().enumerate() {
        assert!((p.length() - bulge_factor(i)).abs() < 1e-5, "i={i}");
    }
}

#[test]
fn identical_endpoints_still_yield_21_points() {
    let a = to_cartesian(10.0, 10.0);
    let path = arc_path(a, a);
    assert_eq!(path.len(), 21);
    assert!(path.iter().all(|p| p.is_finite()));
}

#[test]
fn antipodal_endpoints_stay_above_the_surface() {
    let a = to_cartesian(0.0, 0.0);
    let b = to_cartesian(0.0, 180.0);
    let path = arc_path(a, b);
    assert_eq!(path.len(), 21);
    assert!(path.iter().all(|p| p.is_finite()));
    assert!(path.iter().all(|p| p.length() >= 1.0 - 1e-6));
    assert!((path[0] - a).length() < 1e-5);
    assert!((path[20] - b).length() < 1e-5);

    let curve = arc_curve(a, b);
    let lowest = (0..=200)
        .map(|i| curve.point_at(i as f32 / 200.0).length())
        .fold(f32::INFINITY, f32::min);
    assert!(lowest > 0.99, "curve dips to {lowest}");

    let tube = build_arc(a, b);
    let deepest = tube
        .vertices
        .iter()
        .map(|v| Vec3::from(v.position).length())
        .fold(f32::INFINITY, f32::min);
    assert!(deepest > 0.98, "tube dips to {deepest}");
}

#[test]
fn near_antipodal_pole_pair_stays_above_the_surface() {
    let path = arc_path(to_cartesian(90.0, 0.0), to_cartesian(-90.0, 0.0));
    assert!(path.iter().all(|p| p.length() >= 1.0 - 1e-6));
}

#[test]
fn curve_passes_through_its_end_points() {
    let (a, b) = kyiv_pair();
    let curve = arc_curve(a, b);
    assert_eq!(curve.points().len(), 21);
    assert!((curve.point_at(0.0) - curve.points()[0]).length() < 1e-4);
    assert!((curve.point_at(1.0) - curve.points()[20]).length() < 1e-4);
    assert!(curve.length() > (b - a).length());
}

#[test]
fn arc_length_parameter_is_monotonic() {
    let (a, b) = kyiv_pair();
    let curve = arc_curve(a, b);
    let mut last = -1.0;
    for k in 0..=10 {
        let t = curve.u_to_t(k as f32 / 10.0);
        assert!(t >= last, "k={k}");
        last = t;
    }
    assert!((curve.u_to_t(1.0) - 1.0).abs() < 1e-4);
}

#[test]
fn frenet_frames_are_orthonormal() {
    let (a, b) = kyiv_pair();
    let curve = arc_curve(a, b);
    let frames = curve.frenet_frames(TUBE_TUBULAR_SEGMENTS);
    assert_eq!(frames.tangents.len(), TUBE_TUBULAR_SEGMENTS + 1);
    for i in 0..=TUBE_TUBULAR_SEGMENTS {
        let (t, n, bn) = (frames.tangents[i], frames.normals[i], frames.binormals[i]);
        assert!((t.length() - 1.0).abs() < 1e-3);
        assert!((n.length() - 1.0).abs() < 1e-3);
        assert!(t.dot(n).abs() < 1e-3, "i={i}");
        assert!(t.dot(bn).abs() < 1e-3, "i={i}");
    }
}

#[test]
fn tube_mesh_counts() {
    let (a, b) = kyiv_pair();
    let mesh = build_arc(a, b);
    assert_eq!(mesh.vertices.len(), 21 * 9);
    assert_eq!(mesh.indices.len(), 20 * 8 * 6);
    assert_eq!(mesh.triangle_count(), 320);
    let max = *mesh.indices.iter().max().unwrap() as usize;
    assert!(max < mesh.vertices.len());
}

#[test]
fn tube_vertices_sit_at_tube_radius_from_the_curve() {
    let (a, b) = kyiv_pair();
    let curve = arc_curve(a, b);
    let mesh = build_arc(a, b);
    // first ring surrounds the start of the curve
    let center = curve.point_at(0.0);
    for v in &mesh.vertices[..9] {
        let d = (Vec3::from(v.position) - center).length();
        assert!((d - TUBE_RADIUS).abs() < 1e-4, "d={d}");
    }
}
