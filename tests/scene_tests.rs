// Host-side tests for scene assembly from parameters.

use globe_core::*;
use glam::{Vec3, Vec4};

#[test]
fn demo_scene_has_planet_two_markers_and_arc() {
    let scene = Scene::assemble(&GlobeParams::default());
    assert_eq!(scene.objects().len(), 4);
    assert!(scene.planet().is_some());
    assert_eq!(scene.markers().count(), 2);
    assert!(scene.arc().is_some());
}

#[test]
fn planet_is_textured_unit_sphere_at_origin() {
    let scene = Scene::assemble(&GlobeParams::default());
    let planet = scene.planet().unwrap();
    assert_eq!(planet.material, Material::Map);
    assert_eq!(planet.position, Vec3::ZERO);
    assert_eq!(planet.mesh.vertices.len(), 61 * 61);
}

#[test]
fn markers_are_red_then_green_at_their_endpoints() {
    let params = GlobeParams::default();
    let scene = Scene::assemble(&params);
    let markers: Vec<_> = scene.markers().collect();
    assert_eq!(
        markers[0].material,
        Material::Basic {
            color: MARKER_A_COLOR
        }
    );
    assert_eq!(
        markers[1].material,
        Material::Basic {
            color: MARKER_B_COLOR
        }
    );
    assert_eq!(markers[0].position, params.from.to_cartesian());
    // marker B uses point B's own longitude
    assert_eq!(markers[1].position, params.to.to_cartesian());
}

#[test]
fn arc_runs_between_the_markers() {
    let params = GlobeParams {
        from: GeoPoint::new(0.0, 0.0),
        to: GeoPoint::new(10.0, 40.0),
        ..GlobeParams::default()
    };
    let scene = Scene::assemble(&params);
    let arc = scene.arc().unwrap();
    assert_eq!(arc.material, Material::Arc);
    assert_eq!(arc.mesh.vertices.len(), 189);
    assert_eq!(arc.mesh.indices.len(), 960);

    let curve = arc_curve(params.from.to_cartesian(), params.to.to_cartesian());
    assert!((curve.point_at(0.0) - params.from.to_cartesian()).length() < 1e-4);
    assert!((curve.point_at(1.0) - params.to.to_cartesian()).length() < 1e-4);
}

#[test]
fn arc_material_tracks_time_and_resolution() {
    let mut scene = Scene::assemble(&GlobeParams::default());
    assert_eq!(scene.arc_material, ArcMaterial::default());
    scene.set_time(1.25);
    scene.set_resolution(1280, 720);
    assert_eq!(scene.arc_material.time, 1.25);
    assert_eq!(
        scene.arc_material.resolution,
        Vec4::new(1280.0, 720.0, 1.0, 1.0)
    );
}

#[test]
fn empty_scene_has_no_objects() {
    let scene = Scene::new();
    assert!(scene.objects().is_empty());
    assert!(scene.planet().is_none());
    assert!(scene.arc().is_none());
}
