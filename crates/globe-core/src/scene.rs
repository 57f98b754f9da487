//! Scene graph for the globe: planet, two markers and the arc tube.

use crate::arc::build_arc;
use crate::constants::{
    MARKER_A_COLOR, MARKER_B_COLOR, MARKER_RADIUS, MARKER_SEGMENTS, PLANET_RADIUS,
    PLANET_SEGMENTS,
};
use crate::mesh::{uv_sphere, MeshData};
use crate::params::GlobeParams;
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Unlit, sampled from the world map.
    Map,
    /// Unlit, flat colour.
    Basic { color: [f32; 3] },
    /// Animated arc shader driven by [`ArcMaterial`].
    Arc,
}

/// Uniform values of the arc shader.
///
/// `resolution` is reserved: it is kept in sync with the surface size but
/// the fragment stage does not read it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcMaterial {
    pub time: f32,
    pub resolution: Vec4,
}

impl Default for ArcMaterial {
    fn default() -> Self {
        Self {
            time: 0.0,
            resolution: Vec4::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Planet,
    Marker,
    Arc,
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub mesh: MeshData,
    pub material: Material,
    pub position: Vec3,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    pub arc_material: ArcMaterial,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full demo scene from `params`.
    pub fn assemble(params: &GlobeParams) -> Self {
        let from = params.from.to_cartesian();
        let to = params.to.to_cartesian();

        let mut scene = Self::new();
        scene.add(SceneObject {
            kind: ObjectKind::Planet,
            mesh: uv_sphere(PLANET_RADIUS, PLANET_SEGMENTS, PLANET_SEGMENTS),
            material: Material::Map,
            position: Vec3::ZERO,
        });
        let marker = uv_sphere(MARKER_RADIUS, MARKER_SEGMENTS, MARKER_SEGMENTS);
        scene.add(SceneObject {
            kind: ObjectKind::Marker,
            mesh: marker.clone(),
            material: Material::Basic {
                color: MARKER_A_COLOR,
            },
            position: from,
        });
        scene.add(SceneObject {
            kind: ObjectKind::Marker,
            mesh: marker,
            material: Material::Basic {
                color: MARKER_B_COLOR,
            },
            position: to,
        });
        scene.add(SceneObject {
            kind: ObjectKind::Arc,
            mesh: build_arc(from, to),
            material: Material::Arc,
            position: Vec3::ZERO,
        });

        log::info!(
            "[scene] from=({:.3},{:.3},{:.3}) to=({:.3},{:.3},{:.3}) objects={}",
            from.x,
            from.y,
            from.z,
            to.x,
            to.y,
            to.z,
            scene.objects.len()
        );
        scene
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn planet(&self) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.kind == ObjectKind::Planet)
    }

    pub fn markers(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.kind == ObjectKind::Marker)
    }

    pub fn arc(&self) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.kind == ObjectKind::Arc)
    }

    /// Write the animation time into the arc material.
    pub fn set_time(&mut self, time: f32) {
        self.arc_material.time = time;
    }

    /// Keep the reserved `resolution` uniform in step with the surface.
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        let (w, h) = (width as f32, height as f32);
        self.arc_material.resolution = Vec4::new(w, h, 1.0, 1.0);
    }
}
