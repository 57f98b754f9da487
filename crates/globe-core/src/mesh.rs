//! CPU-side mesh generation: UV spheres and swept tubes.

use crate::curve::CatmullRomCurve;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Interleaved vertex consumed by both scene pipelines.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Latitude/longitude sphere centred on the origin with +Y as the pole axis.
///
/// `uv` is (0, 0) at the top-left of an equirectangular image, so a world
/// map uploaded row-major samples the right way up. Pole rows emit a single
/// triangle per segment.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    let mut indices = Vec::new();

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        // Pole texels are centred between their two neighbours.
        let u_offset = if iy == 0 {
            0.5 / ws as f32
        } else if iy == hs {
            -0.5 / ws as f32
        } else {
            0.0
        };
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * TAU;
            let position = Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            );
            vertices.push(Vertex {
                position: position.to_array(),
                normal: position.normalize_or_zero().to_array(),
                uv: [u + u_offset, v],
            });
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Sweep a circular cross-section along `curve`. Open ended, no caps.
///
/// Produces `(tubular + 1) * (radial + 1)` vertices; the seam column is
/// duplicated so `uv.y` runs cleanly from 0 to 1 around the tube.
pub fn tube_mesh(
    curve: &CatmullRomCurve,
    tubular_segments: usize,
    radius: f32,
    radial_segments: usize,
) -> MeshData {
    let tubular = tubular_segments.max(1);
    let radial = radial_segments.max(3);
    let frames = curve.frenet_frames(tubular);

    let mut vertices = Vec::with_capacity((tubular + 1) * (radial + 1));
    for i in 0..=tubular {
        let center = curve.point_at(i as f32 / tubular as f32);
        let n = frames.normals[i];
        let b = frames.binormals[i];
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let sin = v.sin();
            let cos = -v.cos();
            let normal = (n * cos + b * sin).normalize_or_zero();
            vertices.push(Vertex {
                position: (center + normal * radius).to_array(),
                normal: normal.to_array(),
                uv: [i as f32 / tubular as f32, j as f32 / radial as f32],
            });
        }
    }

    let stride = (radial + 1) as u32;
    let mut indices = Vec::with_capacity(tubular * radial * 6);
    for j in 1..=tubular as u32 {
        for i in 1..=radial as u32 {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData { vertices, indices }
}
