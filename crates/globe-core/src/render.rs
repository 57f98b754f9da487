//! WebGPU scene renderer shared by the web and native frontends.

use crate::error::{GlobeError, Result};
use crate::mesh::MeshData;
use crate::scene::{ArcMaterial, Material, Scene};
use crate::viewport::Camera;
use glam::Mat4;
use wgpu::util::DeviceExt;

mod helpers;
mod pipelines;
mod targets;
mod texture;

use pipelines::{
    create_scene_pipelines, ArcUniforms, CameraUniforms, ObjectUniforms, ScenePipelines,
};
use targets::RenderTargets;
use texture::MapTexture;

pub use texture::{decode_map, fit_map};

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// A planet or marker: mesh plus its per-object uniforms and map binding.
struct GlobeDrawable {
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct ArcDrawable {
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipelines: ScenePipelines,
    targets: RenderTargets,
    map: MapTexture,

    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    globe_drawables: Vec<GlobeDrawable>,
    arc_drawable: Option<ArcDrawable>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// Acquire an adapter and device for `target` and upload `scene`.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
        scene: &Scene,
        clear_color: [f64; 4],
    ) -> Result<Self> {
        let width = width.max(1);
        let height = height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GlobeError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or(GlobeError::NoAdapter)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] adapter={} format={:?} size={}x{}",
            adapter.get_info().name,
            format,
            width,
            height
        );

        let pipelines = create_scene_pipelines(&device, format);
        let targets = RenderTargets::new(&device, format, width, height);
        let map = MapTexture::placeholder(&device, &queue);

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &pipelines.camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let mut state = Self {
            surface,
            device,
            queue,
            config,
            pipelines,
            targets,
            map,
            camera_buffer,
            camera_bind_group,
            globe_drawables: Vec::new(),
            arc_drawable: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: clear_color[0],
                g: clear_color[1],
                b: clear_color[2],
                a: clear_color[3],
            },
        };
        state.upload_scene(scene);
        Ok(state)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Size of the offscreen colour/depth targets; tracks the surface.
    pub fn target_size(&self) -> (u32, u32) {
        self.targets.size()
    }

    fn upload_scene(&mut self, scene: &Scene) {
        self.globe_drawables.clear();
        self.arc_drawable = None;
        for (i, obj) in scene.objects().iter().enumerate() {
            let label = format!("{:?}_{}", obj.kind, i);
            let mesh = GpuMesh::upload(&self.device, &label, &obj.mesh);
            match obj.material {
                Material::Map | Material::Basic { .. } => {
                    let (color, use_map) = match obj.material {
                        Material::Basic { color } => ([color[0], color[1], color[2], 1.0], 0.0),
                        _ => ([1.0; 4], 1.0),
                    };
                    let uniforms = ObjectUniforms {
                        model: Mat4::from_translation(obj.position).to_cols_array_2d(),
                        color,
                        params: [use_map, 0.0, 0.0, 0.0],
                    };
                    let uniform_buffer =
                        self.device
                            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                                label: Some("object_uniforms"),
                                contents: bytemuck::bytes_of(&uniforms),
                                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                            });
                    let bind_group = self.object_bind_group(&uniform_buffer);
                    self.globe_drawables.push(GlobeDrawable {
                        mesh,
                        uniform_buffer,
                        bind_group,
                    });
                }
                Material::Arc => {
                    let uniform_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                        label: Some("arc_uniforms"),
                        size: std::mem::size_of::<ArcUniforms>() as u64,
                        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                        mapped_at_creation: false,
                    });
                    let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                        label: Some("arc_bg"),
                        layout: &self.pipelines.arc_bgl,
                        entries: &[wgpu::BindGroupEntry {
                            binding: 0,
                            resource: uniform_buffer.as_entire_binding(),
                        }],
                    });
                    self.arc_drawable = Some(ArcDrawable {
                        mesh,
                        uniform_buffer,
                        bind_group,
                    });
                }
            }
        }
    }

    fn object_bind_group(&self, uniform_buffer: &wgpu::Buffer) -> wgpu::BindGroup {
        self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_bg"),
            layout: &self.pipelines.object_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&self.map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.map.sampler),
                },
            ],
        })
    }

    /// Decode and bind a world map, replacing the placeholder.
    pub fn set_map_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let rgba = decode_map(bytes)?;
        self.set_map_image(&rgba);
        Ok(())
    }

    pub fn set_map_image(&mut self, rgba: &image::RgbaImage) {
        self.map = MapTexture::from_image(&self.device, &self.queue, rgba, "world_map");
        let rebuilt: Vec<wgpu::BindGroup> = self
            .globe_drawables
            .iter()
            .map(|d| self.object_bind_group(&d.uniform_buffer))
            .collect();
        for (d, bg) in self.globe_drawables.iter_mut().zip(rebuilt) {
            d.bind_group = bg;
        }
        log::info!("[texture] map bound {}x{}", self.map.size.0, self.map.size.1);
    }

    /// Reconfigure the surface and offscreen targets when the size changed.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure at the current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw the scene once through `camera`.
    pub fn render(
        &mut self,
        camera: &Camera,
        arc: &ArcMaterial,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&CameraUniforms {
                view_proj: camera.view_proj().to_cols_array_2d(),
            }),
        );
        if let Some(a) = &self.arc_drawable {
            self.queue.write_buffer(
                &a.uniform_buffer,
                0,
                bytemuck::bytes_of(&ArcUniforms {
                    time: arc.time,
                    _pad: [0.0; 3],
                    resolution: arc.resolution.to_array(),
                }),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.color_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_bind_group(0, &self.camera_bind_group, &[]);
            rpass.set_pipeline(&self.pipelines.globe_pipeline);
            for d in &self.globe_drawables {
                rpass.set_bind_group(1, &d.bind_group, &[]);
                d.mesh.draw(&mut rpass);
            }
            if let Some(a) = &self.arc_drawable {
                rpass.set_pipeline(&self.pipelines.arc_pipeline);
                rpass.set_bind_group(1, &a.bind_group, &[]);
                a.mesh.draw(&mut rpass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
