use super::helpers::{make_mesh_pipeline, uniform_layout_entry};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    // x: 1.0 to sample the map, 0.0 for flat colour
    pub(crate) params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ArcUniforms {
    pub(crate) time: f32,
    pub(crate) _pad: [f32; 3],
    pub(crate) resolution: [f32; 4],
}

pub(crate) struct ScenePipelines {
    pub(crate) camera_bgl: wgpu::BindGroupLayout,
    pub(crate) object_bgl: wgpu::BindGroupLayout, // uniform+map+sampler
    pub(crate) arc_bgl: wgpu::BindGroupLayout,
    pub(crate) globe_pipeline: wgpu::RenderPipeline,
    pub(crate) arc_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_scene_pipelines(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> ScenePipelines {
    let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("camera_bgl"),
        entries: &[uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("object_bgl"),
        entries: &[
            uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let arc_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("arc_bgl"),
        entries: &[uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
    });

    let globe_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("globe_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::GLOBE_WGSL.into()),
    });
    let arc_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("arc_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::ARC_WGSL.into()),
    });

    let globe_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("globe_pl"),
        bind_group_layouts: &[&camera_bgl, &object_bgl],
        push_constant_ranges: &[],
    });
    let arc_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("arc_pl"),
        bind_group_layouts: &[&camera_bgl, &arc_bgl],
        push_constant_ranges: &[],
    });

    let globe_pipeline = make_mesh_pipeline(
        device,
        "globe_pipeline",
        &globe_pl,
        &globe_shader,
        color_format,
        Some(wgpu::Face::Back),
    );
    // The tube is open ended, so both faces are visible.
    let arc_pipeline = make_mesh_pipeline(
        device,
        "arc_pipeline",
        &arc_pl,
        &arc_shader,
        color_format,
        None,
    );

    ScenePipelines {
        camera_bgl,
        object_bgl,
        arc_bgl,
        globe_pipeline,
        arc_pipeline,
    }
}
