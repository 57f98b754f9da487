use super::helpers::{self, DEPTH_FORMAT, SAMPLE_COUNT};

/// Offscreen targets the scene is drawn into before reaching the surface.
///
/// - `color_*` is the multisampled colour buffer, resolved into the surface
///   texture at the end of the pass.
/// - `depth_*` matches it in size and sample count.
///
/// Both must be recreated whenever the surface changes size.
pub(crate) struct RenderTargets {
    pub(crate) color_tex: wgpu::Texture,
    pub(crate) color_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (color_tex, color_view) = helpers::create_target_texture(
            device,
            "msaa_color",
            width,
            height,
            format,
            SAMPLE_COUNT,
        );
        let (depth_tex, depth_view) = helpers::create_target_texture(
            device,
            "depth",
            width,
            height,
            DEPTH_FORMAT,
            SAMPLE_COUNT,
        );
        Self {
            color_tex,
            color_view,
            depth_tex,
            depth_view,
            format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, self.format, width, height);
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        let s = self.color_tex.size();
        debug_assert_eq!(s, self.depth_tex.size());
        (s.width, s.height)
    }
}
