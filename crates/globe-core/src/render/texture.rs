use crate::error::Result;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// The world map bound to the planet (and, unused, to the markers).
pub(crate) struct MapTexture {
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) size: (u32, u32),
}

/// Decode a JPEG/PNG world map into tightly packed RGBA8.
pub fn decode_map(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}

/// Downscale `rgba` so neither side exceeds `max_dim`, keeping the aspect
/// ratio. Returns `None` when the image already fits.
pub fn fit_map(rgba: &RgbaImage, max_dim: u32) -> Option<RgbaImage> {
    let (width, height) = rgba.dimensions();
    let longest = width.max(height);
    if longest <= max_dim || max_dim == 0 {
        return None;
    }
    let scale = max_dim as f64 / longest as f64;
    let fit = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_dim);
    let (w, h) = (fit(width), fit(height));
    log::info!("[texture] downscaling {}x{} to {}x{}", width, height, w, h);
    Some(imageops::resize(rgba, w, h, FilterType::Triangle))
}

impl MapTexture {
    /// 1x1 white texel used until the real map arrives.
    pub(crate) fn placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let white = RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        Self::from_image(device, queue, &white, "map_placeholder")
    }

    pub(crate) fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &RgbaImage,
        label: &str,
    ) -> Self {
        let fitted = fit_map(rgba, device.limits().max_texture_dimension_2d);
        let rgba = fitted.as_ref().unwrap_or(rgba);
        let (width, height) = rgba.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Repeat horizontally so the date-line seam wraps.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("map_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        Self {
            view,
            sampler,
            size: (width, height),
        }
    }
}
