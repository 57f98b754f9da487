use thiserror::Error;

/// Failure to read a `"lat,lon"` pair.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoParseError {
    #[error("expected \"lat,lon\", got {0:?}")]
    MissingComma(String),
    #[error("invalid {field} {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
}

#[derive(Debug, Error)]
pub enum GlobeError {
    #[error(transparent)]
    GeoParse(#[from] GeoParseError),
    #[error("texture decode failed: {0}")]
    TextureDecode(#[from] image::ImageError),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
