pub mod animation;
pub mod arc;
pub mod constants;
pub mod curve;
pub mod error;
pub mod geo;
pub mod mesh;
pub mod orbit;
pub mod params;
pub mod render;
pub mod scene;
pub mod settings;
pub mod viewport;

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static ARC_WGSL: &str = include_str!("../shaders/arc.wgsl");

pub use animation::*;
pub use arc::*;
pub use constants::*;
pub use curve::*;
pub use error::{GeoParseError, GlobeError};
pub use geo::*;
pub use mesh::*;
pub use orbit::*;
pub use params::*;
pub use scene::*;
pub use settings::*;
pub use viewport::*;
