use crate::constants::{CLEAR_COLOR, DEFAULT_POINT_A, DEFAULT_POINT_B};
use crate::error::GeoParseError;
use crate::geo::GeoPoint;

pub const DEFAULT_TEXTURE_URL: &str = "earth.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Red marker, arc start.
    From,
    /// Green marker, arc end.
    To,
}

impl Endpoint {
    /// Query-parameter / argument name.
    pub fn key(self) -> &'static str {
        match self {
            Endpoint::From => "from",
            Endpoint::To => "to",
        }
    }
}

/// Everything the scene is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeParams {
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// URL on web, file path on native.
    pub texture: String,
    pub clear_color: [f64; 4],
}

impl Default for GlobeParams {
    fn default() -> Self {
        Self {
            from: GeoPoint::new(DEFAULT_POINT_A[0], DEFAULT_POINT_A[1]),
            to: GeoPoint::new(DEFAULT_POINT_B[0], DEFAULT_POINT_B[1]),
            texture: DEFAULT_TEXTURE_URL.to_string(),
            clear_color: CLEAR_COLOR,
        }
    }
}

impl GlobeParams {
    /// Replace one endpoint from `"lat,lon"` text; on error the previous
    /// value is kept.
    pub fn set_endpoint(&mut self, which: Endpoint, raw: &str) -> Result<GeoPoint, GeoParseError> {
        let point: GeoPoint = raw.parse()?;
        match which {
            Endpoint::From => self.from = point,
            Endpoint::To => self.to = point,
        }
        Ok(point)
    }
}
