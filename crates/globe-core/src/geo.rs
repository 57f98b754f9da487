//! Geographic to Cartesian mapping on the unit sphere.

use crate::error::GeoParseError;
use glam::Vec3;
use std::str::FromStr;

/// A latitude/longitude pair in degrees.
///
/// Values are not range-checked: anything outside [-90, 90] / [-180, 180]
/// still maps to a point on the sphere through the trigonometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f32,
    pub longitude: f32,
}

impl GeoPoint {
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn to_cartesian(self) -> Vec3 {
        to_cartesian(self.latitude, self.longitude)
    }
}

/// Map degrees to a unit-sphere position.
///
/// The polar angle is measured from +Z and the azimuth is offset by 180°,
/// so (0, 0) lands on +X.
#[inline]
pub fn to_cartesian(lat: f32, lon: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    Vec3::new(
        -(phi.sin() * theta.cos()),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

impl FromStr for GeoPoint {
    type Err = GeoParseError;

    /// Parse `"lat,lon"`, e.g. `"50.45, 30.52"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| GeoParseError::MissingComma(s.to_string()))?;
        Ok(Self::new(
            parse_degrees("latitude", lat)?,
            parse_degrees("longitude", lon)?,
        ))
    }
}

fn parse_degrees(field: &'static str, raw: &str) -> Result<f32, GeoParseError> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| GeoParseError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        })?;
    if !value.is_finite() {
        return Err(GeoParseError::NotFinite { field });
    }
    Ok(value)
}
