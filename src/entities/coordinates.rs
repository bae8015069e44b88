use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in decimal degrees.
///
/// Serialized in GeoJSON order as `[lng, lat]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self {
            lng: self.lng + d_lng,
            lat: self.lat + d_lat,
        }
    }

    /// Linear interpolation towards `other`, `t` in `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            lng: self.lng + (other.lng - self.lng) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }

    /// Planar distance in degrees, used only to scale path curvature.
    pub fn span_to(self, other: Self) -> f64 {
        (other.lng - self.lng).hypot(other.lat - self.lat)
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(c: Coordinates) -> Self {
        (c.lng, c.lat)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(c: Coordinates) -> Self {
        Point::new(c.lng, c.lat)
    }
}

impl From<LatLng> for Coordinates {
    fn from(p: LatLng) -> Self {
        Self {
            lng: p.lng,
            lat: p.lat,
        }
    }
}

/// Object-form position used by map overlays, `{ "lat": .., "lng": .. }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for LatLng {
    fn from(c: Coordinates) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lng_lat_array() {
        let c = Coordinates::new(77.209, 28.6139);

        assert_eq!(serde_json::to_string(&c).unwrap(), "[77.209,28.6139]");

        let back: Coordinates = serde_json::from_str("[72.8777,19.076]").unwrap();
        assert_eq!(back, Coordinates::new(72.8777, 19.076));
    }

    #[test]
    fn lerp_hits_both_ends() {
        let a = Coordinates::new(77.0, 28.0);
        let b = Coordinates::new(78.0, 29.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Coordinates::new(77.5, 28.5));
    }

    #[test]
    fn point_uses_lng_as_x() {
        let p: Point<f64> = Coordinates::new(77.2, 28.6).into();

        assert_eq!(p.x(), 77.2);
        assert_eq!(p.y(), 28.6);
    }
}
