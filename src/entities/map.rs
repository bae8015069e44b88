use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, LatLng, Layers, Marker, MarkerCategory};

/// A reported incident at a point: a crime hotspot or a community report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DarkSpot {
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteOverlay {
    pub coordinates: Vec<Coordinates>,
    pub color: String,
    pub width: u8,
}

/// Per-city overlay dataset for the live map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityMap {
    pub city_center: LatLng,
    pub crime_hotspots: Vec<Incident>,
    pub poor_lighting: Vec<DarkSpot>,
    pub community_reports: Vec<Incident>,
    pub safe_routes: Vec<RouteOverlay>,
}

impl CityMap {
    pub fn markers(&self, layers: Layers) -> Vec<Marker> {
        let mut markers = vec![];

        if layers.crime {
            markers.extend(self.crime_hotspots.iter().map(|spot| {
                Marker::new(
                    MarkerCategory::CrimeHotspot,
                    LatLng::new(spot.lat, spot.lng),
                    &spot.description,
                )
            }));
        }

        if layers.lighting {
            markers.extend(self.poor_lighting.iter().map(|spot| {
                Marker::new(
                    MarkerCategory::PoorLighting,
                    LatLng::new(spot.lat, spot.lng),
                    &spot.description,
                )
            }));
        }

        if layers.reports {
            markers.extend(self.community_reports.iter().map(|report| {
                let detail = format!("{}: {}", report.kind, report.description);
                Marker::new(
                    MarkerCategory::CommunityReport,
                    LatLng::new(report.lat, report.lng),
                    &detail,
                )
            }));
        }

        markers
    }
}
