use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{LatLng, RouteOption};
use crate::error::{invalid_input_error, Error};

/// What a marker stands for. The rendering color follows from the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    CrimeHotspot,
    PoorLighting,
    CommunityReport,
    RouteStart,
    RouteEnd,
}

impl MarkerCategory {
    pub fn color(self) -> &'static str {
        match self {
            Self::CrimeHotspot | Self::RouteEnd => "#EF4444",
            Self::PoorLighting => "#F59E0B",
            Self::CommunityReport => "#8B5CF6",
            Self::RouteStart => "#10B981",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::CrimeHotspot => "Crime Hotspot",
            Self::PoorLighting => "Poor Lighting",
            Self::CommunityReport => "Community Report",
            Self::RouteStart => "Start:",
            Self::RouteEnd => "Destination:",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub category: MarkerCategory,
    pub color: String,
    pub popup: String,
}

impl Marker {
    pub fn new(category: MarkerCategory, at: LatLng, detail: &str) -> Self {
        let popup = match category {
            MarkerCategory::RouteStart | MarkerCategory::RouteEnd => {
                format!("<strong>{}</strong> {}", category.title(), detail)
            }
            _ => format!("<strong>{}</strong><br/>{}", category.title(), detail),
        };

        Self {
            lat: at.lat,
            lng: at.lng,
            category,
            color: category.color().into(),
            popup,
        }
    }
}

/// Start and destination markers for a generated route.
pub fn route_markers(route: &RouteOption) -> Vec<Marker> {
    let mut markers = vec![];

    if let Some(first) = route.coordinates.first() {
        markers.push(Marker::new(
            MarkerCategory::RouteStart,
            (*first).into(),
            &route.start_location,
        ));
    }

    if let Some(last) = route.coordinates.last() {
        markers.push(Marker::new(
            MarkerCategory::RouteEnd,
            (*last).into(),
            &route.end_location,
        ));
    }

    markers
}

/// Which overlay layers are switched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layers {
    pub crime: bool,
    pub lighting: bool,
    pub reports: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            crime: true,
            lighting: true,
            reports: true,
        }
    }
}

impl FromStr for Layers {
    type Err = Error;

    /// Comma separated layer names, e.g. `crime,reports`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut layers = Self {
            crime: false,
            lighting: false,
            reports: false,
        };

        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name {
                "crime" => layers.crime = true,
                "lighting" => layers.lighting = true,
                "reports" => layers.reports = true,
                other => return Err(invalid_input_error(format!("unknown layer {:?}", other))),
            }
        }

        Ok(layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_category() {
        let marker = Marker::new(
            MarkerCategory::PoorLighting,
            LatLng::new(28.6298, 77.2021),
            "Street lights not functioning",
        );

        assert_eq!(marker.color, "#F59E0B");
        assert_eq!(
            marker.popup,
            "<strong>Poor Lighting</strong><br/>Street lights not functioning"
        );
    }

    #[test]
    fn parses_layers() {
        let layers: Layers = "crime, reports".parse().unwrap();

        assert!(layers.crime);
        assert!(!layers.lighting);
        assert!(layers.reports);

        assert!("crime,crowd".parse::<Layers>().is_err());
    }
}
