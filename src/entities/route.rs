use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Safe,
    Regular,
}

/// Static presentation data attached to a route of a given kind.
#[derive(Debug)]
pub struct Presentation {
    pub label: &'static str,
    pub safety_score: u8,
    pub color: &'static str,
    pub width: u8,
    pub lighting: &'static str,
    pub notes: &'static [&'static str],
    pub recommended: bool,
}

const SAFE: Presentation = Presentation {
    label: "Safest Route",
    safety_score: 94,
    color: "#10B981",
    width: 4,
    lighting: "Good",
    notes: &[
        "Well Lit",
        "High Foot Traffic",
        "Police Presence",
        "Low Crime Area",
    ],
    recommended: true,
};

const REGULAR: Presentation = Presentation {
    label: "Regular Route",
    safety_score: 62,
    color: "#EF4444",
    width: 3,
    lighting: "Poor",
    notes: &["Poor Lighting", "Isolated Areas", "Recent Crime Reports"],
    recommended: false,
};

impl RouteKind {
    /// Walking pace. The safe route is advised at a slower, more cautious pace.
    pub fn minutes_per_km(self) -> f64 {
        match self {
            Self::Safe => 12.0,
            Self::Regular => 10.0,
        }
    }

    pub fn presentation(self) -> &'static Presentation {
        match self {
            Self::Safe => &SAFE,
            Self::Regular => &REGULAR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteEstimate {
    pub coordinates: Vec<Coordinates>,
    pub distance_km: f64,
    pub eta_minutes: u32,
    pub kind: RouteKind,
}

/// What a route's safety labels describe: reassurances or warnings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Assessment {
    #[serde(rename = "safetyFactors")]
    Factors(Vec<String>),
    #[serde(rename = "safetyIssues")]
    Issues(Vec<String>),
}

/// One route of a comparison, shaped for the map client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    #[serde(rename = "type")]
    pub label: String,
    pub route_type: RouteKind,
    pub start_location: String,
    pub end_location: String,
    pub coordinates: Vec<Coordinates>,
    pub distance: String,
    pub time: String,
    pub safety_score: u8,
    pub color: String,
    pub width: u8,
    pub lighting: String,
    #[serde(flatten)]
    pub assessment: Assessment,
    pub is_recommended: bool,
}

impl RouteOption {
    pub fn new(estimate: RouteEstimate, start: &str, end: &str) -> Self {
        let presentation = estimate.kind.presentation();
        let notes = presentation.notes.iter().map(|n| n.to_string()).collect();

        let assessment = match estimate.kind {
            RouteKind::Safe => Assessment::Factors(notes),
            RouteKind::Regular => Assessment::Issues(notes),
        };

        Self {
            label: presentation.label.into(),
            route_type: estimate.kind,
            start_location: start.into(),
            end_location: end.into(),
            coordinates: estimate.coordinates,
            distance: format_distance(estimate.distance_km),
            time: format_minutes(estimate.eta_minutes),
            safety_score: presentation.safety_score,
            color: presentation.color.into(),
            width: presentation.width,
            lighting: presentation.lighting.into(),
            assessment,
            is_recommended: presentation.recommended,
        }
    }
}

/// One decimal place, so a zero-length route reads "0.0 km".
pub fn format_distance(km: f64) -> String {
    format!("{:.1} km", km)
}

pub fn format_minutes(minutes: u32) -> String {
    format!("{} min", minutes)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnDirection {
    pub instruction: String,
    pub distance: String,
    pub time: String,
    pub street_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_note: Option<String>,
}

/// A generated route together with the steps and markers to follow it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directions {
    pub route: RouteOption,
    pub steps: Vec<TurnDirection>,
    pub markers: Vec<crate::entities::Marker>,
}

/// A route record submitted by a client for safekeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoute {
    pub start_location: String,
    pub end_location: String,
    /// km
    pub distance: f64,
    /// minutes
    pub duration: u32,
    pub safety_score: u8,
    pub route_type: RouteKind,
    pub route_data: Vec<Coordinates>,
    #[serde(default)]
    pub is_recommended: bool,
}

impl NewRoute {
    pub fn validate(&self) -> Result<(), Error> {
        if self.start_location.trim().is_empty() {
            return Err(invalid_input_error("startLocation must not be empty"));
        }
        if self.end_location.trim().is_empty() {
            return Err(invalid_input_error("endLocation must not be empty"));
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(invalid_input_error("distance must be a non-negative number"));
        }
        if self.safety_score > 100 {
            return Err(invalid_input_error("safetyScore must be within 0..=100"));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoute {
    pub token: Uuid,
    #[serde(flatten)]
    pub route: NewRoute,
    pub created_at: DateTime<Utc>,
}

impl SavedRoute {
    pub fn new(route: NewRoute) -> Self {
        Self {
            token: Uuid::new_v4(),
            route,
            created_at: Utc::now(),
        }
    }
}
