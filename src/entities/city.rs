use serde::{Deserialize, Serialize};

use crate::entities::LatLng;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub center: LatLng,
    pub popular_places: Vec<String>,
}

impl City {
    pub fn new(name: &str, lat: f64, lng: f64, popular_places: &[&str]) -> Self {
        Self {
            name: name.into(),
            center: LatLng::new(lat, lng),
            popular_places: popular_places.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Case-insensitive name match, ignoring surrounding whitespace.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
