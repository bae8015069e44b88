use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub lat: f64,
    pub lng: f64,
    /// 1-10
    pub severity: u8,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrowdReading {
    pub lat: f64,
    pub lng: f64,
    pub level: CrowdLevel,
    pub time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "Police Station")]
    PoliceStation,
    Hospital,
    #[serde(rename = "Fire Station")]
    FireStation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmergencyService {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    pub name: String,
}

/// Per-city safety dataset shown on the safety overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySafety {
    pub crime_hotspots: Vec<Hazard>,
    pub poor_lighting: Vec<Hazard>,
    pub crowd_density: Vec<CrowdReading>,
    pub emergency_services: Vec<EmergencyService>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_client_spelling() {
        assert_eq!(
            serde_json::to_value(CrowdLevel::VeryHigh).unwrap(),
            "very-high"
        );
        assert_eq!(
            serde_json::to_value(ServiceKind::PoliceStation).unwrap(),
            "Police Station"
        );
    }
}
