//! Seed data for the in-memory store.

use std::collections::HashMap;

use crate::entities::{
    City, CityMap, CitySafety, Coordinates, CrowdLevel, CrowdReading, DarkSpot, EmergencyService,
    Hazard, Incident, LatLng, NewAlert, RouteOverlay, ServiceKind,
};

pub fn cities() -> Vec<City> {
    vec![
        City::new(
            "Delhi NCR",
            28.6139,
            77.2090,
            &[
                "Connaught Place, Delhi",
                "India Gate, Delhi",
                "Qutub Minar, Delhi",
                "Red Fort, Delhi",
                "Cyber City, Gurugram",
                "Sector 18, Noida",
                "Karol Bagh, Delhi",
                "South Extension, Delhi",
                "Lajpat Nagar, Delhi",
                "Saket, Delhi",
                "Hauz Khas, Delhi",
                "Chandni Chowk, Delhi",
                "Khan Market, Delhi",
                "Lodhi Gardens, Delhi",
            ],
        ),
        City::new(
            "Mumbai",
            19.0760,
            72.8777,
            &[
                "Bandra, Mumbai",
                "Juhu Beach, Mumbai",
                "Marine Drive, Mumbai",
                "Colaba, Mumbai",
                "Andheri, Mumbai",
                "Worli, Mumbai",
            ],
        ),
        City::new(
            "Bangalore",
            12.9716,
            77.5946,
            &[
                "MG Road, Bangalore",
                "Indiranagar, Bangalore",
                "Koramangala, Bangalore",
                "Electronic City, Bangalore",
                "Whitefield, Bangalore",
                "HSR Layout, Bangalore",
            ],
        ),
        City::new(
            "Chennai",
            13.0827,
            80.2707,
            &[
                "Marina Beach, Chennai",
                "T Nagar, Chennai",
                "Anna Nagar, Chennai",
                "Adyar, Chennai",
                "Mylapore, Chennai",
                "Velachery, Chennai",
            ],
        ),
        City::new(
            "Kolkata",
            22.5726,
            88.3639,
            &[
                "Park Street, Kolkata",
                "Salt Lake, Kolkata",
                "New Town, Kolkata",
                "Howrah, Kolkata",
                "Esplanade, Kolkata",
                "Ballygunge, Kolkata",
            ],
        ),
        City::new(
            "Hyderabad",
            17.3850,
            78.4867,
            &[
                "Hitech City, Hyderabad",
                "Banjara Hills, Hyderabad",
                "Gachibowli, Hyderabad",
                "Jubilee Hills, Hyderabad",
                "Secunderabad, Hyderabad",
                "Madhapur, Hyderabad",
            ],
        ),
    ]
}

fn alert(kind: &str, description: &str, lat: f64, lng: f64, reporter: &str) -> NewAlert {
    NewAlert {
        kind: kind.into(),
        description: description.into(),
        latitude: lat,
        longitude: lng,
        reporter_name: reporter.into(),
    }
}

/// Seed alerts with their confirmation count and age in minutes.
pub fn alerts() -> Vec<(NewAlert, u32, i64)> {
    vec![
        (
            alert(
                "Road Blockade",
                "Protest blocking traffic near Janpath Road in Central Delhi. Multiple roads closed. Avoid the area if possible.",
                28.6139,
                77.2090,
                "Amit S.",
            ),
            12,
            15,
        ),
        (
            alert(
                "Street Lights Out",
                "Street lights not working on MG Road near Brigade Road junction in Bangalore. Area is dark, exercise caution.",
                12.9716,
                77.5946,
                "Priya K.",
            ),
            8,
            42,
        ),
        (
            alert(
                "Police Presence",
                "Increased police patrol near Mumbai Central station. Area is secure with additional officers on duty.",
                19.0760,
                72.8777,
                "Rahul M.",
            ),
            15,
            90,
        ),
        (
            alert(
                "Accident",
                "Minor accident near Electronic City signal light. Traffic moving slowly. Plan alternative route if possible.",
                12.8425,
                77.6563,
                "Vikram P.",
            ),
            6,
            180,
        ),
        (
            alert(
                "Street Lights Out",
                "All street lights out on Sardar Patel road near IIT-Madras. Very dark conditions, use caution if walking.",
                13.0074,
                80.2376,
                "Deepa L.",
            ),
            10,
            600,
        ),
        (
            alert(
                "Road Blockade",
                "Construction activity blocking half of Parliament Street. Heavy traffic delay expected for next 3 days.",
                28.6198,
                77.2123,
                "Rajiv G.",
            ),
            18,
            2880,
        ),
    ]
}

fn hazard(lat: f64, lng: f64, severity: u8, description: &str) -> Hazard {
    Hazard {
        lat,
        lng,
        severity,
        description: description.into(),
    }
}

fn crowd(lat: f64, lng: f64, level: CrowdLevel, time: &str) -> CrowdReading {
    CrowdReading {
        lat,
        lng,
        level,
        time: time.into(),
    }
}

fn service(lat: f64, lng: f64, kind: ServiceKind, name: &str) -> EmergencyService {
    EmergencyService {
        lat,
        lng,
        kind,
        name: name.into(),
    }
}

pub fn safety_data() -> HashMap<String, CitySafety> {
    use CrowdLevel::*;
    use ServiceKind::*;

    let mut data = HashMap::new();

    data.insert(
        "Delhi NCR".into(),
        CitySafety {
            crime_hotspots: vec![
                hazard(28.6531, 77.2135, 8, "High theft area"),
                hazard(28.6384, 77.1908, 7, "Street crime reports"),
                hazard(28.6129, 77.2295, 9, "Multiple incidents at night"),
            ],
            poor_lighting: vec![
                hazard(28.6298, 77.2021, 6, "Street lights out"),
                hazard(28.6462, 77.1937, 8, "Dark alley, avoid at night"),
                hazard(28.6187, 77.2360, 7, "Dimly lit area"),
            ],
            crowd_density: vec![
                crowd(28.6291, 77.2183, High, "evening"),
                crowd(28.6325, 77.2154, Medium, "all-day"),
                crowd(28.6405, 77.2149, Low, "night"),
            ],
            emergency_services: vec![
                service(28.6343, 77.2151, PoliceStation, "Connaught Place Police Station"),
                service(28.6248, 77.2043, Hospital, "Ram Manohar Lohia Hospital"),
                service(28.6367, 77.2217, FireStation, "Delhi Fire Service HQ"),
            ],
        },
    );

    data.insert(
        "Mumbai".into(),
        CitySafety {
            crime_hotspots: vec![
                hazard(19.0822, 72.8400, 7, "Pickpocket reports"),
                hazard(19.0642, 72.8352, 6, "Isolated incidents"),
                hazard(19.0918, 72.8553, 8, "Late night concerns"),
            ],
            poor_lighting: vec![
                hazard(19.0725, 72.8537, 7, "Dim street lighting"),
                hazard(19.0543, 72.8455, 8, "Dark stretch near station"),
                hazard(19.0826, 72.8354, 6, "Poorly lit side roads"),
            ],
            crowd_density: vec![
                crowd(19.0736, 72.8553, VeryHigh, "rush-hour"),
                crowd(19.0635, 72.8631, High, "evening"),
                crowd(19.0819, 72.8719, Medium, "all-day"),
            ],
            emergency_services: vec![
                service(19.0743, 72.8554, PoliceStation, "Bandra Police Station"),
                service(19.0639, 72.8359, Hospital, "Lilavati Hospital"),
                service(19.0813, 72.8433, FireStation, "Bandra Fire Station"),
            ],
        },
    );

    data.insert(
        "Bangalore".into(),
        CitySafety {
            crime_hotspots: vec![
                hazard(12.9789, 77.6406, 6, "Theft reports"),
                hazard(12.9833, 77.6123, 7, "Evening safety concerns"),
                hazard(12.9615, 77.5969, 8, "Mugging incidents"),
            ],
            poor_lighting: vec![
                hazard(12.9722, 77.6404, 7, "Poor visibility area"),
                hazard(12.9626, 77.6198, 6, "Limited street lights"),
                hazard(12.9787, 77.6088, 8, "Dark public spaces"),
            ],
            crowd_density: vec![
                crowd(12.9705, 77.6038, High, "evening"),
                crowd(12.9814, 77.6132, Medium, "all-day"),
                crowd(12.9765, 77.5993, Low, "late-night"),
            ],
            emergency_services: vec![
                service(12.9719, 77.5970, PoliceStation, "Cubbon Park Police Station"),
                service(12.9777, 77.6132, Hospital, "Manipal Hospital"),
                service(12.9684, 77.6099, FireStation, "Bangalore Fire Station"),
            ],
        },
    );

    data
}

fn incident(lat: f64, lng: f64, kind: &str, description: &str) -> Incident {
    Incident {
        lat,
        lng,
        kind: kind.into(),
        description: description.into(),
    }
}

fn dark(lat: f64, lng: f64, description: &str) -> DarkSpot {
    DarkSpot {
        lat,
        lng,
        description: description.into(),
    }
}

fn overlay(points: &[(f64, f64)], color: &str, width: u8) -> RouteOverlay {
    RouteOverlay {
        coordinates: points.iter().map(|&p| Coordinates::from(p)).collect(),
        color: color.into(),
        width,
    }
}

pub fn map_data() -> HashMap<String, CityMap> {
    let mut data = HashMap::new();

    data.insert(
        "Delhi NCR".into(),
        CityMap {
            city_center: LatLng::new(28.6139, 77.2090),
            crime_hotspots: vec![
                incident(28.6531, 77.2135, "Theft", "Several thefts reported in the last week"),
                incident(28.6384, 77.1908, "Harassment", "Multiple harassment incidents"),
                incident(28.6129, 77.2295, "Robbery", "Armed robbery reported at night"),
                incident(28.6298, 77.2121, "Assault", "Group assault reported"),
            ],
            poor_lighting: vec![
                dark(28.6298, 77.2021, "Street lights not functioning"),
                dark(28.6462, 77.1937, "Dark alleyway, avoid at night"),
                dark(28.6187, 77.2360, "Poorly lit market area"),
            ],
            community_reports: vec![
                incident(28.6198, 77.2123, "Road Blockade", "Construction blocking road"),
                incident(
                    28.6343,
                    77.2251,
                    "Suspicious Activity",
                    "Group of suspicious individuals loitering",
                ),
                incident(28.6125, 77.2135, "Accident", "Minor accident causing traffic"),
            ],
            safe_routes: vec![
                overlay(
                    &[
                        (77.2090, 28.6139),
                        (77.2099, 28.6150),
                        (77.2130, 28.6152),
                        (77.2160, 28.6148),
                        (77.2185, 28.6155),
                    ],
                    "#10B981",
                    4,
                ),
                overlay(
                    &[
                        (77.2090, 28.6139),
                        (77.2080, 28.6160),
                        (77.2085, 28.6180),
                        (77.2120, 28.6195),
                        (77.2185, 28.6155),
                    ],
                    "#EF4444",
                    3,
                ),
            ],
        },
    );

    data.insert(
        "Mumbai".into(),
        CityMap {
            city_center: LatLng::new(19.0760, 72.8777),
            crime_hotspots: vec![
                incident(19.0822, 72.8400, "Pickpocket", "Frequent pickpocketing"),
                incident(19.0642, 72.8352, "Theft", "Mobile phone theft reports"),
                incident(19.0918, 72.8553, "Harassment", "Eve teasing reported"),
            ],
            poor_lighting: vec![
                dark(19.0725, 72.8537, "Dim lighting on main road"),
                dark(19.0543, 72.8455, "Dark stretch near station entrance"),
                dark(19.0826, 72.8354, "Poorly lit residential area"),
            ],
            community_reports: vec![
                incident(19.0743, 72.8554, "Police Presence", "Increased police patrol"),
                incident(19.0805, 72.8465, "Street Lights Out", "No functioning lights for 500m"),
                incident(19.0625, 72.8375, "Group Fight", "Large fight reported"),
            ],
            safe_routes: vec![
                overlay(
                    &[
                        (72.8700, 19.0700),
                        (72.8680, 19.0720),
                        (72.8630, 19.0735),
                        (72.8600, 19.0760),
                        (72.8580, 19.0800),
                    ],
                    "#10B981",
                    4,
                ),
                overlay(
                    &[
                        (72.8700, 19.0700),
                        (72.8650, 19.0690),
                        (72.8620, 19.0710),
                        (72.8590, 19.0750),
                        (72.8580, 19.0800),
                    ],
                    "#EF4444",
                    3,
                ),
            ],
        },
    );

    data.insert(
        "Bangalore".into(),
        CityMap {
            city_center: LatLng::new(12.9716, 77.5946),
            crime_hotspots: vec![
                incident(12.9789, 77.6406, "Theft", "Laptop theft in coffee shops"),
                incident(12.9833, 77.6123, "Scam", "Auto rickshaw scam targeting tourists"),
                incident(12.9615, 77.5969, "Robbery", "Chain snatching incidents"),
            ],
            poor_lighting: vec![
                dark(12.9722, 77.6404, "Poor visibility on side streets"),
                dark(12.9626, 77.6198, "Limited lighting near park area"),
                dark(12.9787, 77.6088, "Dark undeveloped plots"),
            ],
            community_reports: vec![
                incident(12.9725, 77.5970, "Street Lights Out", "Entire block without lights"),
                incident(12.9825, 77.6085, "Traffic Jam", "Severe congestion due to accident"),
                incident(12.9655, 77.6120, "Suspicious Activity", "Unusual group gathering"),
            ],
            safe_routes: vec![
                overlay(
                    &[
                        (77.5900, 12.9700),
                        (77.5920, 12.9730),
                        (77.5950, 12.9760),
                        (77.5970, 12.9775),
                        (77.6000, 12.9800),
                    ],
                    "#10B981",
                    4,
                ),
                overlay(
                    &[
                        (77.5900, 12.9700),
                        (77.5935, 12.9715),
                        (77.5960, 12.9730),
                        (77.5980, 12.9750),
                        (77.6000, 12.9800),
                    ],
                    "#EF4444",
                    3,
                ),
            ],
        },
    );

    data
}
