mod alert;
mod city;
mod coordinates;
mod map;
mod marker;
mod route;
mod safety;

pub use alert::{time_ago, Alert, AlertSummary, NewAlert};
pub use city::City;
pub use coordinates::{Coordinates, LatLng};
pub use map::{CityMap, DarkSpot, Incident, RouteOverlay};
pub use marker::{route_markers, Layers, Marker, MarkerCategory};
pub use route::{
    format_distance, format_minutes, Assessment, Directions, NewRoute, Presentation, RouteEstimate,
    RouteKind, RouteOption, SavedRoute, TurnDirection,
};
pub use safety::{CitySafety, CrowdLevel, CrowdReading, EmergencyService, Hazard, ServiceKind};
