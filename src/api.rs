use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{
    Alert, AlertSummary, City, CityMap, CitySafety, Directions, Layers, Marker, NewAlert,
    NewRoute, RouteKind, RouteOption, SavedRoute,
};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn compare_routes(
        &self,
        start: String,
        end: String,
        city: Option<String>,
    ) -> Result<Vec<RouteOption>, Error>;
    async fn route_directions(
        &self,
        start: String,
        end: String,
        city: Option<String>,
        kind: RouteKind,
    ) -> Result<Directions, Error>;
    async fn create_route(&self, route: NewRoute) -> Result<SavedRoute, Error>;
    async fn find_route(&self, token: Uuid) -> Result<SavedRoute, Error>;
}

#[async_trait]
pub trait AlertAPI {
    async fn list_alerts(&self) -> Result<Vec<AlertSummary>, Error>;
    async fn create_alert(&self, alert: NewAlert) -> Result<Alert, Error>;
    async fn confirm_alert(&self, id: i64) -> Result<Alert, Error>;
}

#[async_trait]
pub trait SafetyAPI {
    async fn safety_data(&self, city: Option<String>) -> Result<CitySafety, Error>;
    async fn map_data(&self, city: Option<String>) -> Result<CityMap, Error>;
    async fn map_markers(&self, city: Option<String>, layers: Layers) -> Result<Vec<Marker>, Error>;
}

#[async_trait]
pub trait CityAPI {
    async fn list_cities(&self) -> Result<Vec<City>, Error>;
}

pub trait API: RouteAPI + AlertAPI + SafetyAPI + CityAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
