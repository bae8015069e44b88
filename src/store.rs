use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::entities::{Alert, City, CityMap, CitySafety, NewAlert, NewRoute, SavedRoute};
use crate::error::Error;
use crate::fixtures;

/// Backing storage for the engine. Lookups by city name are exact; the engine
/// resolves names and fallbacks before calling in.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_route(&self, route: NewRoute) -> Result<SavedRoute, Error>;
    async fn find_route(&self, token: Uuid) -> Result<Option<SavedRoute>, Error>;

    async fn list_alerts(&self) -> Result<Vec<Alert>, Error>;
    async fn insert_alert(&self, alert: NewAlert) -> Result<Alert, Error>;
    async fn confirm_alert(&self, id: i64) -> Result<Option<Alert>, Error>;

    async fn cities(&self) -> Result<Vec<City>, Error>;
    async fn safety_data(&self, city: &str) -> Result<Option<CitySafety>, Error>;
    async fn map_data(&self, city: &str) -> Result<Option<CityMap>, Error>;
}

#[derive(Debug, Default)]
pub struct MemStore {
    routes: RwLock<HashMap<Uuid, SavedRoute>>,
    alerts: RwLock<BTreeMap<i64, Alert>>,
    next_alert_id: AtomicI64,
    cities: Vec<City>,
    safety: HashMap<String, CitySafety>,
    maps: HashMap<String, CityMap>,
}

impl MemStore {
    /// An empty store: no cities, no datasets, no alerts.
    pub fn new() -> Self {
        Self {
            next_alert_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    /// A store seeded with the demo cities, datasets and alerts.
    pub fn with_fixtures() -> Self {
        let now = Utc::now();
        let next_alert_id = AtomicI64::new(1);

        let alerts = fixtures::alerts()
            .into_iter()
            .map(|(alert, confirms, minutes_ago)| {
                let id = next_alert_id.fetch_add(1, Ordering::SeqCst);
                let created_at = now - Duration::minutes(minutes_ago);
                (id, Alert::new(id, alert, confirms, created_at))
            })
            .collect();

        Self {
            routes: RwLock::new(HashMap::new()),
            alerts: RwLock::new(alerts),
            next_alert_id,
            cities: fixtures::cities(),
            safety: fixtures::safety_data(),
            maps: fixtures::map_data(),
        }
    }

    pub fn with_cities(mut self, cities: Vec<City>) -> Self {
        self.cities = cities;
        self
    }

    pub fn with_safety_data(mut self, city: &str, data: CitySafety) -> Self {
        self.safety.insert(city.into(), data);
        self
    }

    pub fn with_map_data(mut self, city: &str, data: CityMap) -> Self {
        self.maps.insert(city.into(), data);
        self
    }
}

#[async_trait]
impl Store for MemStore {
    async fn insert_route(&self, route: NewRoute) -> Result<SavedRoute, Error> {
        let saved = SavedRoute::new(route);

        self.routes.write().await.insert(saved.token, saved.clone());

        Ok(saved)
    }

    async fn find_route(&self, token: Uuid) -> Result<Option<SavedRoute>, Error> {
        Ok(self.routes.read().await.get(&token).cloned())
    }

    async fn list_alerts(&self) -> Result<Vec<Alert>, Error> {
        Ok(self.alerts.read().await.values().cloned().collect())
    }

    async fn insert_alert(&self, alert: NewAlert) -> Result<Alert, Error> {
        let id = self.next_alert_id.fetch_add(1, Ordering::SeqCst);
        let alert = Alert::new(id, alert, 0, Utc::now());

        self.alerts.write().await.insert(id, alert.clone());

        Ok(alert)
    }

    async fn confirm_alert(&self, id: i64) -> Result<Option<Alert>, Error> {
        let mut alerts = self.alerts.write().await;

        Ok(alerts.get_mut(&id).map(|alert| {
            alert.confirm();
            alert.clone()
        }))
    }

    async fn cities(&self) -> Result<Vec<City>, Error> {
        Ok(self.cities.clone())
    }

    async fn safety_data(&self, city: &str) -> Result<Option<CitySafety>, Error> {
        Ok(self.safety.get(city).cloned())
    }

    async fn map_data(&self, city: &str) -> Result<Option<CityMap>, Error> {
        Ok(self.maps.get(city).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RouteKind;
    use tokio_test::block_on;

    fn new_alert() -> NewAlert {
        NewAlert {
            kind: "Police Presence".into(),
            description: "Patrol near the station".into(),
            latitude: 19.076,
            longitude: 72.8777,
            reporter_name: "Rahul M.".into(),
        }
    }

    #[test]
    fn fixtures_are_seeded() {
        let store = MemStore::with_fixtures();

        assert_eq!(block_on(store.list_alerts()).unwrap().len(), 6);
        assert_eq!(block_on(store.cities()).unwrap().len(), 6);
        assert!(block_on(store.map_data("Mumbai")).unwrap().is_some());
        assert!(block_on(store.safety_data("Chennai")).unwrap().is_none());
    }

    #[test]
    fn alert_ids_continue_after_fixtures() {
        let store = MemStore::with_fixtures();
        let alert = block_on(store.insert_alert(new_alert())).unwrap();

        assert_eq!(alert.id, 7);
        assert_eq!(alert.confirms, 0);
    }

    #[test]
    fn confirm_updates_stored_alert() {
        let store = MemStore::new();
        let alert = block_on(store.insert_alert(new_alert())).unwrap();

        assert_eq!(alert.id, 1);

        block_on(store.confirm_alert(alert.id)).unwrap();
        let confirmed = block_on(store.confirm_alert(alert.id)).unwrap().unwrap();

        assert_eq!(confirmed.confirms, 2);
        assert_eq!(block_on(store.list_alerts()).unwrap()[0].confirms, 2);
        assert!(block_on(store.confirm_alert(99)).unwrap().is_none());
    }

    #[test]
    fn routes_round_trip_by_token() {
        let store = MemStore::new();
        let saved = block_on(store.insert_route(NewRoute {
            start_location: "Colaba, Mumbai".into(),
            end_location: "Worli, Mumbai".into(),
            distance: 7.5,
            duration: 90,
            safety_score: 88,
            route_type: RouteKind::Safe,
            route_data: vec![],
            is_recommended: true,
        }))
        .unwrap();

        let found = block_on(store.find_route(saved.token)).unwrap();

        assert_eq!(found, Some(saved));
        assert!(block_on(store.find_route(Uuid::new_v4())).unwrap().is_none());
    }
}
