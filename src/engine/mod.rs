mod alert_api;
mod city_api;
mod route_api;
mod safety_api;

use std::sync::Arc;

use crate::{
    api::API,
    entities::{City, Coordinates},
    error::{not_found_error, Error},
    store::Store,
};

pub struct Engine {
    store: Arc<dyn Store>,
    default_city: String,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip(store))]
    pub fn new<S: Store + 'static>(store: S, default_city: String) -> Self {
        Self {
            store: Arc::new(store),
            default_city,
        }
    }
}

impl Engine {
    async fn find_city(&self, name: &str) -> Result<Option<City>, Error> {
        Ok(self
            .store
            .cities()
            .await?
            .into_iter()
            .find(|city| city.is_named(name)))
    }

    /// The requested city if it is known, otherwise the default city.
    async fn resolve_city(&self, city: Option<String>) -> Result<City, Error> {
        if let Some(name) = city.as_deref().filter(|name| !name.trim().is_empty()) {
            if let Some(found) = self.find_city(name).await? {
                return Ok(found);
            }

            tracing::debug!(city = name, "unknown city, using default");
        }

        self.find_city(&self.default_city)
            .await?
            .ok_or_else(|| not_found_error(format!("city {:?}", self.default_city)))
    }

    async fn city_center(&self, city: Option<String>) -> Result<Coordinates, Error> {
        Ok(self.resolve_city(city).await?.center.into())
    }
}

impl API for Engine {}
