use super::Engine;

use async_trait::async_trait;

use crate::{
    api::SafetyAPI,
    entities::{CityMap, CitySafety, Layers, Marker},
    error::{not_found_error, Error},
};

// Cities without a dataset of their own are shown the default city's data.

#[async_trait]
impl SafetyAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn safety_data(&self, city: Option<String>) -> Result<CitySafety, Error> {
        let city = self.resolve_city(city).await?;

        if let Some(data) = self.store.safety_data(&city.name).await? {
            return Ok(data);
        }

        tracing::debug!(city = %city.name, "no safety data, using default city");

        self.store
            .safety_data(&self.default_city)
            .await?
            .ok_or_else(|| not_found_error(format!("safety data for {}", city.name)))
    }

    #[tracing::instrument(skip(self))]
    async fn map_data(&self, city: Option<String>) -> Result<CityMap, Error> {
        let city = self.resolve_city(city).await?;

        if let Some(data) = self.store.map_data(&city.name).await? {
            return Ok(data);
        }

        tracing::debug!(city = %city.name, "no map data, using default city");

        self.store
            .map_data(&self.default_city)
            .await?
            .ok_or_else(|| not_found_error(format!("map data for {}", city.name)))
    }

    #[tracing::instrument(skip(self))]
    async fn map_markers(&self, city: Option<String>, layers: Layers) -> Result<Vec<Marker>, Error> {
        Ok(self.map_data(city).await?.markers(layers))
    }
}
