use super::Engine;

use async_trait::async_trait;

use crate::{api::CityAPI, entities::City, error::Error};

#[async_trait]
impl CityAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_cities(&self) -> Result<Vec<City>, Error> {
        self.store.cities().await
    }
}
