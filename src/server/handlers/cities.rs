use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::City;
use crate::error::Error;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<City>>, Error> {
    let cities = api.list_cities().await?;

    Ok(cities.into())
}
