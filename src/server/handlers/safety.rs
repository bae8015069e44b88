use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{CityMap, CitySafety, Layers, Marker};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CityParams {
    city: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct MarkerParams {
    city: Option<String>,
    layers: Option<String>,
}

pub async fn safety_data(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<CityParams>, QueryRejection>,
) -> Result<Json<CitySafety>, Error> {
    let Query(params) = params?;

    let data = api.safety_data(params.city).await?;

    Ok(data.into())
}

pub async fn map_data(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<CityParams>, QueryRejection>,
) -> Result<Json<CityMap>, Error> {
    let Query(params) = params?;

    let data = api.map_data(params.city).await?;

    Ok(data.into())
}

pub async fn markers(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<MarkerParams>, QueryRejection>,
) -> Result<Json<Vec<Marker>>, Error> {
    let Query(params) = params?;

    let layers = match params.layers {
        Some(layers) => layers.parse()?,
        None => Layers::default(),
    };

    let markers = api.map_markers(params.city, layers).await?;

    Ok(markers.into())
}
