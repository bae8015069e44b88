use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{Directions, NewRoute, RouteKind, RouteOption, SavedRoute};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CompareParams {
    start: Option<String>,
    end: Option<String>,
    city: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DirectionsParams {
    start: Option<String>,
    end: Option<String>,
    city: Option<String>,
    kind: Option<RouteKind>,
}

pub async fn compare(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<CompareParams>, QueryRejection>,
) -> Result<Json<Vec<RouteOption>>, Error> {
    let Query(params) = params?;

    let routes = api
        .compare_routes(
            params.start.unwrap_or_default(),
            params.end.unwrap_or_default(),
            params.city,
        )
        .await?;

    Ok(routes.into())
}

pub async fn directions(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<DirectionsParams>, QueryRejection>,
) -> Result<Json<Directions>, Error> {
    let Query(params) = params?;

    let directions = api
        .route_directions(
            params.start.unwrap_or_default(),
            params.end.unwrap_or_default(),
            params.city,
            params.kind.unwrap_or(RouteKind::Safe),
        )
        .await?;

    Ok(directions.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<NewRoute>, JsonRejection>,
) -> Result<Json<SavedRoute>, Error> {
    let Json(params) = params?;

    let route = api.create_route(params).await?;

    Ok(route.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    token: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SavedRoute>, Error> {
    let Path(token) = token?;

    let route = api.find_route(token).await?;

    Ok(route.into())
}
