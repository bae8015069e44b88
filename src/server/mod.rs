mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::server::handlers::{alerts, cities, health, routes, safety};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/api/cities", get(cities::list))
        .route("/api/routes", post(routes::create))
        .route("/api/routes/compare", get(routes::compare))
        .route("/api/routes/directions", get(routes::directions))
        .route("/api/routes/saved/:token", get(routes::find))
        .route("/api/safety-data", get(safety::safety_data))
        .route("/api/map-data", get(safety::map_data))
        .route("/api/map-data/markers", get(safety::markers))
        .route("/api/alerts", get(alerts::list).post(alerts::create))
        .route("/api/alerts/:id/confirm", post(alerts::confirm))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
