use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Json, Path};

use crate::api::DynAPI;
use crate::entities::{Alert, AlertSummary, NewAlert};
use crate::error::{invalid_input_error, Error};

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<AlertSummary>>, Error> {
    let alerts = api.list_alerts().await?;

    Ok(alerts.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<NewAlert>, JsonRejection>,
) -> Result<Json<Alert>, Error> {
    let Json(params) = params?;

    let alert = api.create_alert(params).await?;

    Ok(alert.into())
}

pub async fn confirm(
    Extension(api): Extension<DynAPI>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Alert>, Error> {
    let Path(id) = id?;

    let id: i64 = id
        .parse()
        .map_err(|_| invalid_input_error(format!("invalid alert id {:?}", id)))?;

    let alert = api.confirm_alert(id).await?;

    Ok(alert.into())
}
