use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use resellfolio_core::shipping::{ShippingMethod, TrackingStatus};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_shipping_methods(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ShippingMethod>>> {
    let methods = state.shipping_service.list_methods().await?;
    Ok(Json(methods))
}

async fn track_shipment(
    Path(tracking_number): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TrackingStatus>> {
    let status = state.shipping_service.track(&tracking_number).await?;
    Ok(Json(status))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shipping/methods", get(list_shipping_methods))
        .route("/shipping/track/{tracking_number}", get(track_shipment))
}
