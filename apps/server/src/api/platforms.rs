use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use resellfolio_core::errors::Error as CoreError;
use resellfolio_core::platforms::{PlatformFeeSchedule, PlatformQuote};
use resellfolio_core::pricing::PricingResult;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_platforms(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PlatformFeeSchedule>>> {
    let platforms = state.platform_service.list_platforms().await?;
    Ok(Json(platforms))
}

async fn platform_pricing(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<PricingResult>> {
    let quote: PlatformQuote = serde_json::from_value(body).map_err(CoreError::from)?;
    let result = state
        .platform_service
        .pricing_for_platform(&id, &quote)
        .await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/platforms", get(list_platforms))
        .route("/platforms/{id}/pricing", post(platform_pricing))
}
