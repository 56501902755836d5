use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;

use resellfolio_core::declaration::{
    DeclarationItem, DeclarationStrategy, DeclarationSuggestion, StrategyInfo,
};
use resellfolio_core::errors::Error as CoreError;
use resellfolio_core::pricing::{
    CostBreakdownInput, CostLine, MarginAssessment, PricingInput, PricingResult,
};

use crate::{error::ApiResult, main_lib::AppState};

// Bodies are deserialized from a raw value so malformed or non-numeric
// fields surface as a 400 validation failure rather than an extractor
// rejection.

async fn calculate_pricing(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<PricingResult>> {
    let input: PricingInput = serde_json::from_value(body).map_err(CoreError::from)?;
    let result = state.pricing_service.compute_pricing(&input)?;
    Ok(Json(result))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeclarationRequest {
    items: Vec<DeclarationItem>,
    strategy: String,
}

async fn calculate_declaration(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<DeclarationSuggestion>> {
    let request: DeclarationRequest = serde_json::from_value(body).map_err(CoreError::from)?;
    let strategy: DeclarationStrategy = request.strategy.parse()?;
    let suggestion = state
        .pricing_service
        .suggest_declaration_value(&request.items, strategy)?;
    Ok(Json(suggestion))
}

async fn calculate_breakdown(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<Vec<CostLine>>> {
    let input: CostBreakdownInput = serde_json::from_value(body).map_err(CoreError::from)?;
    let lines = state.pricing_service.compute_cost_breakdown(&input)?;
    Ok(Json(lines))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarginRequest {
    margin_percent: Decimal,
}

async fn calculate_margin(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<MarginAssessment>> {
    let request: MarginRequest = serde_json::from_value(body).map_err(CoreError::from)?;
    Ok(Json(state.pricing_service.assess_margin(request.margin_percent)))
}

async fn list_declaration_strategies() -> Json<Vec<StrategyInfo>> {
    Json(
        DeclarationStrategy::ALL
            .iter()
            .map(DeclarationStrategy::info)
            .collect(),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculate/pricing", post(calculate_pricing))
        .route("/calculate/declaration", post(calculate_declaration))
        .route("/calculate/breakdown", post(calculate_breakdown))
        .route("/calculate/margin", post(calculate_margin))
        .route("/declaration/strategies", get(list_declaration_strategies))
}
