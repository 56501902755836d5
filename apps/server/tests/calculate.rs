use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use resellfolio_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::from_env();
    app_router(build_state(), &config)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn ebay_listing() -> Value {
    json!({
        "purchasePrice": 45,
        "quantity": 1,
        "sellingPrice": 85,
        "shippingCostIncurred": 5.99,
        "shippingChargeToCustomer": 8.99,
        "platformFeeRate": 12.8,
        "paymentFixedFee": 0.30,
        "paymentFeeRate": 2.5,
        "taxRate": 20
    })
}

#[tokio::test]
async fn pricing_returns_the_full_profit_picture() {
    let (status, body) = post_json("/api/v1/calculate/pricing", ebay_listing()).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["totalRevenue"].as_f64().unwrap(), 93.98);
    assert_eq!(round2(body["platformFeeAmount"].as_f64().unwrap()), 12.03);
    assert_eq!(round2(body["paymentFeeAmount"].as_f64().unwrap()), 2.65);
    assert_eq!(round2(body["totalCosts"].as_f64().unwrap()), 65.67);
    assert_eq!(round2(body["netProfit"].as_f64().unwrap()), 28.31);
    assert_eq!(round1(body["profitMarginPercent"].as_f64().unwrap()), 30.1);
    assert_eq!(round1(body["roiPercent"].as_f64().unwrap()), 55.5);
}

#[tokio::test]
async fn pricing_reports_zero_margin_when_nothing_is_charged() {
    let mut listing = ebay_listing();
    listing["sellingPrice"] = json!(0);
    listing["shippingChargeToCustomer"] = json!(0);

    let (status, body) = post_json("/api/v1/calculate/pricing", listing).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRevenue"].as_f64().unwrap(), 0.0);
    assert_eq!(body["profitMarginPercent"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn pricing_rejects_negative_amounts() {
    let mut listing = ebay_listing();
    listing["purchasePrice"] = json!(-45);

    let (status, body) = post_json("/api/v1/calculate/pricing", listing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn pricing_rejects_non_numeric_fields() {
    let mut listing = ebay_listing();
    listing["sellingPrice"] = json!("lots");

    let (status, _) = post_json("/api/v1/calculate/pricing", listing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn declaration_floors_an_empty_parcel() {
    let (status, body) = post_json(
        "/api/v1/calculate/declaration",
        json!({ "items": [], "strategy": "accurate" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestedValue"].as_f64().unwrap(), 10.0);
}

#[tokio::test]
async fn declaration_applies_the_reduced_multiplier() {
    let (status, body) = post_json(
        "/api/v1/calculate/declaration",
        json!({
            "items": [{ "unitCost": 100, "quantity": 2 }],
            "strategy": "reduced"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItemCost"].as_f64().unwrap(), 200.0);
    assert_eq!(body["suggestedValue"].as_f64().unwrap(), 130.0);
}

#[tokio::test]
async fn declaration_rejects_unknown_strategies() {
    let (status, body) = post_json(
        "/api/v1/calculate/declaration",
        json!({ "items": [], "strategy": "aggressive" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("unknown declaration strategy"));
}

#[tokio::test]
async fn breakdown_returns_the_five_lines_in_order() {
    let (status, body) = post_json(
        "/api/v1/calculate/breakdown",
        json!({
            "sellingPrice": 120,
            "productCost": 65,
            "shippingCost": 12,
            "platformFeeRate": 8.5,
            "taxRate": 20
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let lines = body.as_array().unwrap();
    let labels: Vec<&str> = lines
        .iter()
        .map(|l| l["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        ["Product Cost", "Shipping", "Platform Fee", "Tax", "Profit"]
    );
    assert_eq!(lines[2]["amount"].as_f64().unwrap(), 10.2);
    assert_eq!(lines[3]["amount"].as_f64().unwrap(), 24.0);
    assert_eq!(round2(lines[4]["amount"].as_f64().unwrap()), 8.8);
}

#[tokio::test]
async fn margin_assessment_bands_the_figure() {
    let (status, body) =
        post_json("/api/v1/calculate/margin", json!({ "marginPercent": 30.1 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["band"], "excellent");

    let (_, body) = post_json("/api/v1/calculate/margin", json!({ "marginPercent": 5 })).await;
    assert_eq!(body["band"], "low");
}

#[tokio::test]
async fn strategy_listing_flags_the_recommended_option() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/declaration/strategies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let strategies = body.as_array().unwrap();
    assert_eq!(strategies.len(), 3);
    assert_eq!(strategies[0]["id"], "accurate");
    assert_eq!(strategies[0]["recommended"], true);
    assert_eq!(strategies[2]["risk"], "high");
}
