use std::sync::Arc;

use resellfolio_core::platforms::{
    MarketplaceConnector, MockMarketplaceConnector, PlatformService, PlatformServiceTrait,
};
use resellfolio_core::pricing::{PricingService, PricingServiceTrait};
use resellfolio_core::shipping::{
    CourierTracker, MockCourierTracker, ShippingService, ShippingServiceTrait,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub pricing_service: Arc<dyn PricingServiceTrait + Send + Sync>,
    pub platform_service: Arc<dyn PlatformServiceTrait + Send + Sync>,
    pub shipping_service: Arc<dyn ShippingServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("RF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires the stateless engine services. The marketplace and courier seams
/// get their mock connectors; swap these for real clients when the
/// integrations land.
pub fn build_state() -> Arc<AppState> {
    let connector: Arc<dyn MarketplaceConnector> = Arc::new(MockMarketplaceConnector::new());
    let tracker: Arc<dyn CourierTracker> = Arc::new(MockCourierTracker::new());

    Arc::new(AppState {
        pricing_service: Arc::new(PricingService::new()),
        platform_service: Arc::new(PlatformService::new(connector)),
        shipping_service: Arc::new(ShippingService::new(tracker)),
    })
}
