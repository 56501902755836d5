use async_trait::async_trait;

use crate::errors::Result;

use super::shipping_model::{ShippingMethod, TrackingStatus};

/// Capability seam for courier integrations.
///
/// Implementations may be mocks or real tracking API clients; the engine
/// never talks to a courier directly.
#[async_trait]
pub trait CourierTracker: Send + Sync {
    async fn list_methods(&self) -> Result<Vec<ShippingMethod>>;
    async fn track(&self, tracking_number: &str) -> Result<TrackingStatus>;
}

/// Trait for shipping service operations.
#[async_trait]
pub trait ShippingServiceTrait: Send + Sync {
    async fn list_methods(&self) -> Result<Vec<ShippingMethod>>;
    async fn track(&self, tracking_number: &str) -> Result<TrackingStatus>;
}
