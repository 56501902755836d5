use async_trait::async_trait;

use crate::errors::Result;
use crate::pricing::PricingResult;

use super::platforms_model::{PlatformFeeSchedule, PlatformQuote};

/// Capability seam for marketplace integrations.
///
/// The engine never depends on a live marketplace; implementations may be
/// mocks, caches, or real API clients.
#[async_trait]
pub trait MarketplaceConnector: Send + Sync {
    async fn list_platforms(&self) -> Result<Vec<PlatformFeeSchedule>>;
    async fn fee_schedule(&self, platform_id: &str) -> Result<PlatformFeeSchedule>;
}

/// Trait for platform service operations.
#[async_trait]
pub trait PlatformServiceTrait: Send + Sync {
    async fn list_platforms(&self) -> Result<Vec<PlatformFeeSchedule>>;
    async fn pricing_for_platform(
        &self,
        platform_id: &str,
        quote: &PlatformQuote,
    ) -> Result<PricingResult>;
}
