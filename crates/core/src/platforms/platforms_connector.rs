use async_trait::async_trait;
use log::warn;
use rust_decimal_macros::dec;

use crate::errors::{Result, ValidationError};

use super::platforms_model::PlatformFeeSchedule;
use super::platforms_traits::MarketplaceConnector;

/// Serves the built-in fee schedule catalog. Stands in for real marketplace
/// APIs until those integrations exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockMarketplaceConnector;

impl MockMarketplaceConnector {
    pub fn new() -> Self {
        MockMarketplaceConnector
    }

    fn presets() -> Vec<PlatformFeeSchedule> {
        vec![
            PlatformFeeSchedule {
                id: "ebay".to_string(),
                name: "eBay".to_string(),
                platform_fee_rate: dec!(12.8),
                payment_fixed_fee: dec!(0.30),
                payment_fee_rate: dec!(2.5),
            },
            PlatformFeeSchedule {
                id: "vinted".to_string(),
                name: "Vinted".to_string(),
                platform_fee_rate: dec!(5),
                payment_fixed_fee: dec!(0.70),
                payment_fee_rate: dec!(3),
            },
            PlatformFeeSchedule {
                id: "depop".to_string(),
                name: "Depop".to_string(),
                platform_fee_rate: dec!(10),
                payment_fixed_fee: dec!(0.20),
                payment_fee_rate: dec!(2.9),
            },
        ]
    }
}

#[async_trait]
impl MarketplaceConnector for MockMarketplaceConnector {
    async fn list_platforms(&self) -> Result<Vec<PlatformFeeSchedule>> {
        Ok(Self::presets())
    }

    async fn fee_schedule(&self, platform_id: &str) -> Result<PlatformFeeSchedule> {
        Self::presets()
            .into_iter()
            .find(|schedule| schedule.id == platform_id)
            .ok_or_else(|| {
                warn!("fee schedule requested for unknown platform '{platform_id}'");
                ValidationError::InvalidInput(format!("unknown platform '{platform_id}'")).into()
            })
    }
}
