use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::pricing::{calculate_pricing, PricingResult};

use super::platforms_model::{PlatformFeeSchedule, PlatformQuote};
use super::platforms_traits::{MarketplaceConnector, PlatformServiceTrait};

/// Prices listings against a marketplace's fee schedule.
pub struct PlatformService {
    connector: Arc<dyn MarketplaceConnector>,
}

impl PlatformService {
    pub fn new(connector: Arc<dyn MarketplaceConnector>) -> Self {
        PlatformService { connector }
    }
}

#[async_trait]
impl PlatformServiceTrait for PlatformService {
    async fn list_platforms(&self) -> Result<Vec<PlatformFeeSchedule>> {
        self.connector.list_platforms().await
    }

    async fn pricing_for_platform(
        &self,
        platform_id: &str,
        quote: &PlatformQuote,
    ) -> Result<PricingResult> {
        quote.validate()?;
        let schedule = self.connector.fee_schedule(platform_id).await?;
        debug!(
            "pricing quote against platform '{}' ({}% + {} + {}%)",
            schedule.id,
            schedule.platform_fee_rate,
            schedule.payment_fixed_fee,
            schedule.payment_fee_rate
        );
        let input = quote.with_schedule(&schedule);
        input.validate()?;
        Ok(calculate_pricing(&input))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::errors::Error;
    use crate::platforms::platforms_connector::MockMarketplaceConnector;
    use crate::pricing::PricingInput;

    fn service() -> PlatformService {
        PlatformService::new(Arc::new(MockMarketplaceConnector::new()))
    }

    fn quote() -> PlatformQuote {
        PlatformQuote {
            purchase_price: dec!(45),
            quantity: 1,
            selling_price: dec!(85),
            shipping_cost_incurred: dec!(5.99),
            shipping_charge_to_customer: dec!(8.99),
            tax_rate: dec!(20),
        }
    }

    #[tokio::test]
    async fn catalog_lists_the_three_marketplaces() {
        let platforms = service().list_platforms().await.unwrap();
        let ids: Vec<&str> = platforms.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["ebay", "vinted", "depop"]);
    }

    #[tokio::test]
    async fn ebay_pricing_matches_a_manually_filled_input() {
        let result = service()
            .pricing_for_platform("ebay", &quote())
            .await
            .unwrap();

        let manual = calculate_pricing(&PricingInput {
            purchase_price: dec!(45),
            quantity: 1,
            selling_price: dec!(85),
            shipping_cost_incurred: dec!(5.99),
            shipping_charge_to_customer: dec!(8.99),
            platform_fee_rate: dec!(12.8),
            payment_fixed_fee: dec!(0.30),
            payment_fee_rate: dec!(2.5),
            tax_rate: dec!(20),
        });
        assert_eq!(result, manual);
    }

    #[tokio::test]
    async fn unknown_platform_is_a_validation_error() {
        let err = service()
            .pricing_for_platform("etsy", &quote())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn negative_quote_is_rejected_before_the_connector_is_hit() {
        let bad = PlatformQuote {
            purchase_price: dec!(-45),
            ..quote()
        };
        let err = service()
            .pricing_for_platform("ebay", &bad)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
