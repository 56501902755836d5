//! Platform domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::pricing::PricingInput;
use crate::utils::{ensure_non_negative, ensure_rate_in_range};

/// Fee structure a marketplace applies to each sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformFeeSchedule {
    pub id: String,
    pub name: String,
    /// Percentage (0-100) taken on the total sale value.
    pub platform_fee_rate: Decimal,
    /// Flat per-transaction payment-processing fee.
    pub payment_fixed_fee: Decimal,
    /// Percentage (0-100) the payment processor takes on the total sale value.
    pub payment_fee_rate: Decimal,
}

/// A pricing request with the fee fields left to a platform's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformQuote {
    pub purchase_price: Decimal,
    pub quantity: u32,
    pub selling_price: Decimal,
    pub shipping_cost_incurred: Decimal,
    pub shipping_charge_to_customer: Decimal,
    pub tax_rate: Decimal,
}

impl PlatformQuote {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("purchasePrice", self.purchase_price)?;
        ensure_non_negative("sellingPrice", self.selling_price)?;
        ensure_non_negative("shippingCostIncurred", self.shipping_cost_incurred)?;
        ensure_non_negative("shippingChargeToCustomer", self.shipping_charge_to_customer)?;
        ensure_rate_in_range("taxRate", self.tax_rate)?;
        Ok(())
    }

    /// Fills the fee fields from a platform's schedule.
    pub fn with_schedule(&self, schedule: &PlatformFeeSchedule) -> PricingInput {
        PricingInput {
            purchase_price: self.purchase_price,
            quantity: self.quantity,
            selling_price: self.selling_price,
            shipping_cost_incurred: self.shipping_cost_incurred,
            shipping_charge_to_customer: self.shipping_charge_to_customer,
            platform_fee_rate: schedule.platform_fee_rate,
            payment_fixed_fee: schedule.payment_fixed_fee,
            payment_fee_rate: schedule.payment_fee_rate,
            tax_rate: self.tax_rate,
        }
    }
}
