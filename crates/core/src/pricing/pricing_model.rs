//! Pricing domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::{ensure_non_negative, ensure_rate_in_range};

/// Inputs for a single listing's profit calculation.
///
/// All monetary fields are per-unit except `shipping_cost_incurred`, which is
/// paid once per order, matching how the fee amounts are charged on the total
/// sale value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    /// Unit cost paid to the supplier.
    pub purchase_price: Decimal,
    pub quantity: u32,
    /// Listed price per unit.
    pub selling_price: Decimal,
    /// Cost the seller pays to ship the order.
    pub shipping_cost_incurred: Decimal,
    /// Amount charged to the buyer for shipping (may be 0).
    pub shipping_charge_to_customer: Decimal,
    /// Percentage (0-100) the platform takes on the total sale value.
    pub platform_fee_rate: Decimal,
    /// Flat per-transaction payment-processing fee.
    pub payment_fixed_fee: Decimal,
    /// Percentage (0-100) the payment processor takes on the total sale value.
    pub payment_fee_rate: Decimal,
    /// Percentage (0-100), e.g. VAT.
    pub tax_rate: Decimal,
}

impl PricingInput {
    /// Boundary validation: negative amounts, out-of-range rates, and a zero
    /// quantity are rejected here so the calculator can stay a total function.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("purchasePrice", self.purchase_price)?;
        ensure_non_negative("sellingPrice", self.selling_price)?;
        ensure_non_negative("shippingCostIncurred", self.shipping_cost_incurred)?;
        ensure_non_negative("shippingChargeToCustomer", self.shipping_charge_to_customer)?;
        ensure_non_negative("paymentFixedFee", self.payment_fixed_fee)?;
        ensure_rate_in_range("platformFeeRate", self.platform_fee_rate)?;
        ensure_rate_in_range("paymentFeeRate", self.payment_fee_rate)?;
        ensure_rate_in_range("taxRate", self.tax_rate)?;
        if self.quantity < 1 {
            return Err(
                ValidationError::InvalidInput("quantity must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Derived profit figures. Always recomputed from a [`PricingInput`], never
/// mutated; no field is rounded, rounding is a display concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub total_revenue: Decimal,
    pub platform_fee_amount: Decimal,
    pub payment_fee_amount: Decimal,
    /// Reported separately; NOT part of `total_costs`.
    pub tax_amount: Decimal,
    pub total_costs: Decimal,
    pub net_profit: Decimal,
    /// 0 when `total_revenue` is 0.
    pub profit_margin_percent: Decimal,
    /// Net profit over capital outlay (purchase + inbound shipping);
    /// 0 when the outlay is 0.
    pub roi_percent: Decimal,
}

/// Inputs for the per-item cost breakdown view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownInput {
    pub selling_price: Decimal,
    pub product_cost: Decimal,
    pub shipping_cost: Decimal,
    /// Percentage (0-100).
    pub platform_fee_rate: Decimal,
    /// Percentage (0-100).
    pub tax_rate: Decimal,
}

impl CostBreakdownInput {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("sellingPrice", self.selling_price)?;
        ensure_non_negative("productCost", self.product_cost)?;
        ensure_non_negative("shippingCost", self.shipping_cost)?;
        ensure_rate_in_range("platformFeeRate", self.platform_fee_rate)?;
        ensure_rate_in_range("taxRate", self.tax_rate)?;
        Ok(())
    }
}

/// One line of the cost breakdown. Line order is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub label: String,
    pub amount: Decimal,
}

/// Margin quality band used for the calculator's recommendation strip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MarginBand {
    Low,
    Fair,
    Good,
    Excellent,
}

/// A margin band together with its advisory message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarginAssessment {
    pub band: MarginBand,
    pub message: String,
}
