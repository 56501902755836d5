//! Pure profit and fee calculations.
//!
//! Two deliberately distinct formulas live here. `calculate_pricing` treats
//! tax as a separately reported figure and includes payment-processing fees;
//! `calculate_cost_breakdown` deducts tax as a cost and has no payment-fee
//! term. The two views are not numerically reconcilable and must not be
//! merged without a product decision, since users rely on the figures each
//! one displays today.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::pricing_model::{
    CostBreakdownInput, CostLine, MarginAssessment, MarginBand, PricingInput, PricingResult,
};

/// Computes the full profit picture for a listing.
///
/// Total function over non-negative inputs: a zero total revenue yields a 0%
/// margin and a zero capital outlay yields a 0% ROI rather than a division
/// error. `quantity` is clamped to at least 1. Nothing is rounded here;
/// rounding fee amounts would make the result non-linear in `quantity`.
pub fn calculate_pricing(input: &PricingInput) -> PricingResult {
    let quantity = Decimal::from(input.quantity.max(1));

    let total_revenue = (input.selling_price + input.shipping_charge_to_customer) * quantity;
    let platform_fee_amount = total_revenue * input.platform_fee_rate / Decimal::ONE_HUNDRED;
    let payment_fee_amount =
        input.payment_fixed_fee + total_revenue * input.payment_fee_rate / Decimal::ONE_HUNDRED;
    let tax_amount = total_revenue * input.tax_rate / Decimal::ONE_HUNDRED;

    let capital_outlay = input.purchase_price * quantity + input.shipping_cost_incurred;
    let total_costs = capital_outlay + platform_fee_amount + payment_fee_amount;
    let net_profit = total_revenue - total_costs;

    let profit_margin_percent = if total_revenue.is_zero() {
        Decimal::ZERO
    } else {
        net_profit / total_revenue * Decimal::ONE_HUNDRED
    };
    let roi_percent = if capital_outlay.is_zero() {
        Decimal::ZERO
    } else {
        net_profit / capital_outlay * Decimal::ONE_HUNDRED
    };

    PricingResult {
        total_revenue,
        platform_fee_amount,
        payment_fee_amount,
        tax_amount,
        total_costs,
        net_profit,
        profit_margin_percent,
        roi_percent,
    }
}

/// Computes the per-item cost breakdown as five line items in fixed order:
/// Product Cost, Shipping, Platform Fee, Tax, Profit.
///
/// Unlike [`calculate_pricing`], tax is deducted as a cost here and there is
/// no payment-processing term; quantities do not apply. The profit line can
/// go negative.
pub fn calculate_cost_breakdown(input: &CostBreakdownInput) -> Vec<CostLine> {
    let platform_fee_amount = input.selling_price * input.platform_fee_rate / Decimal::ONE_HUNDRED;
    let tax_amount = input.selling_price * input.tax_rate / Decimal::ONE_HUNDRED;
    let profit = input.selling_price
        - (input.product_cost + input.shipping_cost + platform_fee_amount + tax_amount);

    vec![
        CostLine {
            label: "Product Cost".to_string(),
            amount: input.product_cost,
        },
        CostLine {
            label: "Shipping".to_string(),
            amount: input.shipping_cost,
        },
        CostLine {
            label: "Platform Fee".to_string(),
            amount: platform_fee_amount,
        },
        CostLine {
            label: "Tax".to_string(),
            amount: tax_amount,
        },
        CostLine {
            label: "Profit".to_string(),
            amount: profit,
        },
    ]
}

/// Bands a profit margin percentage for the recommendation strip.
/// Negative margins fall in the lowest band.
pub fn assess_margin(margin_percent: Decimal) -> MarginAssessment {
    let (band, message) = if margin_percent < dec!(10) {
        (
            MarginBand::Low,
            "Consider increasing your selling price or finding a cheaper supplier.",
        )
    } else if margin_percent < dec!(20) {
        (
            MarginBand::Fair,
            "Your profit margin is acceptable but could be improved.",
        )
    } else if margin_percent < dec!(30) {
        (
            MarginBand::Good,
            "Good profit margin! Consider selling in higher quantities.",
        )
    } else {
        (
            MarginBand::Excellent,
            "Excellent profit margin! This is a high-performing product.",
        )
    };

    MarginAssessment {
        band,
        message: message.to_string(),
    }
}
