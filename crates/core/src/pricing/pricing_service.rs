use log::debug;
use rust_decimal::Decimal;

use crate::declaration::{
    suggest_declaration_value, DeclarationItem, DeclarationStrategy, DeclarationSuggestion,
};
use crate::errors::Result;
use crate::utils::ensure_non_negative;

use super::pricing_calculator::{assess_margin, calculate_cost_breakdown, calculate_pricing};
use super::pricing_model::{
    CostBreakdownInput, CostLine, MarginAssessment, PricingInput, PricingResult,
};
use super::pricing_traits::PricingServiceTrait;

/// Stateless pricing engine. Validates at the boundary, then delegates to the
/// pure calculators.
#[derive(Debug, Default, Clone, Copy)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        PricingService
    }
}

impl PricingServiceTrait for PricingService {
    fn compute_pricing(&self, input: &PricingInput) -> Result<PricingResult> {
        input.validate()?;
        let result = calculate_pricing(input);
        debug!(
            "computed pricing: revenue={} profit={} margin={}%",
            result.total_revenue, result.net_profit, result.profit_margin_percent
        );
        Ok(result)
    }

    fn compute_cost_breakdown(&self, input: &CostBreakdownInput) -> Result<Vec<CostLine>> {
        input.validate()?;
        Ok(calculate_cost_breakdown(input))
    }

    fn suggest_declaration_value(
        &self,
        items: &[DeclarationItem],
        strategy: DeclarationStrategy,
    ) -> Result<DeclarationSuggestion> {
        for item in items {
            ensure_non_negative("unitCost", item.unit_cost)?;
        }
        Ok(suggest_declaration_value(items, strategy))
    }

    fn assess_margin(&self, margin_percent: Decimal) -> MarginAssessment {
        assess_margin(margin_percent)
    }
}
