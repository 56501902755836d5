use rust_decimal::Decimal;

use crate::declaration::{DeclarationItem, DeclarationStrategy, DeclarationSuggestion};
use crate::errors::Result;
use crate::pricing::pricing_model::{
    CostBreakdownInput, CostLine, MarginAssessment, PricingInput, PricingResult,
};

/// Trait for pricing engine operations.
///
/// All operations are pure and synchronous; implementations must be safe to
/// call per keystroke or per request with no shared mutable state.
pub trait PricingServiceTrait: Send + Sync {
    fn compute_pricing(&self, input: &PricingInput) -> Result<PricingResult>;
    fn compute_cost_breakdown(&self, input: &CostBreakdownInput) -> Result<Vec<CostLine>>;
    fn suggest_declaration_value(
        &self,
        items: &[DeclarationItem],
        strategy: DeclarationStrategy,
    ) -> Result<DeclarationSuggestion>;
    fn assess_margin(&self, margin_percent: Decimal) -> MarginAssessment;
}
