//! Pricing module - profit, fee, and margin calculations.

mod pricing_calculator;
mod pricing_model;
mod pricing_service;
mod pricing_traits;


pub use pricing_calculator::{assess_margin, calculate_cost_breakdown, calculate_pricing};
pub use pricing_model::{
    CostBreakdownInput, CostLine, MarginAssessment, MarginBand, PricingInput, PricingResult,
};
pub use pricing_service::PricingService;
pub use pricing_traits::PricingServiceTrait;
