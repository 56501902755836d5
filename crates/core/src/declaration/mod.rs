//! Customs declaration module - value suggestions per declaration strategy.

mod declaration_calculator;
mod declaration_model;


pub use declaration_calculator::suggest_declaration_value;
pub use declaration_model::{
    CustomsRisk, DeclarationItem, DeclarationStrategy, DeclarationSuggestion, StrategyInfo,
};
