use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DECLARATION_VALUE_FLOOR;

use super::declaration_model::{DeclarationItem, DeclarationStrategy, DeclarationSuggestion};

/// Suggests a customs declaration value for a parcel of sourced items.
///
/// The strategy multiplier is applied to the summed item cost, rounded to a
/// whole amount (half away from zero), and floored at 10. An empty item list
/// therefore suggests the floor. A zero item quantity is treated as 1.
pub fn suggest_declaration_value(
    items: &[DeclarationItem],
    strategy: DeclarationStrategy,
) -> DeclarationSuggestion {
    let total_item_cost: Decimal = items
        .iter()
        .map(|item| item.unit_cost * Decimal::from(item.quantity.max(1)))
        .sum();

    let suggested_value = (total_item_cost * strategy.multiplier())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(DECLARATION_VALUE_FLOOR);

    DeclarationSuggestion {
        strategy,
        total_item_cost,
        suggested_value,
    }
}
