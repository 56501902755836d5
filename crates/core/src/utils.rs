//! Shared validation helpers for boundary checks.

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Rejects negative monetary amounts at the engine boundary.
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(
            ValidationError::InvalidInput(format!("{field} must not be negative")).into(),
        );
    }
    Ok(())
}

/// Rejects percentage rates outside the 0..=100 range.
pub(crate) fn ensure_rate_in_range(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(
            ValidationError::InvalidInput(format!("{field} must be between 0 and 100")).into(),
        );
    }
    Ok(())
}
