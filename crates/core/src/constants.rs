use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display figures
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Floor applied to suggested customs declaration values
pub const DECLARATION_VALUE_FLOOR: Decimal = dec!(10);
