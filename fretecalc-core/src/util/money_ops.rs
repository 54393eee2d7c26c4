use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// rounds a monetary value to 2 decimal places, midpoint away from zero.
/// intermediate calculation stages keep full precision; this is applied
/// once, when a value crosses the result boundary, so rounding error does
/// not compound across the GRIS/ADV/tax stages.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// applies a percentage rate to a value: `value × rate / 100`.
pub fn percent_of(value: Decimal, rate: Decimal) -> Decimal {
    value * rate / dec!(100)
}
