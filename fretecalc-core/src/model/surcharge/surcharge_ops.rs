use super::EmptyLeg;
use crate::util::money_ops;
use rust_decimal::Decimal;

/// GRIS (gerenciamento de risco) surcharge: a percentage of the declared
/// cargo value. absent rate or cargo value degrades to zero.
pub fn gris_value(cargo_value: Decimal, gris_rate: Decimal) -> Decimal {
    money_ops::percent_of(cargo_value, gris_rate)
}

/// ADV (ad valorem) surcharge: a percentage of the declared cargo value.
pub fn adv_value(cargo_value: Decimal, adv_rate: Decimal) -> Decimal {
    money_ops::percent_of(cargo_value, adv_rate)
}

/// total empty-kilometer repositioning cost across the pickup and
/// delivery legs.
pub fn empty_km_total(pickup: Option<&EmptyLeg>, delivery: Option<&EmptyLeg>) -> Decimal {
    leg_value(pickup) + leg_value(delivery)
}

/// value of a single optional leg; an absent leg costs nothing.
pub fn leg_value(leg: Option<&EmptyLeg>) -> Decimal {
    leg.map(EmptyLeg::value).unwrap_or_default()
}
