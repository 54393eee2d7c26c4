use super::{CalculationResult, ChargeInput, RouteInput};
use crate::model::antt::antt_ops;
use crate::model::route::{route_ops, RouteType, TaxRegime};
use crate::model::surcharge::surcharge_ops;
use crate::model::table;
use crate::util::money_ops;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// runs the full freight calculation for one shipment: route
/// classification and tax resolution, the ANTT minimum freight,
/// GRIS/ADV and repositioning surcharges, the conditional toll
/// treatment, and the final landed cost.
///
/// the computation is a pure function of its inputs and the static rate
/// tables; identical inputs always produce an identical result. it
/// never fails: incomplete input degrades per field and unknown states
/// surface in `route_type` and `tax.regime`.
///
/// # Arguments
///
/// * `route` - origin/destination, cargo and vehicle description
/// * `charges` - declared charges, insurance rates and repositioning legs
///
/// # Returns
///
/// the landed-cost breakdown, monetary fields rounded to 2 decimal
/// places
pub fn calculate(route: &RouteInput, charges: &ChargeInput) -> CalculationResult {
    let axles = route.effective_axles();
    warn_on_overload(route);

    let antt_min_freight =
        antt_ops::minimum_freight(route.distance_km, route.cargo_category, axles);
    let freight_value = if charges.use_antt_min_freight {
        antt_min_freight
    } else {
        charges.base_freight
    };

    let gris_value = surcharge_ops::gris_value(route.cargo_value, charges.gris_rate);
    let adv_value = surcharge_ops::adv_value(route.cargo_value, charges.adv_rate);
    let empty_pickup_value = surcharge_ops::leg_value(charges.empty_pickup_leg.as_ref());
    let empty_delivery_value = surcharge_ops::leg_value(charges.empty_delivery_leg.as_ref());
    let empty_km_total = empty_pickup_value + empty_delivery_value;

    let route_type = route_ops::classify_route(
        &route.origin_state,
        &route.origin_city,
        &route.destination_state,
        &route.destination_city,
    );
    let tax = route_ops::tax_info(
        &route.origin_state,
        &route.origin_city,
        &route.destination_state,
        &route.destination_city,
    );
    let toll_exempt = table::toll_exempt_origin_code(&route.origin_state);

    // tolls join the tax base only on non-municipal routes whose origin
    // state does not exempt them; they always join the total below
    let mut tax_base =
        freight_value + gris_value + adv_value + charges.unloading_value + empty_km_total;
    let toll_in_base = route_type != RouteType::Municipal && !toll_exempt;
    if toll_in_base {
        tax_base += charges.toll_value;
    }

    let tax_value = tax_value(tax_base, tax.rate, tax.regime);
    let total_value = freight_value
        + gris_value
        + adv_value
        + charges.toll_value
        + charges.unloading_value
        + empty_km_total
        + tax_value;
    let value_per_kg = if route.cargo_weight_kg <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        total_value / route.cargo_weight_kg
    };

    CalculationResult {
        antt_min_freight: money_ops::round_currency(antt_min_freight),
        freight_value: money_ops::round_currency(freight_value),
        gris_value: money_ops::round_currency(gris_value),
        adv_value: money_ops::round_currency(adv_value),
        toll_value: money_ops::round_currency(charges.toll_value),
        unloading_value: money_ops::round_currency(charges.unloading_value),
        empty_pickup_value: money_ops::round_currency(empty_pickup_value),
        empty_delivery_value: money_ops::round_currency(empty_delivery_value),
        empty_km_total: money_ops::round_currency(empty_km_total),
        toll_exempt_from_icms_base: toll_exempt,
        route_type,
        tax,
        tax_base: money_ops::round_currency(tax_base),
        tax_value: money_ops::round_currency(tax_value),
        total_value: money_ops::round_currency(total_value),
        value_per_kg: money_ops::round_currency(value_per_kg),
    }
}

/// ICMS is embedded in the price, so its value is the gross-up
/// difference `base / (1 - rate/100) - base`; a plain `base × rate`
/// understates it. ISS is charged on top as a straight percentage.
/// the unknown regime contributes no tax.
pub fn tax_value(tax_base: Decimal, rate: Decimal, regime: TaxRegime) -> Decimal {
    match regime {
        TaxRegime::Icms => {
            if rate >= dec!(100) {
                log::warn!("ICMS rate {rate}% has no gross-up solution, taxing zero");
                return Decimal::ZERO;
            }
            tax_base / (Decimal::ONE - rate / dec!(100)) - tax_base
        }
        TaxRegime::Iss => money_ops::percent_of(tax_base, rate),
        TaxRegime::Unknown => Decimal::ZERO,
    }
}

/// logs when declared cargo weight exceeds the catalog payload capacity
/// of the selected vehicle. quotation proceeds regardless; the warning
/// exists for the consultant reviewing the proposal.
fn warn_on_overload(route: &RouteInput) {
    if let Some(spec) = route.vehicle.as_deref().and_then(table::vehicle_spec) {
        let capacity = Decimal::from(spec.capacity_kg);
        if route.cargo_weight_kg > capacity {
            log::warn!(
                "declared cargo weight {} kg exceeds {} payload capacity of {} kg",
                route.cargo_weight_kg,
                spec.label,
                capacity
            );
        }
    }
}
