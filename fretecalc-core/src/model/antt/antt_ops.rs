use crate::model::table::{self, CargoCategory};
use rust_decimal::Decimal;

/// computes the ANTT regulatory minimum freight for a shipment:
/// `CC + CCD × distance`, with CC and CCD taken from the coefficient
/// table for the vehicle's axle count and cargo category.
///
/// the result keeps full decimal precision; rounding to currency
/// precision happens once, at the calculation result boundary. a
/// negative distance is tolerated as transient form input and clamps to
/// zero, which leaves the fixed load/unload floor in place.
///
/// # Arguments
///
/// * `distance_km` - route distance in kilometers
/// * `category` - ANTT cargo category
/// * `axles` - axle count of the vehicle configuration
///
/// # Returns
///
/// the regulatory floor freight value in R$
pub fn minimum_freight(distance_km: Decimal, category: CargoCategory, axles: u8) -> Decimal {
    let distance = if distance_km < Decimal::ZERO {
        log::warn!("negative distance {distance_km} km clamped to zero for ANTT minimum freight");
        Decimal::ZERO
    } else {
        distance_km
    };
    let coefficient = table::coefficient_for(axles, category);
    coefficient.load_unload_cost + coefficient.displacement_cost_per_km * distance
}
