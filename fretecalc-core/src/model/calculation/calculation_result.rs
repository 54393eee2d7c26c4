use crate::model::route::{RouteType, TaxInfo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// the landed-cost breakdown for one freight query. every monetary field
/// is rounded to 2 decimal places here, at the output boundary; the
/// stages feeding it keep full precision.
///
/// the toll value appears twice on purpose: it is conditionally part of
/// `tax_base` (non-municipal route, origin not toll-exempt) but always
/// part of `total_value`. these are separate accumulations.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CalculationResult {
    /// regulatory floor freight for this route and vehicle
    pub antt_min_freight: Decimal,
    /// freight base actually charged: the ANTT minimum or the declared value
    pub freight_value: Decimal,
    pub gris_value: Decimal,
    pub adv_value: Decimal,
    pub toll_value: Decimal,
    pub unloading_value: Decimal,
    pub empty_pickup_value: Decimal,
    pub empty_delivery_value: Decimal,
    pub empty_km_total: Decimal,
    /// origin-state decree exemption of tolls from the ICMS base
    pub toll_exempt_from_icms_base: bool,
    pub route_type: RouteType,
    pub tax: TaxInfo,
    pub tax_base: Decimal,
    pub tax_value: Decimal,
    pub total_value: Decimal,
    /// total landed value per kilogram of cargo; zero when weight is
    /// zero or absent
    pub value_per_kg: Decimal,
}
