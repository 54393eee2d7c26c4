use crate::model::table::{self, CargoCategory};
use crate::util::parse_ops;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// the shipment half of a freight query: where the cargo travels, what
/// it is and what carries it. numeric fields accept form-typed strings
/// and degrade to zero when absent or non-numeric; state codes are kept
/// raw and resolved by the route classifier so incomplete input surfaces
/// as an explicit unknown classification.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteInput {
    #[serde(default)]
    pub origin_state: String,
    #[serde(default)]
    pub origin_city: String,
    #[serde(default)]
    pub destination_state: String,
    #[serde(default)]
    pub destination_city: String,
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub distance_km: Decimal,
    #[serde(default)]
    pub cargo_category: CargoCategory,
    /// acondicionamento label, informational only
    #[serde(default)]
    pub packaging: Option<String>,
    /// vehicle catalog label, used to resolve axles when absent and to
    /// warn on payload overload
    #[serde(default)]
    pub vehicle: Option<String>,
    #[serde(default)]
    pub axles: Option<u8>,
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub cargo_value: Decimal,
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub cargo_weight_kg: Decimal,
}

impl RouteInput {
    /// resolves the effective axle count: an explicit count wins, then
    /// the vehicle catalog, then the lightest listed configuration.
    pub fn effective_axles(&self) -> u8 {
        if let Some(axles) = self.axles {
            return axles;
        }
        if let Some(spec) = self.vehicle.as_deref().and_then(table::vehicle_spec) {
            return spec.axles;
        }
        let fallback = table::listed_axle_counts().first().copied().unwrap_or(2);
        log::warn!(
            "no axle count or known vehicle on route input, assuming {fallback} axles"
        );
        fallback
    }
}
