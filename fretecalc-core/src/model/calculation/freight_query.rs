use super::{calculation_ops, CalculationResult, ChargeInput, RouteInput};
use crate::model::InputError;
use serde::{Deserialize, Serialize};

/// the JSON envelope callers submit: a shipment description plus its
/// declared charges. both halves default to empty, since a quotation
/// form starts blank; only a structurally malformed envelope (wrong
/// JSON shape, not merely missing fields) is rejected.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FreightQuery {
    #[serde(default)]
    pub route: RouteInput,
    #[serde(default)]
    pub charges: ChargeInput,
}

impl FreightQuery {
    /// runs the calculation engine for this query.
    pub fn calculate(&self) -> CalculationResult {
        calculation_ops::calculate(&self.route, &self.charges)
    }
}

impl TryFrom<&serde_json::Value> for FreightQuery {
    type Error = InputError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value.clone())
            .map_err(|e| InputError::MalformedQuery(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::TaxRegime;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_query_from_json_value() {
        let value = json!({
            "route": {
                "origin_state": "PR",
                "origin_city": "Curitiba",
                "destination_state": "PR",
                "destination_city": "Curitiba",
                "distance_km": 12,
                "cargo_weight_kg": 800
            },
            "charges": {
                "base_freight": "350,00"
            }
        });
        let query = FreightQuery::try_from(&value).expect("well-formed query");
        let result = query.calculate();
        assert_eq!(result.tax.regime, TaxRegime::Iss);
        assert_eq!(result.freight_value, dec!(350.00));
    }

    #[test]
    fn test_empty_envelope_is_accepted() {
        let query = FreightQuery::try_from(&json!({})).expect("blank form");
        let result = query.calculate();
        assert_eq!(result.total_value, dec!(0.00));
    }

    #[test]
    fn test_malformed_envelope_is_rejected() {
        let err = FreightQuery::try_from(&json!({"route": {"distance_km": [1, 2]}}));
        assert!(matches!(err, Err(InputError::MalformedQuery(_))));
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let query = FreightQuery::try_from(&json!({
            "route": {
                "origin_state": "SP",
                "origin_city": "Campinas",
                "destination_state": "BA",
                "destination_city": "Salvador",
                "distance_km": 1962,
                "axles": 5,
                "cargo_value": 10000,
                "cargo_weight_kg": 25000
            },
            "charges": {"use_antt_min_freight": true, "gris_rate": 0.3}
        }))
        .expect("well-formed query");
        let result = query.calculate();
        let encoded = serde_json::to_value(&result).expect("serializable result");
        assert_eq!(encoded["route_type"], json!("interstate"));
        assert!(encoded["tax"]["description"]
            .as_str()
            .expect("description text")
            .contains("ICMS"));
    }
}
