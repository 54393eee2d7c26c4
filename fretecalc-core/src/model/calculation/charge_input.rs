use crate::model::surcharge::EmptyLeg;
use crate::util::parse_ops;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// the commercial half of a freight query: declared charges, insurance
/// rates and repositioning legs. every numeric field follows the
/// parse-with-default policy, so a half-filled quotation form still
/// produces a result.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChargeInput {
    /// declared base freight; ignored when `use_antt_min_freight` is set
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub base_freight: Decimal,
    /// when true, the ANTT regulatory minimum replaces the declared base
    #[serde(default)]
    pub use_antt_min_freight: bool,
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub toll_value: Decimal,
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub unloading_value: Decimal,
    /// GRIS rate in percent of declared cargo value
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub gris_rate: Decimal,
    /// ADV rate in percent of declared cargo value
    #[serde(default, deserialize_with = "parse_ops::deserialize_lenient_decimal")]
    pub adv_rate: Decimal,
    #[serde(default)]
    pub empty_pickup_leg: Option<EmptyLeg>,
    #[serde(default)]
    pub empty_delivery_leg: Option<EmptyLeg>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_are_neutral() {
        let charges = ChargeInput::default();
        assert_eq!(charges.base_freight, Decimal::ZERO);
        assert!(!charges.use_antt_min_freight);
        assert!(charges.empty_pickup_leg.is_none());
    }

    #[test]
    fn test_lenient_deserialization() {
        let charges: ChargeInput = serde_json::from_str(
            r#"{
                "base_freight": "3.500,00",
                "toll_value": 120.5,
                "gris_rate": "0,3",
                "adv_rate": null,
                "empty_pickup_leg": {"flat_value": 250}
            }"#,
        )
        .expect("lenient charge input");
        assert_eq!(charges.base_freight, dec!(3500.00));
        assert_eq!(charges.toll_value, dec!(120.5));
        assert_eq!(charges.gris_rate, dec!(0.3));
        assert_eq!(charges.adv_rate, Decimal::ZERO);
        assert_eq!(
            charges.empty_pickup_leg.map(|leg| leg.value()),
            Some(dec!(250))
        );
    }
}
