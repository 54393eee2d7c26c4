use crate::util::parse_ops;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// an empty-kilometer repositioning leg (KM vazia): the cost of moving
/// the vehicle empty before pickup or after delivery. a leg is billed
/// either per kilometer or as a flat fee. when a caller supplies both,
/// the flat value wins deterministically; this is a documented policy
/// for ambiguous form input, not an error.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyLeg {
    #[serde(
        default,
        deserialize_with = "parse_ops::deserialize_lenient_decimal_opt"
    )]
    pub flat_value: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "parse_ops::deserialize_lenient_decimal_opt"
    )]
    pub rate_per_km: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "parse_ops::deserialize_lenient_decimal_opt"
    )]
    pub distance_km: Option<Decimal>,
}

impl EmptyLeg {
    /// the leg's value: the flat fee when present, otherwise
    /// rate × kilometers with absent parts degrading to zero.
    pub fn value(&self) -> Decimal {
        match self.flat_value {
            Some(flat) => flat,
            None => {
                self.rate_per_km.unwrap_or_default() * self.distance_km.unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_leg_value() {
        let leg = EmptyLeg {
            flat_value: None,
            rate_per_km: Some(dec!(5)),
            distance_km: Some(dec!(40)),
        };
        assert_eq!(leg.value(), dec!(200));
    }

    #[test]
    fn test_flat_leg_value() {
        let leg = EmptyLeg {
            flat_value: Some(dec!(250)),
            rate_per_km: None,
            distance_km: None,
        };
        assert_eq!(leg.value(), dec!(250));
    }

    #[test]
    fn test_flat_takes_precedence_over_unit() {
        let leg = EmptyLeg {
            flat_value: Some(dec!(250)),
            rate_per_km: Some(dec!(5)),
            distance_km: Some(dec!(40)),
        };
        assert_eq!(leg.value(), dec!(250));
    }

    #[test]
    fn test_absent_parts_degrade_to_zero() {
        assert_eq!(EmptyLeg::default().value(), Decimal::ZERO);
        let rate_only = EmptyLeg {
            flat_value: None,
            rate_per_km: Some(dec!(5)),
            distance_km: None,
        };
        assert_eq!(rate_only.value(), Decimal::ZERO);
    }

    #[test]
    fn test_lenient_deserialization() {
        let leg: EmptyLeg = serde_json::from_str(
            r#"{"flat_value": null, "rate_per_km": "2,50", "distance_km": 100}"#,
        )
        .expect("lenient leg fields");
        assert_eq!(leg.value(), dec!(250));
    }
}
