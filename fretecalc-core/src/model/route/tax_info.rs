use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// tax regime applicable to a route. `Unknown` flags incomplete input
/// for the caller and never defaults to either real regime.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    Icms,
    Iss,
    Unknown,
}

/// the resolved tax treatment of a route: regime, applicable rate in
/// percent, a text description of the regulatory rule that fired (kept
/// for proposal auditability), and whether the origin state excludes
/// tolls from the ICMS base.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TaxInfo {
    pub regime: TaxRegime,
    pub rate: Decimal,
    pub description: String,
    pub toll_exempt_from_base: bool,
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self)
            .unwrap_or(String::from(""))
            .replace('\"', "");
        write!(f, "{s}")
    }
}
