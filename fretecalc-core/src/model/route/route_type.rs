use serde::{Deserialize, Serialize};

/// classification of a shipment route, which selects the tax regime:
/// municipal transport is an ISS service, intrastate and interstate
/// transport fall under ICMS. `Unknown` is the explicit result for an
/// empty or unrecognized origin/destination state, so incomplete form
/// input is never silently taxed as a municipal shipment.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Municipal,
    Intrastate,
    Interstate,
    Unknown,
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self)
            .unwrap_or(String::from(""))
            .replace('\"', "");
        write!(f, "{s}")
    }
}
