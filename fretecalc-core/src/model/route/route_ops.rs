use super::{RouteType, TaxInfo, TaxRegime};
use crate::model::table::{self, Region, State};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// ISS rate for municipal transport services.
pub const ISS_RATE: Decimal = dec!(5);
/// reduced ICMS rate for shipments from the Norte/Nordeste/Centro-Oeste
/// regions into Sul/Sudeste.
pub const ICMS_REDUCED_RATE: Decimal = dec!(7);
/// standard ICMS rate for every other ICMS-applicable combination.
pub const ICMS_STANDARD_RATE: Decimal = dec!(12);

fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

/// classifies a route from its origin and destination.
///
/// state and city comparisons are case-insensitive and whitespace
/// trimmed, so callers can pass raw form input. a route is municipal
/// only when both cities are present and equal within the same state;
/// with a missing city the route degrades to intrastate rather than
/// silently qualifying for the lower municipal (ISS) treatment.
///
/// # Arguments
///
/// * `origin_state` - two-letter origin state code
/// * `origin_city` - origin city name
/// * `dest_state` - two-letter destination state code
/// * `dest_city` - destination city name
///
/// # Returns
///
/// the route classification; `Unknown` when either state code does not
/// resolve
pub fn classify_route(
    origin_state: &str,
    origin_city: &str,
    dest_state: &str,
    dest_city: &str,
) -> RouteType {
    let origin = State::from_code(origin_state);
    let destination = State::from_code(dest_state);
    let (origin, destination) = match (origin, destination) {
        (Some(o), Some(d)) => (o, d),
        _ => return RouteType::Unknown,
    };
    if origin != destination {
        return RouteType::Interstate;
    }
    let origin_city = normalize_city(origin_city);
    let dest_city = normalize_city(dest_city);
    if !origin_city.is_empty() && origin_city == dest_city {
        RouteType::Municipal
    } else {
        RouteType::Intrastate
    }
}

/// resolves the tax treatment of a route.
///
/// municipal routes are ISS services at a fixed 5%. intrastate and
/// interstate routes fall under ICMS: 7% when the origin region is
/// Norte, Nordeste or Centro-Oeste and the destination region is Sul or
/// Sudeste, 12% otherwise. routes with an unresolvable state come back
/// as `TaxRegime::Unknown` at rate zero so the caller can flag the
/// incomplete input instead of miscalculating tax.
pub fn tax_info(
    origin_state: &str,
    origin_city: &str,
    dest_state: &str,
    dest_city: &str,
) -> TaxInfo {
    let route_type = classify_route(origin_state, origin_city, dest_state, dest_city);
    match route_type {
        RouteType::Unknown => unknown_tax_info(),
        RouteType::Municipal => TaxInfo {
            regime: TaxRegime::Iss,
            rate: ISS_RATE,
            description: format!(
                "ISS at {ISS_RATE}% for transport service within the municipality of {}",
                origin_city.trim()
            ),
            toll_exempt_from_base: table::toll_exempt_origin_code(origin_state),
        },
        RouteType::Intrastate | RouteType::Interstate => {
            // classify_route already resolved both codes, so re-parsing
            // cannot fail; the zero-rate arm keeps the match total anyway
            match (State::from_code(origin_state), State::from_code(dest_state)) {
                (Some(origin), Some(destination)) => {
                    let (rate, description) = icms_rate(origin, destination);
                    TaxInfo {
                        regime: TaxRegime::Icms,
                        rate,
                        description,
                        toll_exempt_from_base: table::is_toll_exempt_from_icms(origin),
                    }
                }
                _ => unknown_tax_info(),
            }
        }
    }
}

/// the explicit classification for incomplete input: never a silent
/// default to either real regime.
fn unknown_tax_info() -> TaxInfo {
    TaxInfo {
        regime: TaxRegime::Unknown,
        rate: Decimal::ZERO,
        description: String::from(
            "origin or destination state not recognized; tax regime cannot be determined",
        ),
        toll_exempt_from_base: false,
    }
}

/// selects the ICMS rate for a resolved origin/destination pair and
/// describes the rule that fired.
fn icms_rate(origin: State, destination: State) -> (Decimal, String) {
    let origin_region = origin.region();
    let destination_region = destination.region();
    let reduced_origin = matches!(
        origin_region,
        Region::Norte | Region::Nordeste | Region::CentroOeste
    );
    let reduced_destination = matches!(destination_region, Region::Sul | Region::Sudeste);
    if reduced_origin && reduced_destination {
        let description = format!(
            "ICMS at the reduced interstate rate of {ICMS_REDUCED_RATE}%: origin {origin} ({origin_region}) to destination {destination} ({destination_region})"
        );
        (ICMS_REDUCED_RATE, description)
    } else {
        let description = format!(
            "ICMS at the standard rate of {ICMS_STANDARD_RATE}%: origin {origin} ({origin_region}) to destination {destination} ({destination_region})"
        );
        (ICMS_STANDARD_RATE, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_city_is_municipal() {
        let result = classify_route("PR", "Curitiba", "PR", "Curitiba");
        assert_eq!(result, RouteType::Municipal);
    }

    #[test]
    fn test_city_comparison_normalized() {
        let result = classify_route("pr", "  CURITIBA ", "PR ", "curitiba");
        assert_eq!(result, RouteType::Municipal);
    }

    #[test]
    fn test_same_state_different_city_is_intrastate() {
        let result = classify_route("PR", "Curitiba", "PR", "Londrina");
        assert_eq!(result, RouteType::Intrastate);
    }

    #[test]
    fn test_different_state_is_interstate() {
        let result = classify_route("PR", "Curitiba", "SP", "São Paulo");
        assert_eq!(result, RouteType::Interstate);
    }

    #[test]
    fn test_empty_state_is_unknown_not_municipal() {
        // both sides empty compare equal; the classifier must still
        // refuse to call this municipal
        let result = classify_route("", "", "", "");
        assert_eq!(result, RouteType::Unknown);
    }

    #[test]
    fn test_empty_city_same_state_is_not_municipal() {
        let result = classify_route("PR", "", "PR", "");
        assert_eq!(result, RouteType::Intrastate);
    }

    #[test]
    fn test_municipal_tax_is_iss_at_five_percent() {
        let info = tax_info("PR", "Curitiba", "PR", "Curitiba");
        assert_eq!(info.regime, TaxRegime::Iss);
        assert_eq!(info.rate, ISS_RATE);
        assert!(info.description.contains("ISS"));
    }

    #[test]
    fn test_interstate_north_to_south_is_reduced_rate() {
        let info = tax_info("BA", "Salvador", "SP", "Campinas");
        assert_eq!(info.regime, TaxRegime::Icms);
        assert_eq!(info.rate, ICMS_REDUCED_RATE);
        assert!(info.description.contains("reduced"));
    }

    #[test]
    fn test_interstate_south_to_north_is_standard_rate() {
        let info = tax_info("SP", "Campinas", "BA", "Salvador");
        assert_eq!(info.regime, TaxRegime::Icms);
        assert_eq!(info.rate, ICMS_STANDARD_RATE);
        assert!(info.description.contains("standard"));
    }

    #[test]
    fn test_intrastate_is_standard_rate() {
        let info = tax_info("SP", "Campinas", "SP", "Santos");
        assert_eq!(info.regime, TaxRegime::Icms);
        assert_eq!(info.rate, ICMS_STANDARD_RATE);
    }

    #[test]
    fn test_unknown_state_yields_unknown_regime() {
        let info = tax_info("", "Curitiba", "PR", "Londrina");
        assert_eq!(info.regime, TaxRegime::Unknown);
        assert_eq!(info.rate, Decimal::ZERO);
        assert!(!info.toll_exempt_from_base);
    }

    #[test]
    fn test_parana_origin_sets_toll_exemption_flag() {
        let info = tax_info("PR", "Curitiba", "SP", "São Paulo");
        assert!(info.toll_exempt_from_base);
        let info = tax_info("SP", "São Paulo", "PR", "Curitiba");
        assert!(!info.toll_exempt_from_base);
    }
}
