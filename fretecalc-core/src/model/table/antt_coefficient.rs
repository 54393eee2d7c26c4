use super::CargoCategory;
use itertools::Itertools;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// one row of the ANTT minimum-freight coefficient table: a per-kilometer
/// displacement coefficient (CCD) and a fixed load/unload coefficient (CC),
/// both in R$.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnttCoefficient {
    pub displacement_cost_per_km: Decimal,
    pub load_unload_cost: Decimal,
}

/// coefficient data keyed by (axle count, cargo category), transcribed from
/// Resolução ANTT nº 5.867/2020, Tabela A (transporte rodoviário de carga
/// lotação). a data edit here is all that is needed to track a new
/// resolution or add a category.
static COEFFICIENTS: LazyLock<HashMap<(u8, CargoCategory), AnttCoefficient>> =
    LazyLock::new(|| {
        use CargoCategory::*;
        let entries: Vec<(u8, CargoCategory, Decimal, Decimal)> = vec![
            // axles, category, CCD (R$/km), CC (R$)
            (2, CargaGeral, dec!(2.3041), dec!(104.36)),
            (3, CargaGeral, dec!(2.8469), dec!(113.63)),
            (4, CargaGeral, dec!(3.3083), dec!(122.49)),
            (5, CargaGeral, dec!(3.7487), dec!(140.25)),
            (6, CargaGeral, dec!(4.2139), dec!(153.02)),
            (7, CargaGeral, dec!(4.7855), dec!(190.70)),
            (9, CargaGeral, dec!(5.4789), dec!(223.36)),
            (2, GranelSolido, dec!(2.2726), dec!(102.22)),
            (3, GranelSolido, dec!(2.8109), dec!(111.32)),
            (4, GranelSolido, dec!(3.2671), dec!(120.04)),
            (5, GranelSolido, dec!(3.7018), dec!(137.46)),
            (6, GranelSolido, dec!(4.1616), dec!(149.98)),
            (7, GranelSolido, dec!(4.7262), dec!(186.91)),
            (9, GranelSolido, dec!(5.4113), dec!(218.93)),
            (2, GranelLiquido, dec!(2.3443), dec!(106.25)),
            (3, GranelLiquido, dec!(2.8941), dec!(115.72)),
            (4, GranelLiquido, dec!(3.3616), dec!(124.77)),
            (5, GranelLiquido, dec!(3.8086), dec!(142.86)),
            (6, GranelLiquido, dec!(4.2808), dec!(155.87)),
            (7, GranelLiquido, dec!(4.8630), dec!(194.29)),
            (9, GranelLiquido, dec!(5.5680), dec!(227.58)),
            (2, Frigorificada, dec!(2.7163), dec!(119.37)),
            (3, Frigorificada, dec!(3.3447), dec!(130.21)),
            (4, Frigorificada, dec!(3.8779), dec!(140.55)),
            (5, Frigorificada, dec!(4.3860), dec!(161.26)),
            (6, Frigorificada, dec!(4.9284), dec!(176.15)),
            (7, Frigorificada, dec!(5.6107), dec!(219.28)),
            (9, Frigorificada, dec!(6.4232), dec!(257.04)),
            (2, Conteineirizada, dec!(2.3041), dec!(104.36)),
            (3, Conteineirizada, dec!(2.8469), dec!(113.63)),
            (4, Conteineirizada, dec!(3.3083), dec!(122.49)),
            (5, Conteineirizada, dec!(3.7487), dec!(140.25)),
            (6, Conteineirizada, dec!(4.2139), dec!(153.02)),
            (7, Conteineirizada, dec!(4.7855), dec!(190.70)),
            (9, Conteineirizada, dec!(5.4789), dec!(223.36)),
            (2, PerigosaGeral, dec!(2.5121), dec!(130.77)),
            (3, PerigosaGeral, dec!(3.0663), dec!(140.37)),
            (4, PerigosaGeral, dec!(3.5344), dec!(149.57)),
            (5, PerigosaGeral, dec!(3.9935), dec!(169.75)),
            (6, PerigosaGeral, dec!(4.4659), dec!(182.84)),
            (7, PerigosaGeral, dec!(5.0531), dec!(222.74)),
            (9, PerigosaGeral, dec!(5.7678), dec!(257.42)),
            (2, Neogranel, dec!(2.2976), dec!(104.04)),
            (3, Neogranel, dec!(2.8389), dec!(113.24)),
            (4, Neogranel, dec!(3.2988), dec!(122.04)),
            (5, Neogranel, dec!(3.7375), dec!(139.74)),
            (6, Neogranel, dec!(4.2011), dec!(152.44)),
            (7, Neogranel, dec!(4.7709), dec!(189.97)),
            (9, Neogranel, dec!(5.4624), dec!(222.47)),
        ];
        entries
            .into_iter()
            .map(|(axles, category, ccd, cc)| {
                (
                    (axles, category),
                    AnttCoefficient {
                        displacement_cost_per_km: ccd,
                        load_unload_cost: cc,
                    },
                )
            })
            .collect()
    });

/// the axle counts the coefficient table lists, ascending.
pub fn listed_axle_counts() -> Vec<u8> {
    COEFFICIENTS
        .keys()
        .map(|(axles, _)| *axles)
        .unique()
        .sorted()
        .collect_vec()
}

/// conservative default row used when a combination is unlisted in every
/// other way: the lightest general-cargo configuration.
fn default_coefficient() -> AnttCoefficient {
    AnttCoefficient {
        displacement_cost_per_km: dec!(2.3041),
        load_unload_cost: dec!(104.36),
    }
}

/// looks up the coefficient row for a vehicle configuration.
///
/// the regulatory table is not exhaustive over fleet configurations, so
/// lookups degrade gracefully instead of raising: an unlisted axle count
/// falls back to the nearest lower listed axle count for the same
/// category, and a count below the whole table uses the conservative
/// default row. fallbacks are logged.
///
/// # Arguments
///
/// * `axles` - axle count of the vehicle configuration
/// * `category` - ANTT cargo category
///
/// # Returns
///
/// the applicable coefficient row, never an error
pub fn coefficient_for(axles: u8, category: CargoCategory) -> AnttCoefficient {
    if let Some(coefficient) = COEFFICIENTS.get(&(axles, category)) {
        return *coefficient;
    }
    let nearest_lower = listed_axle_counts()
        .into_iter()
        .filter(|listed| *listed < axles)
        .max();
    match nearest_lower.and_then(|listed| COEFFICIENTS.get(&(listed, category))) {
        Some(coefficient) => {
            log::warn!(
                "no ANTT coefficient row for {axles} axles / {category}, using nearest lower listed axle count"
            );
            *coefficient
        }
        None => {
            log::warn!(
                "no ANTT coefficient row at or below {axles} axles for {category}, using default row"
            );
            default_coefficient()
        }
    }
}
