use serde::{Deserialize, Serialize};

/// a vehicle configuration from the catalog: axle count and payload
/// capacity in kilograms.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VehicleSpec {
    pub label: &'static str,
    pub axles: u8,
    pub capacity_kg: u32,
}

/// common road-freight vehicle configurations used by Brazilian carriers.
/// resolves a vehicle label to its axle count when the caller does not
/// supply one, and backs the overload warning on declared cargo weight.
static VEHICLE_CATALOG: &[VehicleSpec] = &[
    VehicleSpec {
        label: "vuc",
        axles: 2,
        capacity_kg: 3_000,
    },
    VehicleSpec {
        label: "toco",
        axles: 2,
        capacity_kg: 6_000,
    },
    VehicleSpec {
        label: "truck",
        axles: 3,
        capacity_kg: 14_000,
    },
    VehicleSpec {
        label: "bitruck",
        axles: 4,
        capacity_kg: 18_000,
    },
    VehicleSpec {
        label: "carreta",
        axles: 5,
        capacity_kg: 27_000,
    },
    VehicleSpec {
        label: "carreta_ls",
        axles: 6,
        capacity_kg: 32_000,
    },
    VehicleSpec {
        label: "bitrem",
        axles: 7,
        capacity_kg: 37_000,
    },
    VehicleSpec {
        label: "rodotrem",
        axles: 9,
        capacity_kg: 48_000,
    },
];

/// looks up a catalog entry by label, case-insensitive and trimmed.
pub fn vehicle_spec(label: &str) -> Option<&'static VehicleSpec> {
    let normalized = label.trim().to_lowercase();
    VEHICLE_CATALOG
        .iter()
        .find(|spec| spec.label == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_label() {
        let spec = vehicle_spec("carreta").expect("catalog entry");
        assert_eq!(spec.axles, 5);
        assert_eq!(spec.capacity_kg, 27_000);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(vehicle_spec(" Truck "), vehicle_spec("truck"));
        assert!(vehicle_spec("TRUCK").is_some());
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert!(vehicle_spec("jamanta").is_none());
    }
}
