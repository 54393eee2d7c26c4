mod antt_coefficient;
mod cargo_category;
mod state;
mod toll_exemption;
mod vehicle;

pub use antt_coefficient::{coefficient_for, listed_axle_counts, AnttCoefficient};
pub use cargo_category::CargoCategory;
pub use state::{Region, State};
pub use toll_exemption::{is_toll_exempt_from_icms, toll_exempt_origin_code};
pub use vehicle::{vehicle_spec, VehicleSpec};
