mod route_type;
pub mod route_ops;
mod tax_info;

pub use route_type::RouteType;
pub use tax_info::{TaxInfo, TaxRegime};
