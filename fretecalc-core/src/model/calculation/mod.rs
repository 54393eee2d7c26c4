pub mod calculation_ops;
mod calculation_result;
mod charge_input;
mod freight_query;
mod route_input;

pub use calculation_result::CalculationResult;
pub use charge_input::ChargeInput;
pub use freight_query::FreightQuery;
pub use route_input::RouteInput;
