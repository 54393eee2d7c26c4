pub mod antt;
pub mod calculation;
mod error;
pub mod route;
pub mod surcharge;
pub mod table;

pub use error::InputError;
