mod app_error;
pub mod cli_args;
pub mod run;

pub use app_error::AppError;
